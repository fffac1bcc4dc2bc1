//! HTML presenter.

use super::escape::escape_html;
use super::{OutputFormat, Presenter, RenderError};
use crate::model::{Document, Section, SectionBody, Table};
use std::fmt::Write;

/// Renders a [`Document`] as a single self-contained HTML page.
pub struct HtmlPresenter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlPresenter {
    /// Create a new HTML presenter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Render without the inline stylesheet
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    fn get_styles(&self) -> &'static str {
        r"
        <style>
            :root {
                --bg-color: #ffffff;
                --text-color: #1f2328;
                --accent-color: #0b3d91;
                --border-color: #d0d7de;
                --header-bg: #4d4d4d;
                --muted-color: #57606a;
                --error-color: #cf222e;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.5;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1, h2 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 12px;
                margin-bottom: 24px;
            }

            .generated {
                color: var(--muted-color);
                font-size: 0.9em;
            }

            .section {
                margin-bottom: 32px;
            }

            table {
                width: 100%;
                border-collapse: collapse;
                margin: 12px 0;
            }

            th, td {
                padding: 6px 10px;
                text-align: left;
                border: 1px solid var(--border-color);
                vertical-align: top;
                word-break: break-word;
            }

            th {
                background-color: var(--header-bg);
                color: #ffffff;
            }

            .placeholder {
                color: var(--muted-color);
                font-style: italic;
            }

            .errors {
                color: var(--error-color);
                margin: 8px 0;
                padding-left: 20px;
            }

            .severity-critical { background-color: #f4c7c3; }
            .severity-high { background-color: #fde2e1; }
            .severity-medium { background-color: #fff4ce; }
            .severity-low { background-color: #e6f4ea; }
            .severity-info { background-color: #ffffff; }
        </style>
"
    }

    fn write_section(&self, html: &mut String, section: &Section) -> Result<(), RenderError> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>{} Findings</h2>", escape_html(&section.title))?;

        if !section.errors.is_empty() {
            writeln!(html, "    <ul class=\"errors\">")?;
            for error in &section.errors {
                writeln!(html, "        <li>{}</li>", escape_html(error))?;
            }
            writeln!(html, "    </ul>")?;
        }

        match &section.body {
            SectionBody::Table(table) => self.write_table(html, table)?,
            SectionBody::Placeholder { text } => {
                writeln!(html, "    <p class=\"placeholder\">{}</p>", escape_html(text))?;
            }
        }

        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_table(&self, html: &mut String, table: &Table) -> Result<(), RenderError> {
        writeln!(html, "    <table>")?;
        writeln!(html, "        <thead>")?;
        writeln!(html, "            <tr>")?;
        for header in &table.headers {
            writeln!(html, "                <th>{}</th>", escape_html(header))?;
        }
        writeln!(html, "            </tr>")?;
        writeln!(html, "        </thead>")?;
        writeln!(html, "        <tbody>")?;
        for row in &table.rows {
            writeln!(html, "            <tr class=\"{}\">", row.tag.css_class())?;
            for cell in &row.cells {
                writeln!(
                    html,
                    "                <td>{}</td>",
                    escape_html(&cell.to_string())
                )?;
            }
            writeln!(html, "            </tr>")?;
        }
        writeln!(html, "        </tbody>")?;
        writeln!(html, "    </table>")?;
        Ok(())
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for HtmlPresenter {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let mut html = String::new();
        let title = escape_html(&document.title);

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{title}</title>")?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{title}</h1>")?;
        writeln!(
            html,
            "    <p class=\"generated\">Generated {}</p>",
            escape_html(&document.generated_at)
        )?;
        writeln!(html, "</div>")?;

        for section in &document.sections {
            self.write_section(&mut html, section)?;
        }

        writeln!(
            html,
            "<footer class=\"generated\">Generated by secscan-report v{}</footer>",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html.into_bytes())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}
