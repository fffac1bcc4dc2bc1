//! PDF presenter.
//!
//! Emits a self-contained PDF 1.4 file using the standard Helvetica fonts,
//! so no font data is embedded. Layout is a simple top-to-bottom flow:
//! the title block opens the first page, every section after the first
//! starts on a new page, and tables that overflow a page continue on the
//! next one with the header row repeated.

use super::escape::escape_pdf_text;
use super::{OutputFormat, Presenter, RenderError};
use crate::model::{Document, Section, SectionBody, SeverityTag, Table};
use std::fmt::Write;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const TEXT_SIZE: f32 = 10.0;
const CELL_SIZE: f32 = 9.0;
const LINE_SPACING: f32 = 1.25;
const CELL_PADDING: f32 = 4.0;

/// Average glyph width of Helvetica relative to the font size
const CHAR_WIDTH: f32 = 0.55;
const MAX_CELL_LINES: usize = 6;
const MIN_COLUMN_WEIGHT: usize = 4;
const MAX_COLUMN_WEIGHT: usize = 60;

type Rgb = (f32, f32, f32);

const BLACK: Rgb = (0.0, 0.0, 0.0);
const WHITE: Rgb = (1.0, 1.0, 1.0);
const HEADER_FILL: Rgb = (0.3, 0.3, 0.3);
const GRID: Rgb = (0.6, 0.6, 0.6);
const ERROR_TEXT: Rgb = (0.8, 0.13, 0.18);
const MUTED_TEXT: Rgb = (0.35, 0.38, 0.42);

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    const fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

const fn row_fill(tag: SeverityTag) -> Option<Rgb> {
    match tag {
        SeverityTag::Critical => Some((0.96, 0.78, 0.76)),
        SeverityTag::High => Some((0.99, 0.89, 0.88)),
        SeverityTag::Medium => Some((1.0, 0.96, 0.81)),
        SeverityTag::Low => Some((0.9, 0.96, 0.92)),
        SeverityTag::Info => None,
    }
}

/// Renders a [`Document`] as a paginated PDF.
pub struct PdfPresenter;

impl PdfPresenter {
    /// Create a new PDF presenter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PdfPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for PdfPresenter {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let mut layout = Layout::new();

        layout.paragraph(&document.title, Font::Bold, TITLE_SIZE, BLACK)?;
        layout.paragraph(
            &format!("Generated {}", document.generated_at),
            Font::Regular,
            TEXT_SIZE,
            MUTED_TEXT,
        )?;
        layout.gap(TEXT_SIZE);

        for (index, section) in document.sections.iter().enumerate() {
            if index > 0 {
                layout.new_page();
            }
            layout.section(section)?;
        }

        Ok(assemble(&layout.finish()))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }
}

/// Page content streams under construction.
struct Layout {
    pages: Vec<String>,
    current: String,
    y: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn at_page_top(&self) -> bool {
        self.current.is_empty()
    }

    fn fits(&self, height: f32) -> bool {
        self.y - height >= MARGIN
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn finish(mut self) -> Vec<String> {
        self.pages.push(self.current);
        self.pages
    }

    fn text(&mut self, x: f32, baseline: f32, font: Font, size: f32, text: &str) -> std::fmt::Result {
        writeln!(
            self.current,
            "BT /{} {size:.1} Tf {x:.2} {baseline:.2} Td ({}) Tj ET",
            font.resource(),
            escape_pdf_text(text)
        )
    }

    fn fill_color(&mut self, (r, g, b): Rgb) -> std::fmt::Result {
        writeln!(self.current, "{r:.2} {g:.2} {b:.2} rg")
    }

    /// Wrapped text spanning the content width
    fn paragraph(&mut self, text: &str, font: Font, size: f32, color: Rgb) -> std::fmt::Result {
        let line_height = size * LINE_SPACING;
        let max_chars = chars_for_width(CONTENT_WIDTH, size);
        self.fill_color(color)?;
        for line in wrap_text(text, max_chars) {
            if !self.fits(line_height) {
                self.new_page();
                self.fill_color(color)?;
            }
            self.y -= line_height;
            self.text(MARGIN, self.y + (line_height - size), font, size, &line)?;
        }
        self.fill_color(BLACK)
    }

    fn section(&mut self, section: &Section) -> Result<(), RenderError> {
        self.paragraph(
            &format!("{} Findings", section.title),
            Font::Bold,
            HEADING_SIZE,
            BLACK,
        )?;
        self.gap(HEADING_SIZE * 0.25);

        for error in &section.errors {
            self.paragraph(&format!("- {error}"), Font::Regular, TEXT_SIZE, ERROR_TEXT)?;
        }
        if !section.errors.is_empty() {
            self.gap(TEXT_SIZE * 0.5);
        }

        match &section.body {
            SectionBody::Table(table) => self.table(table),
            SectionBody::Placeholder { text } => {
                self.paragraph(text, Font::Regular, TEXT_SIZE, MUTED_TEXT)?;
                Ok(())
            }
        }
    }

    fn table(&mut self, table: &Table) -> Result<(), RenderError> {
        let columns = table.width();
        if columns == 0 {
            return Err(RenderError::Layout("table has no columns".to_string()));
        }
        if let Some(row) = table.rows.iter().find(|r| r.cells.len() != columns) {
            return Err(RenderError::Layout(format!(
                "row has {} cells but table has {columns} columns",
                row.cells.len()
            )));
        }

        let cells: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(ToString::to_string).collect())
            .collect();
        let widths = column_widths(&table.headers, &cells);

        let header = wrap_row(&table.headers, &widths);
        let header_height = row_height(&header);

        let first_height = cells
            .first()
            .map_or(0.0, |row| row_height(&wrap_row(row, &widths)));
        if !self.fits(header_height + first_height) && !self.at_page_top() {
            self.new_page();
        }
        self.row(&header, &widths, Some(HEADER_FILL), WHITE, Font::Bold)?;

        for (row, texts) in table.rows.iter().zip(&cells) {
            let lines = wrap_row(texts, &widths);
            if !self.fits(row_height(&lines)) {
                self.new_page();
                self.row(&header, &widths, Some(HEADER_FILL), WHITE, Font::Bold)?;
            }
            self.row(&lines, &widths, row_fill(row.tag), BLACK, Font::Regular)?;
        }
        self.gap(TEXT_SIZE);
        Ok(())
    }

    fn row(
        &mut self,
        lines: &[Vec<String>],
        widths: &[f32],
        fill: Option<Rgb>,
        text_color: Rgb,
        font: Font,
    ) -> std::fmt::Result {
        let height = row_height(lines);
        let top = self.y;
        let bottom = top - height;

        if let Some(color) = fill {
            self.fill_color(color)?;
            writeln!(
                self.current,
                "{MARGIN:.2} {bottom:.2} {CONTENT_WIDTH:.2} {height:.2} re f"
            )?;
        }

        let (r, g, b) = GRID;
        writeln!(self.current, "{r:.2} {g:.2} {b:.2} RG 0.5 w")?;
        let mut x = MARGIN;
        for width in widths {
            writeln!(self.current, "{x:.2} {bottom:.2} {width:.2} {height:.2} re S")?;
            x += width;
        }

        self.fill_color(text_color)?;
        let line_height = CELL_SIZE * LINE_SPACING;
        let mut x = MARGIN;
        for (cell, width) in lines.iter().zip(widths) {
            for (k, line) in cell.iter().enumerate() {
                let baseline = top - CELL_PADDING - CELL_SIZE - line_height * k as f32;
                self.text(x + CELL_PADDING, baseline, font, CELL_SIZE, line)?;
            }
            x += width;
        }
        self.fill_color(BLACK)?;

        self.y = bottom;
        Ok(())
    }
}

fn chars_for_width(width: f32, size: f32) -> usize {
    ((width / (size * CHAR_WIDTH)).floor() as usize).max(1)
}

/// Column widths proportional to the longest content, clamped so one
/// verbose column cannot starve the others.
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    let weights: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
                .clamp(MIN_COLUMN_WEIGHT, MAX_COLUMN_WEIGHT)
        })
        .collect();
    let total: usize = weights.iter().sum();
    weights
        .iter()
        .map(|&w| CONTENT_WIDTH * w as f32 / total as f32)
        .collect()
}

fn wrap_row<S: AsRef<str>>(cells: &[S], widths: &[f32]) -> Vec<Vec<String>> {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let max_chars = chars_for_width(width - 2.0 * CELL_PADDING, CELL_SIZE);
            clamp_lines(wrap_text(cell.as_ref(), max_chars), MAX_CELL_LINES, max_chars)
        })
        .collect()
}

fn row_height(lines: &[Vec<String>]) -> f32 {
    let tallest = lines.iter().map(Vec::len).max().unwrap_or(1).max(1);
    tallest as f32 * CELL_SIZE * LINE_SPACING + 2.0 * CELL_PADDING
}

/// Greedy word wrap; words longer than a line are split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.iter().collect());
            word = rest;
        }

        if line_len > 0 && line_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn clamp_lines(mut lines: Vec<String>, max_lines: usize, max_chars: usize) -> Vec<String> {
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(max_chars.saturating_sub(3)).collect();
            *last = format!("{kept}...");
        }
    }
    lines
}

/// Serialize page content streams into a complete PDF file.
fn assemble(pages: &[String]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::with_capacity(4 + pages.len() * 2);

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 5 + 2 * i))
        .collect();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, content) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            6 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    out.extend_from_slice(xref.as_bytes());
    out
}
