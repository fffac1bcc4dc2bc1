//! Escaping utilities for safe report generation.
//!
//! Scanner output is untrusted: issue texts and advisories routinely quote
//! source code containing markup. All finding data MUST be escaped before it
//! is embedded in HTML or a PDF content stream.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use secscan_report::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for a PDF literal string `( ... )` in WinAnsi encoding.
///
/// Backslashes and parentheses are escaped, Latin-1 characters above ASCII
/// become octal escapes, and anything the standard fonts cannot show
/// (control characters, non-Latin scripts) is replaced by `?`. The result is
/// always plain ASCII.
///
/// # Examples
///
/// ```
/// use secscan_report::reports::escape::escape_pdf_text;
///
/// assert_eq!(escape_pdf_text("eval(x)"), "eval\\(x\\)");
/// assert_eq!(escape_pdf_text("café"), "caf\\351");
/// ```
pub fn escape_pdf_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            '\t' => result.push(' '),
            ' '..='~' => result.push(c),
            '\u{a0}'..='\u{ff}' => result.push_str(&format!("\\{:03o}", c as u32)),
            _ => result.push('?'),
        }
    }
    result
}
