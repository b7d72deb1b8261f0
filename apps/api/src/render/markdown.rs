//! Markdown → HTML for the PDF path.
//!
//! The generated text is model output and must never reach the PDF backend
//! as raw markup, so escaping runs first. The two Markdown substitutions
//! run AFTER escaping: the `*` markers survive escaping untouched, while
//! any `<`/`&` the model emitted are already neutralised.

use std::sync::LazyLock;

use regex::Regex;

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Escapes HTML-special characters. Ampersand first, or the later
/// replacements would double-escape their own output.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Converts the supported Markdown subset (bold, italic, line breaks) of
/// already-escaped text into HTML.
fn markdown_to_html(escaped: &str) -> String {
    let with_breaks = escaped.replace('\n', "<br />");
    let with_bold = RE_BOLD.replace_all(&with_breaks, "<strong>$1</strong>");
    RE_ITALIC.replace_all(&with_bold, "<em>$1</em>").into_owned()
}

/// Renders the generated fiche text into a minimal standalone HTML document
/// suitable for the PDF backend.
pub fn render_document(markdown: &str, title: &str) -> String {
    let body = markdown_to_html(&escape_html(markdown));
    let heading = escape_html(title);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{heading}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{heading}</h1>\n\
         <div>{body}</div>\n\
         </body>\n\
         </html>\n"
    )
}
