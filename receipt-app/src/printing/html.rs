//! HTML receipt renderer
//!
//! Produces the single-page receipt used for export and for any HTML
//! capable print path.

use receipt_core::Document;

const VIEWPORT: &str = "width=device-width, initial-scale=1.0, maximum-scale=1.0, minimum-scale=1.0, user-scalable=no";

/// HTML receipt renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReceipt;

impl HtmlReceipt {
    pub fn new() -> Self {
        Self
    }

    /// Render a document to a complete HTML page
    pub fn render(&self, doc: &Document) -> String {
        let items: String = doc
            .item_lines
            .iter()
            .map(|line| format!("    <p>{}</p>\n", esc(line)))
            .collect();

        format!(
            r#"<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="{viewport}" />
  </head>
  <body style="text-align: left; padding: 20px;">
    <h1 style="text-align: center; font-size: 40px;">{brand}</h1>
    <hr />
    <h1>{title}</h1>
    <h5>{date_time}</h5>
{items}    <h6 style="font-weight: bold; font-size: 16px;">{total}</h6>
    <hr />
    <p style="text-align: center">{footer}</p>
  </body>
</html>
"#,
            viewport = VIEWPORT,
            brand = esc(&doc.header.brand),
            title = esc(&doc.header.title),
            date_time = esc(&doc.date_time_line()),
            items = items,
            total = esc(&doc.total_line),
            footer = esc(&doc.footer),
        )
    }
}

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
