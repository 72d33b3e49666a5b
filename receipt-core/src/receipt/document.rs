//! Abstract receipt document
//!
//! The [`Document`] fixes the ordering and wording of every line. Turning
//! it into markup or printer bytes is left to the adapters in `receipt-app`.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::models::LineItem;
use crate::money::format_dollars;

use super::compute_total;

/// Brand and title at the top of the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHeader {
    pub brand: String,
    pub title: String,
}

/// Renderable representation of a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: DocumentHeader,
    pub date: String,
    pub time: String,
    /// One `"<name>: $<price>"` line per item, in insertion order
    pub item_lines: Vec<String>,
    /// `"Total: $<total>"`
    pub total_line: String,
    pub footer: String,
}

impl Document {
    /// `Date: <date> - Time: <time>`
    pub fn date_time_line(&self) -> String {
        format!("Date: {} - Time: {}", self.date, self.time)
    }

    /// Every text line of the document, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.item_lines.len() + 5);
        lines.push(self.header.brand.clone());
        lines.push(self.header.title.clone());
        lines.push(self.date_time_line());
        lines.extend(self.item_lines.iter().cloned());
        lines.push(self.total_line.clone());
        lines.push(self.footer.clone());
        lines
    }
}

/// Fixed text and locale formats used when rendering
///
/// The defaults give the stock receipt: `Insyllium` / `Receipt`
/// header, US month/day/year date and 12-hour clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTemplate {
    pub brand: String,
    pub title: String,
    pub footer: String,
    /// chrono `strftime` pattern for the date
    pub date_format: String,
    /// chrono `strftime` pattern for the time
    pub time_format: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            brand: "Insyllium".to_string(),
            title: "Receipt".to_string(),
            footer: "Thanks for choosing us".to_string(),
            date_format: "%-m/%-d/%Y".to_string(),
            time_format: "%-I:%M:%S %p".to_string(),
        }
    }
}

impl DocumentTemplate {
    /// Render `items` as of `timestamp`
    ///
    /// Pure: the same `(items, timestamp)` always yields the same document.
    /// The timestamp is formatted in its own timezone.
    pub fn render<Tz>(&self, items: &[LineItem], timestamp: &DateTime<Tz>) -> Document
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Document {
            header: DocumentHeader {
                brand: self.brand.clone(),
                title: self.title.clone(),
            },
            date: timestamp.format(&self.date_format).to_string(),
            time: timestamp.format(&self.time_format).to_string(),
            item_lines: items.iter().map(LineItem::display_line).collect(),
            total_line: format!("Total: {}", format_dollars(compute_total(items))),
            footer: self.footer.clone(),
        }
    }
}

/// Render with the default template
pub fn render_document<Tz>(items: &[LineItem], timestamp: &DateTime<Tz>) -> Document
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DocumentTemplate::default().render(items, timestamp)
}
