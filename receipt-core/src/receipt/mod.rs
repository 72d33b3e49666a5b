//! Receipt builder
//!
//! Append-only, ordered item list plus the two derived views:
//! [`compute_total`] and [`render_document`].

mod document;

pub use document::{Document, DocumentHeader, DocumentTemplate, render_document};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ReceiptResult;
use crate::models::LineItem;
use crate::money::round_money;

/// Conceptual state of a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptState {
    /// No items yet
    Empty,
    /// At least one item
    HasItems,
}

/// Owns the ordered list of line items
///
/// Items are kept in entry order. There is no way to remove or edit an
/// item once added; a fresh builder is the only way back to
/// [`ReceiptState::Empty`].
#[derive(Debug, Clone, Default)]
pub struct ReceiptBuilder {
    items: Vec<LineItem>,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new item
    ///
    /// Returns the appended item. On error nothing is appended.
    pub fn add_item(&mut self, name: &str, raw_price: &str) -> ReceiptResult<LineItem> {
        let item = LineItem::parse(name, raw_price)?;
        debug!(name = item.name(), price = %item.price(), position = self.items.len(), "Item added");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> ReceiptState {
        if self.items.is_empty() {
            ReceiptState::Empty
        } else {
            ReceiptState::HasItems
        }
    }

    /// Current total, recomputed from the items on every call
    pub fn total(&self) -> Decimal {
        compute_total(&self.items)
    }
}

/// Sum of all item prices, in sequence order
///
/// Prices already carry two decimals, so partial sums are never re-rounded.
/// Returns `0.00` for an empty slice. Prices are capped at
/// [`MAX_PRICE`](crate::money::MAX_PRICE), so the sum stays exact for any
/// realistic item count.
pub fn compute_total(items: &[LineItem]) -> Decimal {
    let sum = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.price()));
    round_money(sum)
}
