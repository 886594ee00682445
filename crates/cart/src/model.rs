//! Cart domain model: line items and the pure collection logic.
//!
//! Everything here is synchronous and side-effect free; persistence,
//! notifications, and collaborator I/O live in [`crate::manager`]. Keeping
//! the collection pure makes the reconciliation invariants directly testable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use verdemar_core::{Money, StockStatus, VariantId};

use crate::clients::StockRecord;

/// One cart entry, keyed by variant identifier.
///
/// Display metadata is immutable once added. `unit_price` is the price at
/// add time: the cart never re-prices on stock refresh, and the order payload
/// carries no price at all - the backend prices the order at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Opaque variant identifier from the commerce platform.
    pub variant_id: VariantId,
    /// Units in the cart; always >= 1.
    pub quantity: u32,
    /// Display title.
    pub title: String,
    /// Price at add time.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Product image URL, if any.
    #[serde(rename = "image", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    /// When the item was first added.
    pub added_at: DateTime<Utc>,
    /// Last-known authoritative stock count; absent until the first
    /// reconciliation pass.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quantity_available: Option<u32>,
}

impl LineItem {
    /// Create a line item added now, with no stock information yet.
    #[must_use]
    pub fn new(
        variant_id: VariantId,
        quantity: u32,
        title: impl Into<String>,
        unit_price: Money,
        image_url: Option<String>,
    ) -> Self {
        Self {
            variant_id,
            quantity,
            title: title.into(),
            unit_price,
            image_url,
            added_at: Utc::now(),
            quantity_available: None,
        }
    }

    /// Extended price for this line (`unit_price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Display classification of this item's availability.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_available(self.quantity_available)
    }
}

/// How an [`Cart::add`] call changed the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A line item with this variant already existed; quantities were merged.
    Merged {
        /// Quantity after the merge.
        new_quantity: u32,
    },
    /// The item was appended as a new line.
    Appended,
}

/// How an [`Cart::update_quantity`] call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Quantity replaced.
    Updated,
    /// Requested quantity was below 1; nothing changed.
    BelowMinimum,
    /// Requested quantity exceeds last-known availability; nothing changed.
    Rejected {
        /// Units the stock collaborator last reported as available.
        available: u32,
    },
    /// No line item with that variant exists.
    NotFound,
}

/// One quantity clamp applied during a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    /// Variant that was clamped.
    pub variant_id: VariantId,
    /// Display title for the user notice.
    pub title: String,
    /// Quantity after the clamp; 0 means the line item was removed.
    pub clamped_to: u32,
}

/// Result of applying fetched stock records to the collection.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    /// Per-item clamps, in collection order.
    pub adjustments: Vec<StockAdjustment>,
    /// Variants the stock collaborator had no record for (availability
    /// treated as 0).
    pub missing: Vec<VariantId>,
}

impl ReconcileReport {
    /// True when the pass changed no quantities.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.adjustments.is_empty()
    }
}

/// An ordered collection of line items, unique by variant identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Restore a cart from previously persisted line items.
    #[must_use]
    pub const fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// True when the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items (the navigation badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// `Σ(unit_price × quantity)` over the collection.
    ///
    /// An empty cart yields a zero amount in the default currency.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Money::new(Decimal::ZERO, Default::default()), |acc, line| {
                acc + line
            })
    }

    /// Look up a line item by variant.
    #[must_use]
    pub fn get(&self, variant_id: &VariantId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.variant_id == variant_id)
    }

    /// Add an item, merging quantities when the variant is already present.
    pub fn add(&mut self, item: LineItem) -> AddOutcome {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|existing| existing.variant_id == item.variant_id)
        {
            existing.quantity += item.quantity;
            AddOutcome::Merged {
                new_quantity: existing.quantity,
            }
        } else {
            self.items.push(item);
            AddOutcome::Appended
        }
    }

    /// Remove a line item. Removing an absent variant is a no-op.
    ///
    /// Returns `true` when an item was actually removed.
    pub fn remove(&mut self, variant_id: &VariantId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.variant_id != variant_id);
        self.items.len() != before
    }

    /// Replace a line item's quantity, bounded by last-known availability.
    ///
    /// Quantities below 1 are a no-op (removal is explicit, never implicit).
    /// Availability that has never been reconciled counts as 0, so the update
    /// is rejected until a reconciliation pass has run.
    pub fn update_quantity(&mut self, variant_id: &VariantId, new_quantity: u32) -> UpdateOutcome {
        if new_quantity < 1 {
            return UpdateOutcome::BelowMinimum;
        }

        let Some(item) = self
            .items
            .iter_mut()
            .find(|item| &item.variant_id == variant_id)
        else {
            return UpdateOutcome::NotFound;
        };

        let available = item.quantity_available.unwrap_or(0);
        if new_quantity > available {
            return UpdateOutcome::Rejected { available };
        }

        item.quantity = new_quantity;
        UpdateOutcome::Updated
    }

    /// Reconcile quantities against fetched authoritative stock records.
    ///
    /// Every line item gets its `quantity_available` refreshed; a variant
    /// missing from `records` counts as availability 0. Quantities above
    /// availability are clamped down, and a clamp to zero removes the line
    /// item entirely (a cart row always has quantity >= 1).
    pub fn apply_stock(&mut self, records: &[StockRecord]) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for item in &mut self.items {
            let record = records.iter().find(|record| record.id == item.variant_id);
            if record.is_none() {
                report.missing.push(item.variant_id.clone());
            }
            let available = record.map_or(0, |record| record.quantity_available);
            item.quantity_available = Some(available);

            if item.quantity > available {
                report.adjustments.push(StockAdjustment {
                    variant_id: item.variant_id.clone(),
                    title: item.title.clone(),
                    clamped_to: available,
                });
                item.quantity = available;
            }
        }

        // Drop rows clamped to zero; quantity >= 1 is an invariant.
        self.items.retain(|item| item.quantity >= 1);

        report
    }

    /// Empty the collection.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
