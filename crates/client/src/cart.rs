//! Cart State Manager.
//!
//! The cart owns an insertion-ordered list of lines keyed by menu item ID.
//! At most one line exists per item; adding an item that is already present
//! increments its quantity instead of duplicating the line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moma_core::{MenuItem, MenuItemId, OrderLine, Price};

/// One row in the cart: a distinct menu item and its quantity.
///
/// Name, price, and image are snapshots taken when the item was first added;
/// later catalog edits do not flow back into existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// The total for this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// The cart: an insertion-ordered sequence of [`CartLine`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a menu item.
    ///
    /// Increments the existing line's quantity when the item is already in
    /// the cart; otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: 1,
        });
    }

    /// Set the quantity of a line, clamped at 0.
    ///
    /// No-op when the item is not in the cart. A line driven to quantity 0
    /// stays in the cart until [`Self::remove_item`] is called.
    pub fn update_quantity(&mut self, item_id: MenuItemId, quantity: i64) {
        let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) else {
            return;
        };
        line.quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
    }

    /// Remove a line entirely, regardless of quantity.
    ///
    /// Idempotent: removing an absent item is a no-op.
    pub fn remove_item(&mut self, item_id: MenuItemId) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Number of distinct lines in the cart.
    ///
    /// This is the cart badge count: lines, not total units.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of line subtotals. Quantity-0 lines contribute 0.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Empty the cart (used after a successful checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Snapshot the cart as order lines for checkout submission.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                item_id: l.item_id,
                name: l.name.clone(),
                price: l.price,
                quantity: l.quantity,
            })
            .collect()
    }
}
