//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{MenuItemId, OrderId, UserId};
use super::price::Price;
use super::status::OrderStatus;

/// One row of an order: a menu item snapshot and its quantity.
///
/// Name and price are copied from the cart line at checkout time, so later
/// catalog edits never rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl OrderLine {
    /// The total for this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Account that placed the order.
    pub user_id: UserId,
    /// Ordered items.
    pub lines: Vec<OrderLine>,
    /// Sum of line subtotals at placement time.
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Recompute the total from the lines.
    #[must_use]
    pub fn compute_total(lines: &[OrderLine]) -> Decimal {
        lines.iter().map(OrderLine::subtotal).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i32, price: i64, quantity: u32) -> OrderLine {
        OrderLine {
            item_id: MenuItemId::new(id),
            name: format!("item-{id}"),
            price: Price::new(Decimal::from(price)).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line(1, 449, 2).subtotal(), Decimal::from(898));
        assert_eq!(line(2, 449, 0).subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total() {
        let lines = vec![line(1, 100, 1), line(2, 200, 1)];
        assert_eq!(Order::compute_total(&lines), Decimal::from(300));
    }
}
