//! Placed orders collection.

use std::sync::RwLock;

use chrono::Utc;

use moma_core::{Order, OrderId, OrderLine, OrderStatus, UserId};

use super::StoreError;

/// Orders placed during this server run, newest last.
#[derive(Debug, Default)]
pub struct OrderStore {
    inner: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    orders: Vec<Order>,
    next_id: i32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderStore {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new order. The total is computed server-side from the
    /// submitted lines, never taken from the client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn create(&self, user_id: UserId, lines: Vec<OrderLine>) -> Result<Order, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let order = Order {
            id: OrderId::new(table.next_id),
            user_id,
            total: Order::compute_total(&lines),
            lines,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        };
        table.next_id += 1;
        table.orders.push(order.clone());
        Ok(order)
    }

    /// All orders, in placement order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.orders.clone())
    }

    /// Orders placed by one account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Fetch one order by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.orders.iter().find(|o| o.id == id).cloned())
    }

    /// Update an order's status. `Ok(None)` when the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(order) = table.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        order.status = status;
        Ok(Some(order.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use moma_core::{MenuItemId, Price};
    use rust_decimal::Decimal;

    use super::*;

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                item_id: MenuItemId::new(1),
                name: "Butter Chicken".to_string(),
                price: Price::from_major(449),
                quantity: 2,
            },
            OrderLine {
                item_id: MenuItemId::new(2),
                name: "Butter Naan".to_string(),
                price: Price::from_major(69),
                quantity: 4,
            },
        ]
    }

    #[test]
    fn test_create_computes_total_and_defaults() {
        let store = OrderStore::new();
        let order = store.create(UserId::new(2), lines()).unwrap();
        assert_eq!(order.id.as_i32(), 1);
        assert_eq!(order.total, Decimal::from(449 * 2 + 69 * 4));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_list_for_user_filters() {
        let store = OrderStore::new();
        store.create(UserId::new(2), lines()).unwrap();
        store.create(UserId::new(3), lines()).unwrap();
        store.create(UserId::new(2), lines()).unwrap();

        assert_eq!(store.list_for_user(UserId::new(2)).unwrap().len(), 2);
        assert_eq!(store.list_for_user(UserId::new(9)).unwrap().len(), 0);
        assert_eq!(store.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_set_status() {
        let store = OrderStore::new();
        let order = store.create(UserId::new(2), lines()).unwrap();
        let updated = store
            .set_status(order.id, OrderStatus::Delivered)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        assert!(
            store
                .set_status(OrderId::new(99), OrderStatus::Delivered)
                .unwrap()
                .is_none()
        );
    }
}
