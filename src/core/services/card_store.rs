use tracing::info;

use crate::core::error::BoardError;
use crate::core::models::{Column, Order, OrderFields, OrderId};

/// Ordered collection of orders, the single source of truth for the board.
/// Insertion order is kept so cards render in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardStore {
    orders: Vec<Order>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, fields: OrderFields) -> Order {
        let order = Order::new(fields);
        self.insert(order.clone());
        order
    }

    /// Inserts an order, replacing any existing record with the same id.
    pub fn insert(&mut self, order: Order) {
        info!(id = %order.id, column = %order.column, "order stored");
        match self.position(&order.id) {
            Some(index) => self.orders[index] = order,
            None => self.orders.push(order),
        }
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    pub fn set_column(&mut self, id: &OrderId, column: Column) -> Result<&Order, BoardError> {
        let index = self.require(id)?;
        let order = &mut self.orders[index];
        info!(id = %id, from = %order.column, to = %column, "order moved");
        order.column = column;
        Ok(order)
    }

    pub fn update(&mut self, id: &OrderId, fields: OrderFields) -> Result<&Order, BoardError> {
        let index = self.require(id)?;
        let order = &mut self.orders[index];
        order.apply(fields);
        info!(id = %id, column = %order.column, "order updated");
        Ok(order)
    }

    pub fn delete(&mut self, id: &OrderId) -> Result<Order, BoardError> {
        let index = self.require(id)?;
        info!(id = %id, "order deleted");
        Ok(self.orders.remove(index))
    }

    pub fn in_column(&self, column: Column) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.column == column)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn position(&self, id: &OrderId) -> Option<usize> {
        self.orders.iter().position(|o| &o.id == id)
    }

    fn require(&self, id: &OrderId) -> Result<usize, BoardError> {
        self.position(id).ok_or_else(|| BoardError::OrderNotFound(id.clone()))
    }
}

#[cfg(test)]
impl CardStore {
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, column: Column) -> OrderFields {
        OrderFields { title: title.into(), table: "1".into(), column }
    }

    #[test]
    fn create_assigns_an_id_and_keeps_insertion_order() {
        let mut store = CardStore::new();
        let first = store.create(fields("Soup", Column::Ordered));
        let second = store.create(fields("Salad", Column::Ordered));

        let ids: Vec<_> = store.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn insert_with_existing_id_replaces_in_place() {
        let mut store = CardStore::new();
        store.insert(Order::with_id("a", fields("Soup", Column::Ordered)));
        store.insert(Order::with_id("b", fields("Salad", Column::Ordered)));
        store.insert(Order::with_id("a", fields("Stew", Column::Ready)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().map(|o| o.title.as_str()), Some("Stew"));
    }

    #[test]
    fn set_column_moves_only_the_addressed_order() {
        let mut store = CardStore::new();
        store.insert(Order::with_id("7", fields("Soup", Column::Ordered)));
        store.insert(Order::with_id("8", fields("Salad", Column::Ordered)));

        store.set_column(&"7".into(), Column::Ready).unwrap();

        assert_eq!(store.get(&"7".into()).unwrap().column, Column::Ready);
        assert_eq!(store.get(&"8".into()).unwrap().column, Column::Ordered);
        assert_eq!(store.in_column(Column::Ordered).count(), 1);
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut store = CardStore::new();
        let missing: OrderId = "nope".into();

        assert_eq!(
            store.set_column(&missing, Column::Served).unwrap_err(),
            BoardError::OrderNotFound(missing.clone())
        );
        assert!(store.update(&missing, OrderFields::default()).is_err());
        assert!(store.delete(&missing).is_err());
    }

    #[test]
    fn delete_returns_the_removed_record() {
        let mut store = CardStore::new();
        store.insert(Order::with_id("7", fields("Soup", Column::Served)));

        let removed = store.delete(&"7".into()).unwrap();
        assert_eq!(removed.title, "Soup");
        assert!(store.is_empty());
    }
}
