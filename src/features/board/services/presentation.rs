use std::collections::BTreeMap;

use crate::core::models::{Column, Order, OrderId};
use super::overlay::Overlay;

/// Everything the board controller asks of the rendered page. The page
/// never owns order data; it only places, moves and removes cards.
pub trait Presentation {
    fn render_card(&mut self, order: &Order);
    fn reparent_card(&mut self, id: &OrderId, column: Column);
    fn remove_card(&mut self, id: &OrderId);
    /// At most one column is highlighted; `None` clears it.
    fn set_column_highlight(&mut self, column: Option<Column>);
    fn show_overlay(&mut self, overlay: Overlay);
    fn close_overlay(&mut self, overlay: Overlay);
}

/// Which card ids sit in which column container, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLayout {
    columns: BTreeMap<Column, Vec<OrderId>>,
}

impl BoardLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the card to `column`, taking it out of wherever it was.
    pub fn place(&mut self, id: &OrderId, column: Column) {
        self.remove(id);
        self.columns.entry(column).or_default().push(id.clone());
    }

    /// Moves an already placed card. Returns `false` if the card is unknown.
    pub fn reparent(&mut self, id: &OrderId, column: Column) -> bool {
        if self.column_of(id).is_none() {
            return false;
        }
        self.place(id, column);
        true
    }

    pub fn remove(&mut self, id: &OrderId) -> bool {
        let mut removed = false;
        for cards in self.columns.values_mut() {
            let before = cards.len();
            cards.retain(|c| c != id);
            removed |= cards.len() != before;
        }
        removed
    }

    pub fn column_of(&self, id: &OrderId) -> Option<Column> {
        self.columns
            .iter()
            .find(|(_, cards)| cards.contains(id))
            .map(|(column, _)| *column)
    }

    pub fn cards_in(&self, column: Column) -> &[OrderId] {
        self.columns.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
impl BoardLayout {
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
