use tracing::{debug, info, warn};

use crate::core::models::{Column, OrderId};
use crate::core::services::CardStore;
use super::presentation::Presentation;

/// Attribute that marks a column's drop area.
pub const AREA_ATTRIBUTE: &str = "data-area";

/// A node in the chain walked outward from a drag event's target.
pub trait AreaMarker {
    /// Raw value of the node's column-area marker, if it carries one.
    fn area_marker(&self) -> Option<String>;
}

impl<T: AreaMarker + ?Sized> AreaMarker for &T {
    fn area_marker(&self) -> Option<String> {
        (**self).area_marker()
    }
}

/// Returns the column named by the innermost node that carries a usable
/// area marker. Markers that do not name a column are skipped.
pub fn resolve_hovered_column<I>(chain: I) -> Option<Column>
where
    I: IntoIterator,
    I::Item: AreaMarker,
{
    chain.into_iter().find_map(|node| {
        let marker = node.area_marker()?;
        match marker.parse::<Column>() {
            Ok(column) => Some(column),
            Err(e) => {
                warn!("ignoring area marker: {}", e);
                None
            }
        }
    })
}

/// State of the one drag gesture in flight. Reset to empty when the
/// gesture ends; a gesture that never ends is overwritten by the next start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    source: Option<Column>,
    over: Option<Column>,
    dragging: Option<OrderId>,
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none()
    }

    /// Tracks the hovered column. Ignored unless a card drag is in flight,
    /// so dragging files or text over the board marks nothing.
    pub fn drag_over<I>(&mut self, chain: I, presentation: &mut impl Presentation)
    where
        I: IntoIterator,
        I::Item: AreaMarker,
    {
        if self.is_idle() {
            return;
        }
        let Some(column) = resolve_hovered_column(chain) else {
            return;
        };
        if self.over != Some(column) {
            debug!(column = %column, "drag entered column");
            self.over = Some(column);
            presentation.set_column_highlight(Some(column));
        }
    }

    /// Starts a gesture from the card's own column. Whatever a gesture that
    /// never ended left behind is discarded.
    pub fn drag_start(&mut self, card: &OrderId, store: &CardStore) {
        *self = Self {
            source: store.get(card).map(|o| o.column),
            over: None,
            dragging: Some(card.clone()),
        };
        debug!(id = %card, source = ?self.source, "drag started");
    }

    /// Ends the gesture: commits the move to the last hovered column, clears
    /// the highlight and resets the session.
    pub fn finish(
        &mut self,
        card: &OrderId,
        store: &mut CardStore,
        presentation: &mut impl Presentation,
    ) {
        let session = std::mem::take(self);
        if session.dragging.as_ref().is_some_and(|d| d != card) {
            warn!(started = ?session.dragging, ended = %card, "drag ended on a different card");
        }
        debug!(id = %card, from = ?session.source, to = ?session.over, "drag finished");
        drag_end(card, session.over, store, presentation);
        if session.over.is_some() {
            presentation.set_column_highlight(None);
        }
    }
}

#[cfg(test)]
impl DragSession {
    pub fn source(&self) -> Option<Column> {
        self.source
    }

    pub fn over(&self) -> Option<Column> {
        self.over
    }
}

/// Moves `card` into `destination`. Without a destination nothing happens.
pub fn drag_end(
    card: &OrderId,
    destination: Option<Column>,
    store: &mut CardStore,
    presentation: &mut impl Presentation,
) {
    let Some(column) = destination else {
        debug!(id = %card, "drag ended outside any column");
        return;
    };
    match store.set_column(card, column) {
        Ok(_) => {
            info!(id = %card, column = %column, "card dropped");
            presentation.reparent_card(card, column);
        }
        Err(e) => warn!("dropping drag result: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Order, OrderFields};
    use crate::features::board::services::presentation::testing::{Instruction, RecordingPresentation};

    struct Node(Option<&'static str>);

    impl AreaMarker for Node {
        fn area_marker(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn chain(markers: &[Option<&'static str>]) -> Vec<Node> {
        markers.iter().map(|m| Node(*m)).collect()
    }

    fn store_with(id: &str, column: Column) -> CardStore {
        let mut store = CardStore::new();
        store.insert(Order::with_id(id, OrderFields {
            title: "Soup".into(),
            table: "4".into(),
            column,
        }));
        store
    }

    #[test]
    fn single_marker_is_found_at_any_depth() {
        for len in 1..6 {
            for pos in 0..len {
                let mut markers = vec![None; len];
                markers[pos] = Some("ready");
                let nodes = chain(&markers);
                assert_eq!(resolve_hovered_column(&nodes), Some(Column::Ready), "len {len} pos {pos}");
            }
        }
    }

    #[test]
    fn innermost_marker_wins() {
        let nodes = chain(&[None, Some("served"), Some("ordered")]);
        assert_eq!(resolve_hovered_column(&nodes), Some(Column::Served));
    }

    #[test]
    fn unmarked_chain_resolves_to_none() {
        assert_eq!(resolve_hovered_column(&chain(&[None, None, None])), None);
        assert_eq!(resolve_hovered_column(&chain(&[])), None);
    }

    #[test]
    fn unknown_marker_is_skipped() {
        let nodes = chain(&[Some("kitchen"), Some("ordered")]);
        assert_eq!(resolve_hovered_column(&nodes), Some(Column::Ordered));
    }

    fn dragging(id: &str, store: &CardStore) -> DragSession {
        let mut session = DragSession::default();
        session.drag_start(&id.into(), store);
        session
    }

    #[test]
    fn unmarked_chain_keeps_the_previous_hover() {
        let store = store_with("7", Column::Ordered);
        let mut session = dragging("7", &store);
        let mut page = RecordingPresentation::default();

        session.drag_over(&chain(&[None, Some("ready")]), &mut page);
        session.drag_over(&chain(&[None, None]), &mut page);

        assert_eq!(session.over(), Some(Column::Ready));
        assert_eq!(page.instructions, vec![Instruction::Highlight(Some(Column::Ready))]);
    }

    #[test]
    fn switching_columns_moves_the_highlight() {
        let store = store_with("7", Column::Ordered);
        let mut session = dragging("7", &store);
        let mut page = RecordingPresentation::default();

        session.drag_over(&chain(&[Some("ordered")]), &mut page);
        session.drag_over(&chain(&[Some("ordered")]), &mut page);
        session.drag_over(&chain(&[Some("served")]), &mut page);

        assert_eq!(page.highlight, Some(Column::Served));
        assert_eq!(page.count(|i| matches!(i, Instruction::Highlight(_))), 2);
    }

    #[test]
    fn unknown_marker_during_a_drag_keeps_the_current_hover() {
        let store = store_with("7", Column::Ordered);
        let mut session = dragging("7", &store);
        let mut page = RecordingPresentation::default();

        session.drag_over(&chain(&[Some("served")]), &mut page);
        session.drag_over(&chain(&[Some("kitchen"), None]), &mut page);

        assert_eq!(session.over(), Some(Column::Served));
        assert_eq!(page.instructions, vec![Instruction::Highlight(Some(Column::Served))]);
    }

    #[test]
    fn hover_without_a_card_drag_marks_nothing() {
        let mut session = DragSession::default();
        let mut page = RecordingPresentation::default();

        session.drag_over(&chain(&[Some("ready")]), &mut page);

        assert!(session.is_idle());
        assert_eq!(session.over(), None);
        assert_eq!(page.highlight, None);
        assert!(page.instructions.is_empty());
    }

    #[test]
    fn drag_end_commits_to_store_and_page() {
        let mut store = store_with("7", Column::Ordered);
        let mut page = RecordingPresentation::default();
        let id: OrderId = "7".into();
        page.layout.place(&id, Column::Ordered);

        drag_end(&id, Some(Column::Ready), &mut store, &mut page);

        assert_eq!(store.get(&id).unwrap().column, Column::Ready);
        assert_eq!(page.instructions, vec![Instruction::Reparent(id.clone(), Column::Ready)]);
        assert_eq!(page.layout.column_of(&id), Some(Column::Ready));
    }

    #[test]
    fn drag_end_without_destination_changes_nothing() {
        let mut store = store_with("7", Column::Ordered);
        let before = store.clone();
        let mut page = RecordingPresentation::default();

        drag_end(&"7".into(), None, &mut store, &mut page);

        assert_eq!(store, before);
        assert!(page.instructions.is_empty());
    }

    #[test]
    fn drag_end_for_unknown_card_is_silent() {
        let mut store = CardStore::new();
        let mut page = RecordingPresentation::default();

        drag_end(&"ghost".into(), Some(Column::Served), &mut store, &mut page);

        assert!(store.is_empty());
        assert!(page.instructions.is_empty());
    }

    #[test]
    fn drag_start_records_the_card_column() {
        let store = store_with("7", Column::Ordered);
        let session = dragging("7", &store);

        assert_eq!(session.source(), Some(Column::Ordered));
        assert_eq!(session.over(), None);
        assert!(!session.is_idle());
    }

    #[test]
    fn drag_start_discards_an_unfinished_gesture() {
        let store = store_with("7", Column::Served);
        let mut session = dragging("7", &store);
        let mut page = RecordingPresentation::default();
        session.drag_over(&chain(&[Some("ready")]), &mut page);

        session.drag_start(&"7".into(), &store);

        assert_eq!(session.source(), Some(Column::Served));
        assert_eq!(session.over(), None);
    }

    #[test]
    fn finish_commits_and_resets_the_session() {
        let mut store = store_with("7", Column::Ordered);
        let mut session = DragSession::default();
        let mut page = RecordingPresentation::default();
        let id: OrderId = "7".into();

        session.drag_start(&id, &store);
        session.drag_over(&chain(&[None, Some("ready")]), &mut page);
        session.finish(&id, &mut store, &mut page);

        assert_eq!(store.get(&id).unwrap().column, Column::Ready);
        assert_eq!(session, DragSession::default());
        assert_eq!(page.highlight, None);
        assert_eq!(page.count(|i| matches!(i, Instruction::Reparent(_, Column::Ready))), 1);
    }

    #[test]
    fn finish_without_hover_discards_the_gesture() {
        let mut store = store_with("7", Column::Ordered);
        let mut session = DragSession::default();
        let mut page = RecordingPresentation::default();
        let id: OrderId = "7".into();

        session.drag_start(&id, &store);
        session.finish(&id, &mut store, &mut page);

        assert_eq!(store.get(&id).unwrap().column, Column::Ordered);
        assert!(session.is_idle());
        assert!(page.instructions.is_empty());
    }
}
