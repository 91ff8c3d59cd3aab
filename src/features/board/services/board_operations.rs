use tracing::{debug, warn};

use crate::core::config::BoardConfig;
use crate::core::models::{Order, OrderId};
use crate::core::services::CardStore;
use super::drag::{AreaMarker, DragSession};
use super::overlay::{OrderForm, Overlay, Overlays};
use super::presentation::Presentation;

/// Owns the card store, the drag session, dialog states and form drafts.
/// Every DOM handler on the board goes through one of these methods; none of
/// them fail, problems are logged and the interaction is dropped.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    config: BoardConfig,
    store: CardStore,
    session: DragSession,
    overlays: Overlays,
    pub add_form: OrderForm,
    pub edit_form: OrderForm,
    editing: Option<OrderId>,
}

impl OrderBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    // Drag and drop

    pub fn drag_over<I>(&mut self, chain: I, presentation: &mut impl Presentation)
    where
        I: IntoIterator,
        I::Item: AreaMarker,
    {
        self.session.drag_over(chain, presentation);
    }

    pub fn drag_start(&mut self, card: &OrderId) {
        self.session.drag_start(card, &self.store);
    }

    pub fn drag_end(&mut self, card: &OrderId, presentation: &mut impl Presentation) {
        self.session.finish(card, &mut self.store, presentation);
    }

    // Help

    pub fn open_help(&mut self, presentation: &mut impl Presentation) {
        self.overlays.open(Overlay::Help, presentation);
    }

    pub fn close_help(&mut self, presentation: &mut impl Presentation) {
        self.overlays.close(Overlay::Help, presentation);
    }

    // Add

    pub fn open_add(&mut self, presentation: &mut impl Presentation) {
        self.overlays.open(Overlay::Add, presentation);
    }

    pub fn cancel_add(&mut self, presentation: &mut impl Presentation) {
        self.overlays.close(Overlay::Add, presentation);
        self.add_form.reset();
    }

    pub fn submit_add(&mut self, presentation: &mut impl Presentation) -> Order {
        let mut fields = self.add_form.to_fields();
        fields.column = self.config.new_order_column;

        let order = self.store.create(fields);
        presentation.render_card(&order);

        self.overlays.close(Overlay::Add, presentation);
        self.add_form.reset();
        order
    }

    // Edit

    pub fn open_edit(&mut self, card: &OrderId, presentation: &mut impl Presentation) {
        let Some(order) = self.store.get(card) else {
            warn!(id = %card, "cannot edit unknown order");
            return;
        };
        self.edit_form = OrderForm::from_fields(order.fields());
        self.editing = Some(card.clone());
        self.overlays.open(Overlay::Edit, presentation);
    }

    pub fn cancel_edit(&mut self, presentation: &mut impl Presentation) {
        self.close_edit(presentation);
    }

    /// Writes the draft back to the edited order and swaps its card for a
    /// freshly rendered one in the order's (possibly new) column.
    pub fn submit_edit(&mut self, presentation: &mut impl Presentation) {
        if let Some(id) = self.editing.clone() {
            match self.store.update(&id, self.edit_form.to_fields()) {
                Ok(order) => {
                    presentation.remove_card(&id);
                    presentation.render_card(order);
                }
                Err(e) => warn!("discarding edit: {}", e),
            }
        } else {
            debug!("edit submitted with no order selected");
        }
        self.close_edit(presentation);
    }

    pub fn delete_edited(&mut self, presentation: &mut impl Presentation) {
        if let Some(id) = self.editing.clone() {
            match self.store.delete(&id) {
                Ok(_) => presentation.remove_card(&id),
                Err(e) => warn!("discarding delete: {}", e),
            }
        }
        self.close_edit(presentation);
    }

    fn close_edit(&mut self, presentation: &mut impl Presentation) {
        self.overlays.close(Overlay::Edit, presentation);
        self.edit_form.reset();
        self.editing = None;
    }
}

#[cfg(test)]
impl OrderBoard {
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn editing(&self) -> Option<&OrderId> {
        self.editing.as_ref()
    }
}
