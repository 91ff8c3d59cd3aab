use leptos::html::Dialog;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::core::models::{Column, Order, OrderId};
use super::services::{AreaMarker, BoardLayout, Overlay, Presentation, AREA_ATTRIBUTE};

impl AreaMarker for Element {
    fn area_marker(&self) -> Option<String> {
        self.get_attribute(AREA_ATTRIBUTE)
    }
}

/// The event target followed by each of its parent elements.
pub struct Ancestors(Option<Element>);

impl Iterator for Ancestors {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let current = self.0.take()?;
        self.0 = current.parent_element();
        Some(current)
    }
}

pub fn ancestors_of(ev: &Event) -> Ancestors {
    Ancestors(ev.target().and_then(|t| t.dyn_into::<Element>().ok()))
}

#[derive(Clone, Copy)]
pub struct OverlayRefs {
    pub help: NodeRef<Dialog>,
    pub add: NodeRef<Dialog>,
    pub edit: NodeRef<Dialog>,
}

impl OverlayRefs {
    fn get(&self, overlay: Overlay) -> NodeRef<Dialog> {
        match overlay {
            Overlay::Help => self.help,
            Overlay::Add => self.add,
            Overlay::Edit => self.edit,
        }
    }
}

/// Presentation backed by reactive signals: the columns render from
/// `layout`, the active column from `highlight`, dialogs through node refs.
#[derive(Clone, Copy)]
pub struct DomPresentation {
    pub layout: RwSignal<BoardLayout>,
    pub highlight: RwSignal<Option<Column>>,
    pub dialogs: OverlayRefs,
}

impl DomPresentation {
    pub fn new() -> Self {
        Self {
            layout: RwSignal::new(BoardLayout::new()),
            highlight: RwSignal::new(None),
            dialogs: OverlayRefs {
                help: NodeRef::new(),
                add: NodeRef::new(),
                edit: NodeRef::new(),
            },
        }
    }
}

impl Presentation for DomPresentation {
    fn render_card(&mut self, order: &Order) {
        self.layout.update(|layout| layout.place(&order.id, order.column));
    }

    fn reparent_card(&mut self, id: &OrderId, column: Column) {
        let mut moved = false;
        self.layout.update(|layout| moved = layout.reparent(id, column));
        if !moved {
            warn!(id = %id, column = %column, "no card to move");
        }
    }

    fn remove_card(&mut self, id: &OrderId) {
        self.layout.update(|layout| {
            layout.remove(id);
        });
    }

    fn set_column_highlight(&mut self, column: Option<Column>) {
        self.highlight.set(column);
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        if let Some(dialog) = self.dialogs.get(overlay).get_untracked() {
            if let Err(e) = dialog.show_modal() {
                warn!(overlay = overlay.as_str(), "show_modal failed: {:?}", e);
            }
        }
    }

    fn close_overlay(&mut self, overlay: Overlay) {
        if let Some(dialog) = self.dialogs.get(overlay).get_untracked() {
            dialog.close();
        }
    }
}
