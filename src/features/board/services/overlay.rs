use tracing::debug;

use crate::core::models::{Column, OrderFields};
use super::presentation::Presentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Help,
    Add,
    Edit,
}

impl Overlay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::Help => "help",
            Overlay::Add => "add",
            Overlay::Edit => "edit",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Open/closed state of the three dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    help: OverlayState,
    add: OverlayState,
    edit: OverlayState,
}

impl Overlays {
    pub fn open(&mut self, overlay: Overlay, presentation: &mut impl Presentation) {
        debug!(overlay = overlay.as_str(), "overlay opened");
        *self.slot(overlay) = OverlayState::Open;
        presentation.show_overlay(overlay);
    }

    pub fn close(&mut self, overlay: Overlay, presentation: &mut impl Presentation) {
        debug!(overlay = overlay.as_str(), "overlay closed");
        *self.slot(overlay) = OverlayState::Closed;
        presentation.close_overlay(overlay);
    }

    fn slot(&mut self, overlay: Overlay) -> &mut OverlayState {
        match overlay {
            Overlay::Help => &mut self.help,
            Overlay::Add => &mut self.add,
            Overlay::Edit => &mut self.edit,
        }
    }
}

#[cfg(test)]
impl Overlays {
    pub fn state(&self, overlay: Overlay) -> OverlayState {
        match overlay {
            Overlay::Help => self.help,
            Overlay::Add => self.add,
            Overlay::Edit => self.edit,
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.state(overlay) == OverlayState::Open
    }
}

/// Draft values bound to the add and edit dialog inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub title: String,
    pub table: String,
    pub column: Column,
}

impl OrderForm {
    pub fn from_fields(fields: OrderFields) -> Self {
        Self {
            title: fields.title,
            table: fields.table,
            column: fields.column,
        }
    }

    pub fn to_fields(&self) -> OrderFields {
        OrderFields {
            title: self.title.clone(),
            table: self.table.clone(),
            column: self.column,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
impl OrderForm {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.table.is_empty()
    }
}
