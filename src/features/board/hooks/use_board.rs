use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::features::board::dom::DomPresentation;
use crate::features::board::services::OrderBoard;

/// Board state plus the page it drives, shared with every board component
/// through context.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<OrderBoard>,
    pub page: DomPresentation,
}

impl BoardHook {
    /// Runs one board operation against the rendered page.
    pub fn dispatch(&self, op: impl FnOnce(&mut OrderBoard, &mut DomPresentation)) {
        let mut page = self.page;
        self.board.update(|board| op(board, &mut page));
    }
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let hook = BoardHook {
        board: RwSignal::new(OrderBoard::new(config)),
        page: DomPresentation::new(),
    };
    provide_context(hook);
    hook
}

pub fn expect_board() -> BoardHook {
    use_context::<BoardHook>().expect("board context")
}
