use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::models::Column;
use crate::features::board::{
    use_board, AddOrderModal, BoardColumn, BoardHeader, EditOrderModal, HelpModal,
};

#[component]
pub fn OrderBoardPage() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let hook = use_board(config);

    view! {
        <div class="board-page">
            <BoardHeader />
            <div
                class="order-board"
                class:dragging=move || hook.board.with(|b| !b.session().is_idle())
            >
                {Column::all()
                    .into_iter()
                    .map(|column| view! { <BoardColumn column=column /> })
                    .collect_view()}
            </div>
            <HelpModal />
            <AddOrderModal />
            <EditOrderModal />
        </div>
    }
}
