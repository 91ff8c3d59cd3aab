use leptos::prelude::*;

use crate::features::board::hooks::expect_board;

#[component]
pub fn BoardHeader() -> impl IntoView {
    let hook = expect_board();

    view! {
        <header class="board-header">
            <h1>"Orders"</h1>
            <span class="order-total">
                {move || hook.board.with(|b| {
                    let store = b.store();
                    if store.is_empty() {
                        "No orders yet".to_string()
                    } else {
                        format!("{} on the board", store.len())
                    }
                })}
            </span>
            <div class="board-actions">
                <button class="btn-secondary board-header-btn" title="Help" on:click=move |_| {
                    hook.dispatch(|board, page| board.open_help(page))
                }>"?"</button>
                <button class="btn-primary board-header-btn" title="Add Order" on:click=move |_| {
                    hook.dispatch(|board, page| board.open_add(page))
                }>"+ ADD ORDER"</button>
            </div>
        </header>
    }
}
