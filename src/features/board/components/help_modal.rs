use leptos::prelude::*;

use crate::features::board::hooks::expect_board;

#[component]
pub fn HelpModal() -> impl IntoView {
    let hook = expect_board();
    let close_modal = move |_| hook.dispatch(|board, page| board.close_help(page));

    view! {
        <dialog
            node_ref=hook.page.dialogs.help
            class="task-modal help-modal"
            on:cancel=move |ev: web_sys::Event| {
                ev.prevent_default();
                hook.dispatch(|board, page| board.close_help(page));
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"HELP"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <div class="modal-section">
                    <p>"Add a new order with the + ADD ORDER button. It starts in the Ordered column."</p>
                    <p>"Drag a card onto another column to move it between Ordered, Ready and Served."</p>
                    <p>"Click a card to change its title, table or column, or to delete it."</p>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=close_modal>"CLOSE"</button>
                </div>
            </div>
        </dialog>
    }
}
