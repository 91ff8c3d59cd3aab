use leptos::ev;
use leptos::prelude::*;

use crate::features::board::hooks::expect_board;

#[component]
pub fn AddOrderModal() -> impl IntoView {
    let hook = expect_board();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        hook.dispatch(|board, page| {
            board.submit_add(page);
        });
    };

    // Cancel also clears the draft so the next open starts blank.
    let close_modal = move |_| hook.dispatch(|board, page| board.cancel_add(page));

    view! {
        <dialog
            node_ref=hook.page.dialogs.add
            class="task-modal"
            on:cancel=move |ev: web_sys::Event| {
                ev.prevent_default();
                hook.dispatch(|board, page| board.cancel_add(page));
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"ADD ORDER"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="What was ordered..."
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                hook.board.update(|b| b.add_form.title = value);
                            }
                            prop:value=move || hook.board.with(|b| b.add_form.title.clone())
                        />
                    </div>
                    <div class="form-group">
                        <label>"TABLE"</label>
                        <input
                            type="text"
                            placeholder="Table number..."
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                hook.board.update(|b| b.add_form.table = value);
                            }
                            prop:value=move || hook.board.with(|b| b.add_form.table.clone())
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"ADD"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
