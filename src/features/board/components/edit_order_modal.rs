use leptos::ev;
use leptos::prelude::*;
use tracing::warn;

use crate::core::models::Column;
use crate::features::board::hooks::expect_board;

#[component]
pub fn EditOrderModal() -> impl IntoView {
    let hook = expect_board();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        hook.dispatch(|board, page| board.submit_edit(page));
    };

    let close_modal = move |_| hook.dispatch(|board, page| board.cancel_edit(page));

    let on_status_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<Column>() {
            Ok(column) => hook.board.update(|b| b.edit_form.column = column),
            Err(e) => warn!("ignoring status change: {}", e),
        }
    };

    let delete_order = move |_| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this order?").unwrap_or(false))
            .unwrap_or(false);
        if confirmed {
            hook.dispatch(|board, page| board.delete_edited(page));
        }
    };

    view! {
        <dialog
            node_ref=hook.page.dialogs.edit
            class="task-modal"
            on:cancel=move |ev: web_sys::Event| {
                ev.prevent_default();
                hook.dispatch(|board, page| board.cancel_edit(page));
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT ORDER"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                hook.board.update(|b| b.edit_form.title = value);
                            }
                            prop:value=move || hook.board.with(|b| b.edit_form.title.clone())
                        />
                    </div>
                    <div class="form-group">
                        <label>"TABLE"</label>
                        <input
                            type="text"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                hook.board.update(|b| b.edit_form.table = value);
                            }
                            prop:value=move || hook.board.with(|b| b.edit_form.table.clone())
                        />
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=on_status_change
                            prop:value=move || hook.board.with(|b| b.edit_form.column.as_str())
                        >
                            {Column::all()
                                .into_iter()
                                .map(|column| view! { <option value=column.as_str()>{column.title()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-danger" on:click=delete_order>"DELETE"</button>
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
