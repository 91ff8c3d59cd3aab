use chrono::Local;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::OrderId;
use crate::features::board::hooks::expect_board;

#[component]
pub fn OrderCard(id: OrderId) -> impl IntoView {
    let hook = expect_board();

    let order = {
        let id = id.clone();
        Memo::new(move |_| hook.board.with(|b| b.store().get(&id).cloned()))
    };

    let on_drag_start = {
        let id = id.clone();
        move |ev: DragEvent| {
            // Firefox will not start a drag without payload data.
            if let Some(data) = ev.data_transfer() {
                let _ = data.set_data("text/plain", id.as_str());
                data.set_effect_allowed("move");
            }
            hook.board.update(|board| board.drag_start(&id));
        }
    };

    let on_drag_end = {
        let id = id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            hook.dispatch(|board, page| board.drag_end(&id, page));
        }
    };

    let on_click = {
        let id = id.clone();
        move |_| hook.dispatch(|board, page| board.open_edit(&id, page))
    };

    view! {
        <div
            class="order clickable"
            draggable="true"
            data-id=id.to_string()
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:click=on_click
        >
            {move || order.get().map(|order| view! {
                <div class="order-title">{order.title}</div>
                <div class="order-meta">
                    <span class="order-table">{format!("Table {}", order.table)}</span>
                    <span class="order-time">
                        {order.created_at.with_timezone(&Local).format("%H:%M").to_string()}
                    </span>
                </div>
            })}
        </div>
    }
}
