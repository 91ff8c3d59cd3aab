use leptos::ev::DragEvent;
use leptos::prelude::*;
use web_sys::Element;

use crate::core::models::{Column, OrderId};
use crate::features::board::dom::ancestors_of;
use crate::features::board::hooks::expect_board;
use super::OrderCard;

#[component]
pub fn BoardColumn(column: Column) -> impl IntoView {
    let hook = expect_board();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        let chain: Vec<Element> = ancestors_of(&ev).collect();
        hook.dispatch(|board, page| board.drag_over(&chain, page));
    };

    view! {
        <section
            class="board-column"
            class:active=move || hook.page.highlight.get() == Some(column)
            data-area=column.as_str()
            on:dragover=on_drag_over
        >
            <div class="column-header">
                <h3>{column.title()}</h3>
                <span class="order-count">
                    {move || hook.board.with(|b| b.store().in_column(column).count())}
                </span>
            </div>
            <div class="column-content" data-column=column.as_str()>
                <For
                    each=move || hook.page.layout.with(|layout| layout.cards_in(column).to_vec())
                    key=|id: &OrderId| id.clone()
                    children=move |id: OrderId| view! { <OrderCard id=id /> }
                />
            </div>
        </section>
    }
}
