use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::pages::OrderBoardPage;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app">
            <OrderBoardPage />
        </main>
    }
}
