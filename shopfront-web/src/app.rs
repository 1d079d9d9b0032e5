//! Root component.

use crate::api::ApiClient;
use crate::components::{GuardedSwitch, Header, NoticeToast};
use crate::models::app_state::AppState;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Restores the session on mount and lays out the router shell.
#[function_component(App)]
pub fn app() -> Html {
    let (store_state, store_dispatch) = use_store::<AppState>();

    {
        let session = store_state.session.clone();
        use_effect_with((), move |_| {
            let mut session = session;
            spawn_local(async move {
                session.init(&ApiClient::shared()).await;
                store_dispatch.reduce_mut(move |state| state.session = session);
            });
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Header />
            <NoticeToast />
            <main class="container mx-auto">
                <GuardedSwitch />
            </main>
        </BrowserRouter>
    }
}
