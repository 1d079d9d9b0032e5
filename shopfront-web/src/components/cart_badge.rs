use crate::{models::app_state::AppState, routes::Route};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(CartBadge)]
pub fn cart_badge() -> Html {
    let size = use_selector(|state: &AppState| state.session.cart_size());

    html! {
        <Link<Route> to={Route::Cart} classes="btn btn-ghost btn-sm gap-1">
            <span>{"Cart"}</span>
            if *size > 0 {
                <span class="badge badge-primary badge-sm">{ *size }</span>
            }
        </Link<Route>>
    }
}
