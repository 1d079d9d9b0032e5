use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-[50vh]">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-4xl font-bold">{"404"}</h1>
                    <p class="py-4">{"This page does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to the shop"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
