use crate::{
    api::ApiClient,
    format::product_image_url,
    models::{app_state::AppState, notice::Notice},
};
use shared::models::{Product, ProductQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let products = use_state(Vec::<Product>::new);
    let keyword = use_state(String::new);
    let query = use_state(ProductQuery::default);

    {
        let products = products.clone();
        let dispatch = dispatch.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            spawn_local(async move {
                let response = ApiClient::shared().list_products(&query).await;
                if response.success {
                    products.set(response.data.unwrap_or_default());
                } else {
                    let notice = Notice::error(response.message_or("Could not load products"));
                    dispatch.reduce_mut(|state| state.notice = Some(notice));
                }
            });
            || ()
        });
    }

    let on_keyword_change = {
        let keyword = keyword.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                keyword.set(input.value());
            }
        })
    };

    let on_search = {
        let keyword = keyword.clone();
        let query = query.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            query.set(ProductQuery::keyword((*keyword).clone()));
        })
    };

    let can_buy = state.session.is_customer();

    html! {
        <div class="p-6 flex flex-col gap-6">
            <form class="join" onsubmit={on_search}>
                <input
                    class="input input-bordered join-item w-full"
                    placeholder="Search products"
                    value={(*keyword).clone()}
                    oninput={on_keyword_change}
                />
                <button class="btn btn-primary join-item" type="submit">{"Search"}</button>
            </form>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                { for products.iter().map(|product| {
                    let add = product.product_id.filter(|_| can_buy && product.in_stock()).map(|id| {
                        let dispatch = dispatch.clone();
                        Callback::from(move |_: MouseEvent| {
                            dispatch.reduce_mut(|state| {
                                state.session.add_to_cart(id, 1);
                                state.notice = Some(Notice::success("Added to cart"));
                            });
                        })
                    });
                    html! {
                        <div class="card bg-base-100 shadow">
                            <figure>
                                <img src={product_image_url(product.image_url.as_deref())} alt={product.name.clone()} />
                            </figure>
                            <div class="card-body">
                                <h2 class="card-title">{ &product.name }</h2>
                                <p class="font-semibold">{ format!("¥{}", product.price) }</p>
                                if let Some(onclick) = add {
                                    <button class="btn btn-primary btn-sm" {onclick}>{"Add to cart"}</button>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
