use crate::{
    api::ApiClient,
    format::product_image_url,
    models::{app_state::AppState, notice::Notice},
    routes::Route,
};
use shared::models::{Address, AddressId, Product, ProductId};
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let products = use_state(BTreeMap::<ProductId, Product>::new);
    let addresses = use_state(Vec::<Address>::new);
    let submitting = use_state(|| false);

    let ids: Vec<ProductId> = state.session.cart().iter().map(|(id, _)| id).collect();

    {
        let products = products.clone();
        use_effect_with(ids, move |ids| {
            let ids = ids.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let mut loaded = BTreeMap::new();
                for id in ids {
                    if let Some(product) = client.get_product(id).await.into_data() {
                        loaded.insert(id, product);
                    }
                }
                products.set(loaded);
            });
            || ()
        });
    }

    {
        let addresses = addresses.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let response = ApiClient::shared().list_addresses().await;
                addresses.set(response.into_data().unwrap_or_default());
            });
            || ()
        });
    }

    let checkout = |address_id: AddressId| {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = state.session.order_request(address_id) else {
                return;
            };
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                let response = ApiClient::shared().create_order(&request).await;
                let placed = response.success;
                let notice = Notice::from_response(&response, "Order placed", "Checkout failed");
                dispatch.reduce_mut(move |state| {
                    if placed {
                        state.session.clear_cart();
                    }
                    state.notice = Some(notice);
                });
                submitting.set(false);
                if let (true, Some(nav)) = (placed, navigator) {
                    nav.push(&Route::Orders);
                }
            });
        })
    };

    let line = |id: ProductId, quantity: u32| {
        let set_quantity = |quantity: i64| {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|state| state.session.update_cart(id, quantity));
            })
        };
        let remove = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|state| state.session.remove_from_cart(id));
            })
        };
        let product = products.get(&id);
        let name = product.map_or_else(|| format!("Product #{id}"), |product| product.name.clone());
        let image = product_image_url(product.and_then(|product| product.image_url.as_deref()));
        let price = product.map(|product| format!("¥{}", product.price));
        html! {
            <tr key={id}>
                <td><img class="w-12 h-12" src={image} alt={name.clone()} /></td>
                <td>{ name }</td>
                <td>{ price.unwrap_or_default() }</td>
                <td class="join">
                    <button class="btn btn-xs join-item" onclick={set_quantity(i64::from(quantity) - 1)}>{"-"}</button>
                    <span class="px-3">{ quantity }</span>
                    <button class="btn btn-xs join-item" onclick={set_quantity(i64::from(quantity) + 1)}>{"+"}</button>
                </td>
                <td><button class="btn btn-ghost btn-xs" onclick={remove}>{"Remove"}</button></td>
            </tr>
        }
    };

    if state.session.cart().is_empty() {
        return html! {
            <div class="p-6">
                <h1 class="text-2xl font-semibold">{"Cart"}</h1>
                <p class="py-4">{"Your cart is empty."}</p>
            </div>
        };
    }

    html! {
        <div class="p-6 flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{"Cart"}</h1>
            <table class="table">
                <tbody>
                    { for state.session.cart().iter().map(|(id, quantity)| line(id, quantity)) }
                </tbody>
            </table>
            <p>{ format!("{} items", state.session.cart_size()) }</p>
            <h2 class="text-lg font-semibold">{"Ship to"}</h2>
            if addresses.is_empty() {
                <p>{"Add a delivery address in your profile before checking out."}</p>
            }
            { for addresses.iter().filter_map(|address| address.address_id.map(|id| (id, address))).map(|(id, address)| html! {
                <button class="btn btn-outline justify-start" disabled={*submitting} onclick={checkout(id)}>
                    { format!("{} {} {}", address.receiver_name, address.receiver_phone, address.one_line()) }
                </button>
            }) }
        </div>
    }
}
