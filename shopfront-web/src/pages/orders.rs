use crate::{
    api::ApiClient,
    format::format_timestamp,
    models::{app_state::AppState, notice::Notice},
};
use shared::models::Order;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

fn badge_classes(order: &Order) -> Classes {
    let tone = order.status.tone().as_str();
    classes!("badge", (!tone.is_empty()).then(|| format!("badge-{tone}")))
}

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let orders = use_state(Vec::<Order>::new);
    let revision = use_state(|| 0_u32);

    {
        let orders = orders.clone();
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                let response = ApiClient::shared().customer_orders().await;
                orders.set(response.into_data().unwrap_or_default());
            });
            || ()
        });
    }

    let cancel = |order_id| {
        let dispatch = dispatch.clone();
        let revision = revision.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let revision = revision.clone();
            spawn_local(async move {
                let response = ApiClient::shared().cancel_order(order_id).await;
                let notice = Notice::from_response(&response, "Order cancelled", "Cancel failed");
                dispatch.reduce_mut(|state| state.notice = Some(notice));
                revision.set(*revision + 1);
            });
        })
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-semibold mb-4">{"My orders"}</h1>
            <table class="table">
                <thead>
                    <tr><th>{"Order"}</th><th>{"Placed"}</th><th>{"Total"}</th><th>{"Status"}</th><th></th></tr>
                </thead>
                <tbody>
                    { for orders.iter().map(|order| html! {
                        <tr key={order.order_id}>
                            <td>{ format!("#{}", order.order_id) }</td>
                            <td>{ format_timestamp(&order.order_date) }</td>
                            <td>{ format!("¥{}", order.total_amount) }</td>
                            <td>
                                <span class={badge_classes(order)}>
                                    { order.status.label() }
                                </span>
                            </td>
                            <td>
                                if order.status.can_cancel() {
                                    <button class="btn btn-ghost btn-xs" onclick={cancel(order.order_id)}>{"Cancel"}</button>
                                }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
