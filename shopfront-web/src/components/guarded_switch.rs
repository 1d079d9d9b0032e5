use crate::{
    api::ApiClient,
    components::loading::Loading,
    guard::{GuardCheck, Navigation},
    routes::{Route, switch},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, use_route};

/// Route switch that runs the access guard on every navigation.
///
/// A route renders only after the guard has cleared that exact route; while a
/// check is in flight the loading indicator is shown. Leaving a route cancels
/// its pending check.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigator = use_navigator();
    let cleared = use_state(|| None::<Route>);

    {
        let cleared = cleared.clone();
        use_effect_with(route.clone(), move |route| {
            let route = route.clone();
            let check = GuardCheck::new();
            let pending = check.clone();
            spawn_local(async move {
                match pending.run(&route, &ApiClient::shared()).await {
                    Some(Navigation::Proceed) => cleared.set(Some(route)),
                    Some(Navigation::Redirect(target)) => {
                        if let Some(nav) = navigator {
                            nav.replace(&target);
                        }
                    }
                    None => {}
                }
            });
            move || check.cancel()
        });
    }

    match &*cleared {
        Some(allowed) if *allowed == route => switch(route),
        _ => html! { <Loading /> },
    }
}
