use crate::{
    api::ApiClient,
    components::cart_badge::CartBadge,
    models::app_state::AppState,
    routes::Route,
    session,
};
use shared::models::{User, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator, use_route};
use yewdux::prelude::use_store;

/// Sections offered in the navigation bar for the signed-in role.
pub(crate) fn nav_routes(user: Option<&User>) -> Vec<Route> {
    match user.map(|user| user.role) {
        None => vec![Route::Home],
        Some(UserRole::Customer) => vec![Route::Home, Route::Orders, Route::Profile],
        Some(UserRole::Shop) => vec![
            Route::ShopDashboard,
            Route::ShopProducts,
            Route::ShopOrders,
            Route::ShopInfo,
        ],
        Some(UserRole::Operator) => vec![
            Route::Home,
            Route::OperatorDashboard,
            Route::OperatorManagement,
        ],
    }
}

/// Where the user lands after signing out.
pub(crate) const LOGOUT_LANDING: Route = Route::Home;

/// Top navigation bar with role sections, cart count and sign-out.
#[function_component(Header)]
pub fn header() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let current_route = use_route::<Route>();
    let user = state.session.user().cloned();

    let on_logout = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut session = state.session.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let notice = session::logout(&ApiClient::shared(), &mut session).await;
                dispatch.reduce_mut(move |state| {
                    state.session = session;
                    state.notice = Some(notice);
                });
                if let Some(nav) = navigator {
                    nav.push(&LOGOUT_LANDING);
                }
            });
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                {"Shopfront"}
            </Link<Route>>
            <ul class="menu menu-horizontal gap-1">
                { for nav_routes(user.as_ref()).into_iter().map(|route| {
                    let active = if current_route.as_ref() == Some(&route) { "btn-soft" } else { "" };
                    html! {
                        <li>
                            <Link<Route> to={route.clone()} classes={classes!("btn", "btn-ghost", "btn-sm", active)}>
                                { route.title() }
                            </Link<Route>>
                        </li>
                    }
                }) }
            </ul>
            <div class="flex items-center gap-2">
                {
                    user.as_ref().map_or_else(
                        || html! {
                            <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<Route>>
                        },
                        |user| html! {
                            <>
                                if !user.is_shop_user() {
                                    <CartBadge />
                                }
                                <span class="text-sm text-base-content/80">{ &user.username }</span>
                                <button class="btn btn-ghost btn-sm" onclick={on_logout.clone()}>
                                    {"Sign out"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            user_id: 1,
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn anonymous_visitors_see_home_only() {
        assert_eq!(nav_routes(None), vec![Route::Home]);
    }

    #[test]
    fn shop_users_see_shop_sections() {
        let routes = nav_routes(Some(&user(UserRole::Shop)));
        assert!(routes.contains(&Route::ShopOrders));
        assert!(!routes.contains(&Route::Orders));
    }

    #[test]
    fn nav_routes_are_reachable_for_their_role() {
        use crate::guard::{Navigation, evaluate};
        for role in [UserRole::Operator, UserRole::Shop, UserRole::Customer] {
            let user = user(role);
            for route in nav_routes(Some(&user)) {
                assert_eq!(
                    evaluate(route.access(), Some(&user)),
                    Navigation::Proceed,
                    "{route:?} for {role}"
                );
            }
        }
    }

    #[test]
    fn logout_lands_on_a_public_page() {
        assert_eq!(LOGOUT_LANDING, Route::Home);
        assert_eq!(
            crate::guard::evaluate(LOGOUT_LANDING.access(), None),
            crate::guard::Navigation::Proceed
        );
    }
}
