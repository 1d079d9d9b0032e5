//! Per-navigation access check.
//!
//! Protected routes always ask the backend for the current user instead of
//! trusting the store, so a session that expired server-side is noticed on the
//! next navigation.

use shared::models::{User, UserRole};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::CurrentUserSource;
use crate::routes::{Route, RouteAccess};

/// Outcome of the guard for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route.
    Proceed,
    /// Replace the requested route with this one.
    Redirect(Route),
}

/// Decide a navigation from the route's access level and the current user.
#[must_use]
pub fn evaluate(access: RouteAccess, user: Option<&User>) -> Navigation {
    if access == RouteAccess::Public {
        return Navigation::Proceed;
    }
    let Some(user) = user else {
        return Navigation::Redirect(Route::Login);
    };
    match (access, user.role) {
        (RouteAccess::Public | RouteAccess::Authenticated, _)
        | (RouteAccess::CustomerOnly, UserRole::Customer | UserRole::Operator)
        | (RouteAccess::ShopOnly, UserRole::Shop)
        | (RouteAccess::OperatorOnly, UserRole::Operator) => Navigation::Proceed,
        (RouteAccess::CustomerOnly, UserRole::Shop) => Navigation::Redirect(Route::ShopDashboard),
        (RouteAccess::ShopOnly, UserRole::Customer | UserRole::Operator)
        | (RouteAccess::OperatorOnly, UserRole::Customer | UserRole::Shop) => {
            Navigation::Redirect(Route::Home)
        }
    }
}

/// Run the guard for `route`, fetching the user only when the route is protected.
pub async fn authorize(route: &Route, auth: &impl CurrentUserSource) -> Navigation {
    let access = route.access();
    if access == RouteAccess::Public {
        return Navigation::Proceed;
    }
    let user = match auth.current_user().await {
        Ok(user) => Some(user),
        Err(err) => {
            log::debug!("treating visitor as anonymous: {err}");
            None
        }
    };
    let decision = evaluate(access, user.as_ref());
    if let Navigation::Redirect(target) = &decision {
        log::debug!("redirecting {route:?} to {target:?}");
    }
    decision
}

/// One guard run for one navigation.
///
/// The router cancels the run when the route changes before it finishes. A
/// cancelled run yields no decision.
#[derive(Debug, Clone, Default)]
pub struct GuardCheck {
    cancelled: Rc<Cell<bool>>,
}

impl GuardCheck {
    /// A fresh, uncancelled run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as superseded. Clones share the flag.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether [`GuardCheck::cancel`] was called on this run or a clone of it.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Run [`authorize`] and return its decision unless the run was cancelled meanwhile.
    pub async fn run(&self, route: &Route, auth: &impl CurrentUserSource) -> Option<Navigation> {
        if self.is_cancelled() {
            return None;
        }
        let decision = authorize(route, auth).await;
        if self.is_cancelled() {
            log::debug!("dropping stale guard decision for {route:?}");
            return None;
        }
        Some(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthError;
    use crate::api::mock::mock_client;
    use async_trait::async_trait;
    use serde_json::json;

    fn user(role: UserRole) -> User {
        User {
            user_id: 1,
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn public_routes_always_proceed() {
        assert_eq!(evaluate(RouteAccess::Public, None), Navigation::Proceed);
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        for access in [
            RouteAccess::Authenticated,
            RouteAccess::CustomerOnly,
            RouteAccess::ShopOnly,
            RouteAccess::OperatorOnly,
        ] {
            assert_eq!(
                evaluate(access, None),
                Navigation::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn shop_users_leave_customer_pages() {
        let shop = user(UserRole::Shop);
        assert_eq!(
            evaluate(RouteAccess::CustomerOnly, Some(&shop)),
            Navigation::Redirect(Route::ShopDashboard)
        );
        assert_eq!(
            evaluate(RouteAccess::CustomerOnly, Some(&user(UserRole::Customer))),
            Navigation::Proceed
        );
    }

    #[test]
    fn shop_pages_need_a_shop_user() {
        assert_eq!(
            evaluate(RouteAccess::ShopOnly, Some(&user(UserRole::Customer))),
            Navigation::Redirect(Route::Home)
        );
        assert_eq!(
            evaluate(RouteAccess::ShopOnly, Some(&user(UserRole::Shop))),
            Navigation::Proceed
        );
    }

    #[test]
    fn operator_pages_need_an_operator() {
        assert_eq!(
            evaluate(RouteAccess::OperatorOnly, Some(&user(UserRole::Shop))),
            Navigation::Redirect(Route::Home)
        );
        assert_eq!(
            evaluate(RouteAccess::OperatorOnly, Some(&user(UserRole::Operator))),
            Navigation::Proceed
        );
    }

    #[test]
    fn any_role_may_open_authenticated_pages() {
        for role in [UserRole::Operator, UserRole::Shop, UserRole::Customer] {
            assert_eq!(
                evaluate(RouteAccess::Authenticated, Some(&user(role))),
                Navigation::Proceed
            );
        }
    }

    #[tokio::test]
    async fn public_routes_skip_the_lookup() {
        let (client, transport) = mock_client();

        let decision = authorize(&Route::ProductDetail { id: 3 }, &client).await;

        assert_eq!(decision, Navigation::Proceed);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn protected_routes_fetch_the_user() {
        let (client, transport) = mock_client();
        transport.reply(
            200,
            json!({"success": true, "data": {"userId": 1, "username": "c", "userType": 3}}),
        );

        let decision = authorize(&Route::ShopOrders, &client).await;

        assert_eq!(decision, Navigation::Redirect(Route::Home));
        assert_eq!(transport.last_request().path, "/auth/current");
    }

    #[tokio::test]
    async fn failed_lookup_redirects_to_login() {
        let (client, transport) = mock_client();
        transport.reply(401, json!({"success": false, "message": "未登录"}));

        let decision = authorize(&Route::Profile, &client).await;

        assert_eq!(decision, Navigation::Redirect(Route::Login));
    }

    /// Answers as anonymous after the router has already moved on.
    struct NavigatesAwayDuringLookup {
        check: GuardCheck,
    }

    #[async_trait(?Send)]
    impl CurrentUserSource for NavigatesAwayDuringLookup {
        async fn current_user(&self) -> Result<User, AuthError> {
            self.check.cancel();
            Err(AuthError::Rejected("未登录".to_string()))
        }
    }

    #[tokio::test]
    async fn guard_check_returns_the_decision() {
        let (client, transport) = mock_client();
        transport.reply(
            200,
            json!({"success": true, "data": {"userId": 2, "username": "s", "userType": 2}}),
        );

        let decision = GuardCheck::new().run(&Route::ShopInfo, &client).await;

        assert_eq!(decision, Some(Navigation::Proceed));
    }

    #[tokio::test]
    async fn superseded_guard_check_drops_its_redirect() {
        let check = GuardCheck::new();
        let auth = NavigatesAwayDuringLookup {
            check: check.clone(),
        };

        let decision = check.run(&Route::Profile, &auth).await;

        assert!(check.is_cancelled());
        assert_eq!(decision, None);
    }

    #[tokio::test]
    async fn cancelled_guard_check_skips_the_lookup() {
        let (client, transport) = mock_client();
        let check = GuardCheck::new();
        check.cancel();

        let decision = check.run(&Route::Orders, &client).await;

        assert_eq!(decision, None);
        assert!(transport.requests().is_empty());
    }
}
