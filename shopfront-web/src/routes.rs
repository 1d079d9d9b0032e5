//! The route table and its render switch.

use crate::pages::{CartPage, HomePage, LoginPage, NotFoundPage, OrdersPage, SectionPage};
use shared::models::{CategoryId, OrderId, ProductId};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    /// Product grid.
    #[at("/")]
    Home,
    /// Sign-in form.
    #[at("/login")]
    Login,
    /// Account creation.
    #[at("/register")]
    Register,
    /// One product with its reviews.
    #[at("/product/:id")]
    ProductDetail {
        /// Product to show.
        id: ProductId,
    },
    /// Products of one category.
    #[at("/category/:id")]
    Category {
        /// Category to list.
        id: CategoryId,
    },
    /// The customer's cart.
    #[at("/cart")]
    Cart,
    /// The customer's orders.
    #[at("/orders")]
    Orders,
    /// Account settings.
    #[at("/profile")]
    Profile,
    /// One order.
    #[at("/order/:id")]
    OrderDetail {
        /// Order to show.
        id: OrderId,
    },
    /// Shop overview.
    #[at("/shop/dashboard")]
    ShopDashboard,
    /// Shop product management.
    #[at("/shop/products")]
    ShopProducts,
    /// Orders to fulfil.
    #[at("/shop/orders")]
    ShopOrders,
    /// Shop settings.
    #[at("/shop/info")]
    ShopInfo,
    /// Platform figures.
    #[at("/operator/dashboard")]
    OperatorDashboard,
    /// Account and shop management.
    #[at("/operator/management")]
    OperatorManagement,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users other than shop accounts.
    CustomerOnly,
    /// Shop accounts only.
    ShopOnly,
    /// The platform operator only.
    OperatorOnly,
}

impl Route {
    /// Who may open the route.
    #[must_use]
    pub const fn access(&self) -> RouteAccess {
        match self {
            Self::Home
            | Self::Login
            | Self::Register
            | Self::ProductDetail { .. }
            | Self::Category { .. }
            | Self::NotFound => RouteAccess::Public,
            Self::Cart | Self::Orders => RouteAccess::CustomerOnly,
            Self::Profile | Self::OrderDetail { .. } => RouteAccess::Authenticated,
            Self::ShopDashboard | Self::ShopProducts | Self::ShopOrders | Self::ShopInfo => {
                RouteAccess::ShopOnly
            }
            Self::OperatorDashboard | Self::OperatorManagement => RouteAccess::OperatorOnly,
        }
    }

    /// Heading and navigation label.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Register",
            Self::ProductDetail { .. } => "Product",
            Self::Category { .. } => "Category",
            Self::Cart => "Cart",
            Self::Orders => "My orders",
            Self::Profile => "Profile",
            Self::OrderDetail { .. } => "Order",
            Self::ShopDashboard => "Shop dashboard",
            Self::ShopProducts => "Shop products",
            Self::ShopOrders => "Shop orders",
            Self::ShopInfo => "Shop info",
            Self::OperatorDashboard => "Operator dashboard",
            Self::OperatorManagement => "User management",
            Self::NotFound => "Page not found",
        }
    }
}

/// Render a route that has already passed the guard.
#[must_use]
pub fn switch(route: Route) -> Html {
    log::debug!("Switching to route: {route:?}");
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Cart => html! { <CartPage /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        other => html! { <SectionPage route={other} /> },
    }
}
