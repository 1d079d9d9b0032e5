//! Signed-in user and their cart.
//!
//! The store owns the active [`User`] and the in-memory [`Cart`], and keeps
//! each user's cart in storage under `cart_<userId>` so switching accounts in
//! the same browser never mixes carts. Storage trouble is logged and never
//! surfaces to callers.

mod cart;
mod storage;

use shared::models::{AddressId, CreateOrderRequest, ProductId, User, UserId};

use crate::api::{ApiClient, AuthError, CurrentUserSource, Transport};
use crate::models::notice::Notice;

pub use cart::Cart;
pub use storage::{BrowserStorage, CartStorage, MemoryStorage, StorageError};

/// Storage key of the single shared cart older builds wrote.
pub const LEGACY_CART_KEY: &str = "cart";

/// Storage key of a user's cart.
#[must_use]
pub fn cart_key(user_id: UserId) -> String {
    format!("cart_{user_id}")
}

/// The active user and their cart, backed by `S` for persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore<S: CartStorage = BrowserStorage> {
    user: Option<User>,
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> SessionStore<S> {
    /// An anonymous session with an empty cart.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            user: None,
            cart: Cart::default(),
            storage,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The in-memory cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The persistence backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Establish the session from the backend's idea of the current user.
    pub async fn init(&mut self, auth: &impl CurrentUserSource) {
        let outcome = auth.current_user().await;
        self.restore(outcome);
    }

    /// Apply a current-user lookup: a user signs in, any error means anonymous.
    pub fn restore(&mut self, outcome: Result<User, AuthError>) {
        match outcome {
            Ok(user) => {
                let user_id = user.user_id;
                self.user = Some(user);
                self.discard_legacy_cart();
                self.load_cart_for_user(user_id);
            }
            Err(err) => {
                log::debug!("starting anonymous session: {err}");
                self.user = None;
                self.cart.clear();
                self.discard_legacy_cart();
            }
        }
    }

    /// Switch the active user, parking the outgoing user's cart in storage.
    pub fn set_user(&mut self, user: Option<User>) {
        let Some(incoming) = user else {
            self.user = None;
            self.cart.clear();
            return;
        };
        if let Some(current) = &self.user
            && current.user_id != incoming.user_id
        {
            self.save_cart_for_user(current.user_id);
        }
        let user_id = incoming.user_id;
        self.user = Some(incoming);
        self.load_cart_for_user(user_id);
    }

    /// Sign out locally: persist the cart, then forget user and cart.
    pub fn clear_user(&mut self) {
        self.save_cart();
        self.user = None;
        self.cart.clear();
    }

    /// Add `quantity` of a product and persist; a zero quantity changes nothing.
    pub fn add_to_cart(&mut self, product: ProductId, quantity: u32) {
        self.cart.add(product, quantity);
        self.save_cart();
    }

    /// Set a quantity; zero or less removes the product.
    pub fn update_cart(&mut self, product: ProductId, quantity: i64) {
        self.cart.set(product, quantity);
        self.save_cart();
    }

    /// Drop a product from the cart and persist.
    pub fn remove_from_cart(&mut self, product: ProductId) {
        self.cart.remove(product);
        self.save_cart();
    }

    /// Empty the cart and persist the empty cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.save_cart();
    }

    /// Persist the cart for the active user; nothing happens while anonymous.
    pub fn save_cart(&self) {
        if let Some(user) = &self.user {
            self.save_cart_for_user(user.user_id);
        }
    }

    /// Write the in-memory cart under `user_id`'s key; failures are logged.
    pub fn save_cart_for_user(&self, user_id: UserId) {
        let key = cart_key(user_id);
        if let Err(err) = self.storage.save(&key, &self.cart) {
            log::warn!("could not persist cart for user {user_id}: {err}");
        }
    }

    /// Replace the in-memory cart with the stored one; missing or corrupt means empty.
    pub fn load_cart_for_user(&mut self, user_id: UserId) {
        self.cart = match self.storage.load(&cart_key(user_id)) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                log::warn!("ignoring stored cart for user {user_id}: {err}");
                Cart::default()
            }
        };
    }

    /// Total units across the cart, for the header badge.
    #[must_use]
    pub fn cart_size(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// The checkout request submitting the whole cart, if there is anything to buy.
    #[must_use]
    pub fn order_request(&self, address_id: AddressId) -> Option<CreateOrderRequest> {
        if self.cart.is_empty() {
            return None;
        }
        Some(CreateOrderRequest {
            cart_items: self.cart.to_order_items(),
            address_id,
        })
    }

    /// Remove the pre-per-user shared cart record.
    pub fn discard_legacy_cart(&self) {
        self.storage.remove(LEGACY_CART_KEY);
    }

    /// Signed in as a shop account.
    #[must_use]
    pub fn is_shop_user(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_shop_user)
    }

    /// Signed in as a customer.
    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_customer)
    }
}

/// End the backend session and sign out locally whatever the backend said.
pub async fn logout<T: Transport, S: CartStorage>(
    client: &ApiClient<T>,
    session: &mut SessionStore<S>,
) -> Notice {
    let response = client.logout().await;
    if !response.success {
        log::warn!(
            "logout request failed: {}",
            response.message_or("no message")
        );
    }
    session.clear_user();
    Notice::success("Signed out")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_client;
    use serde_json::json;
    use shared::models::UserRole;

    fn user(user_id: UserId, role: UserRole) -> User {
        User {
            user_id,
            username: format!("user{user_id}"),
            role,
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::default())
    }

    #[test]
    fn cart_size_sums_quantities() {
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(5, 2);
        session.add_to_cart(6, 4);
        session.update_cart(6, 1);
        assert_eq!(session.cart_size(), 3);
    }

    #[test]
    fn update_to_zero_removes_entry() {
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(5, 2);
        session.add_to_cart(5, 3);
        session.update_cart(5, 0);
        assert_eq!(session.cart().quantity(5), 0);
        assert!(session.cart().is_empty());
        assert_eq!(session.cart_size(), 0);
    }

    #[test]
    fn mutations_persist_under_user_key() {
        let mut session = store();
        session.set_user(Some(user(7, UserRole::Customer)));
        session.add_to_cart(3, 2);
        assert_eq!(
            session.storage().raw("cart_7").as_deref(),
            Some(r#"{"3":2}"#)
        );
        session.remove_from_cart(3);
        assert_eq!(session.storage().raw("cart_7").as_deref(), Some("{}"));
    }

    #[test]
    fn save_then_load_reproduces_cart() {
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(10, 1);
        session.add_to_cart(2, 5);
        let saved = session.cart().clone();

        session.cart.clear();
        session.load_cart_for_user(1);

        assert_eq!(session.cart(), &saved);
        assert_eq!(
            session.cart().iter().collect::<Vec<_>>(),
            vec![(2, 5), (10, 1)]
        );
    }

    #[test]
    fn anonymous_mutations_are_not_persisted() {
        let mut session = store();
        session.add_to_cart(1, 1);
        assert_eq!(session.cart_size(), 1);
        assert!(session.storage().keys().is_empty());
    }

    #[test]
    fn switching_users_parks_and_restores_carts() {
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(5, 2);
        session.cart.add(8, 1);

        session.set_user(Some(user(2, UserRole::Customer)));
        assert_eq!(
            session.storage().raw("cart_1").as_deref(),
            Some(r#"{"5":2,"8":1}"#)
        );
        assert!(session.cart().is_empty());
        session.add_to_cart(9, 4);

        session.set_user(Some(user(1, UserRole::Customer)));
        assert_eq!(
            session.cart().iter().collect::<Vec<_>>(),
            vec![(5, 2), (8, 1)]
        );
        assert_eq!(
            session.storage().raw("cart_2").as_deref(),
            Some(r#"{"9":4}"#)
        );
    }

    #[test]
    fn set_user_none_clears_without_persisting() {
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(5, 2);
        session.cart.add(6, 1);

        session.set_user(None);

        assert!(session.user().is_none());
        assert!(session.cart().is_empty());
        assert_eq!(
            session.storage().raw("cart_1").as_deref(),
            Some(r#"{"5":2}"#)
        );
    }

    #[test]
    fn clear_user_persists_then_empties() {
        let mut session = store();
        session.set_user(Some(user(4, UserRole::Customer)));
        session.cart.add(1, 3);

        session.clear_user();

        assert!(session.user().is_none());
        assert_eq!(session.cart_size(), 0);
        assert_eq!(
            session.storage().raw("cart_4").as_deref(),
            Some(r#"{"1":3}"#)
        );
    }

    #[test]
    fn restore_signs_in_and_drops_legacy_cart() {
        let storage = MemoryStorage::default();
        storage.insert_raw(LEGACY_CART_KEY, r#"{"1":1}"#);
        storage.insert_raw("cart_3", r#"{"2":2}"#);
        let mut session = SessionStore::new(storage);

        session.restore(Ok(user(3, UserRole::Customer)));

        assert_eq!(session.user().map(|user| user.user_id), Some(3));
        assert_eq!(session.cart().quantity(2), 2);
        assert_eq!(session.storage().raw(LEGACY_CART_KEY), None);
    }

    #[test]
    fn restore_error_is_anonymous() {
        let mut session = store();
        session.set_user(Some(user(3, UserRole::Customer)));
        session.add_to_cart(2, 2);
        session.storage().insert_raw(LEGACY_CART_KEY, "{}");

        session.restore(Err(AuthError::MalformedUser));

        assert!(session.user().is_none());
        assert!(session.cart().is_empty());
        assert_eq!(session.storage().raw(LEGACY_CART_KEY), None);
    }

    #[test]
    fn corrupt_stored_cart_loads_empty() {
        let storage = MemoryStorage::default();
        storage.insert_raw("cart_3", "{not json");
        let mut session = SessionStore::new(storage);

        session.restore(Ok(user(3, UserRole::Customer)));

        assert!(session.cart().is_empty());
        assert!(session.user().is_some());
    }

    #[test]
    fn order_request_submits_whole_cart() {
        let mut session = store();
        assert_eq!(session.order_request(1), None);
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(5, 2);
        session.add_to_cart(9, 1);

        let request = session.order_request(12).expect("request");

        assert_eq!(request.address_id, 12);
        assert_eq!(
            request.cart_items.into_iter().collect::<Vec<_>>(),
            vec![(5, 2), (9, 1)]
        );
    }

    #[test]
    fn role_predicates() {
        let mut session = store();
        assert!(!session.is_shop_user());
        assert!(!session.is_customer());
        session.set_user(Some(user(1, UserRole::Shop)));
        assert!(session.is_shop_user());
        session.set_user(Some(user(2, UserRole::Customer)));
        assert!(session.is_customer());
    }

    #[tokio::test]
    async fn init_loads_current_users_cart() {
        let (client, transport) = mock_client();
        transport.reply(
            200,
            json!({"success": true, "data": {"userId": 5, "username": "amy", "userType": 3}}),
        );
        let storage = MemoryStorage::default();
        storage.insert_raw("cart_5", r#"{"1":2}"#);
        let mut session = SessionStore::new(storage);

        session.init(&client).await;

        assert_eq!(session.user().map(|user| user.user_id), Some(5));
        assert_eq!(session.cart_size(), 2);
    }

    #[tokio::test]
    async fn init_network_failure_is_anonymous() {
        let (client, _transport) = mock_client();
        let mut session = store();

        session.init(&client).await;

        assert!(session.user().is_none());
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_even_when_backend_fails() {
        let (client, transport) = mock_client();
        transport.reply(500, json!({"message": "boom"}));
        let mut session = store();
        session.set_user(Some(user(1, UserRole::Customer)));
        session.add_to_cart(3, 1);

        let notice = logout(&client, &mut session).await;

        assert_eq!(transport.last_request().path, "/auth/logout");
        assert!(session.user().is_none());
        assert!(session.cart().is_empty());
        assert_eq!(session.storage().raw("cart_1").as_deref(), Some(r#"{"3":1}"#));
        assert_eq!(notice, Notice::success("Signed out"));
    }
}
