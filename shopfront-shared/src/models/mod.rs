//! Wire models, one module per backend resource.

pub mod address;
pub mod catalog;
pub mod envelope;
pub mod operator;
pub mod order;
pub mod review;
pub mod shop;
pub mod timestamp;
pub mod user;

pub use address::Address;
pub use catalog::{Category, Product, ProductQuery};
pub use envelope::ApiResponse;
pub use operator::{DashboardReport, RankedEntry, UserDirectory};
pub use order::{BadgeTone, CreateOrderRequest, Order, OrderStatus};
pub use review::{NewReview, Review, ReviewEligibility, ReviewStats, ReviewUpdate};
pub use shop::{Shop, ShopDeletion};
pub use timestamp::Timestamp;
pub use user::{
    ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest, UnknownRoleCode, User,
    UserRole,
};

/// Backend identifier of a user account.
pub type UserId = i64;
/// Backend identifier of a product.
pub type ProductId = i64;
/// Backend identifier of a product category.
pub type CategoryId = i64;
/// Backend identifier of an order.
pub type OrderId = i64;
/// Backend identifier of a review.
pub type ReviewId = i64;
/// Backend identifier of a delivery address.
pub type AddressId = i64;
/// Backend identifier of a shop.
pub type ShopId = i64;
