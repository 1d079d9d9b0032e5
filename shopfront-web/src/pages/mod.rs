mod cart;
mod home;
pub mod login;
mod not_found;
mod orders;
mod section;

pub use cart::CartPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;
pub use section::SectionPage;
