pub mod app;
pub mod auth_guard;
pub mod footer;
pub mod forgot_password;
pub mod home;
pub mod listing_card;
pub mod listing_form;
pub mod login_screen;
pub mod my_listings;
pub mod navbar;
pub mod not_found;
pub mod product_card;
pub mod products;
pub mod register_screen;
pub mod sell_product;
pub mod update_product;

pub use app::App;
pub use auth_guard::{AuthGuard, GuardMode};
pub use footer::Footer;
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use listing_card::ListingCard;
pub use listing_form::ListingFormFields;
pub use login_screen::LoginScreen;
pub use my_listings::MyListings;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use product_card::ProductCard;
pub use products::Products;
pub use register_screen::RegisterScreen;
pub use sell_product::SellProduct;
pub use update_product::UpdateProduct;

use yew_router::prelude::Navigator;

use crate::hooks::SessionHandle;
use crate::router::Route;

/// Uniform reaction to `ApiError::Unauthenticated` from any view:
/// drop the local session and go to Login.
pub(crate) fn end_expired_session(session: &SessionHandle, navigator: Option<&Navigator>) {
    log::warn!("🔒 Session rejected by backend, returning to login");
    session.sign_out();
    if let Some(nav) = navigator {
        nav.replace(&Route::Login);
    }
}
