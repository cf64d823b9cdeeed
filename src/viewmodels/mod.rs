// ViewModels: estado + lógica de cada vista, sin DOM ni red.
// Los componentes llaman a los servicios y pasan el resultado aquí.

pub mod auth_viewmodel;
pub mod listing_form_viewmodel;
pub mod my_listings_viewmodel;
pub mod products_viewmodel;
pub mod validation;

pub use auth_viewmodel::{LoginViewModel, RegisterViewModel, ResetPasswordViewModel};
pub use listing_form_viewmodel::{ListingFormMode, ListingFormViewModel};
pub use my_listings_viewmodel::{DeleteOutcome, MyListingsViewModel};
pub use products_viewmodel::ProductsViewModel;
pub use validation::{FetchOutcome, FormError, SubmitState};
