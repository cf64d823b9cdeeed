pub mod auth;
pub mod listing;

pub use auth::{
    DeleteListingRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};
pub use listing::{Listing, ListingDraft, ListingField};
