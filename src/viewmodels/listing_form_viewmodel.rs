// ============================================================================
// LISTING FORM VIEWMODEL - shared by SellProduct and UpdateProduct
// ============================================================================

use super::validation::{require, validate_price, FormError};
use crate::models::{Listing, ListingDraft, ListingField};
use crate::services::ApiError;
use crate::utils::constants::{MSG_SELL_FAILED, MSG_UPDATE_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormMode {
    Create,
    Update,
}

impl ListingFormMode {
    /// Create needs everything but the drive link; update only name and price.
    pub fn is_required(self, field: ListingField) -> bool {
        match self {
            ListingFormMode::Create => field != ListingField::ImageLink,
            ListingFormMode::Update => {
                matches!(field, ListingField::Name | ListingField::Price)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingFormViewModel {
    pub mode: ListingFormMode,
    pub draft: ListingDraft,
    /// Only set while an existing record is still being fetched.
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ListingFormViewModel {
    pub fn create() -> Self {
        Self {
            mode: ListingFormMode::Create,
            draft: ListingDraft::default(),
            loading: false,
            submitting: false,
            error: None,
        }
    }

    pub fn update() -> Self {
        Self {
            mode: ListingFormMode::Update,
            loading: true,
            ..Self::create()
        }
    }

    /// Returns `false` for names that are not listing fields.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        match ListingField::from_wire_name(name) {
            Some(field) => {
                self.draft.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn prefill(&mut self, listing: &Listing) {
        self.draft = ListingDraft::from(listing);
        self.loading = false;
        self.error = None;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in ListingField::ALL {
            if self.mode.is_required(field) {
                require(self.draft.get(field), field.label())?;
            }
        }
        validate_price(&self.draft.price)
    }

    /// Validates and returns the body to send; the error is also kept for display.
    pub fn begin_submit(&mut self) -> Result<ListingDraft, FormError> {
        self.error = None;
        if let Err(err) = self.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.submitting = true;
        Ok(self.draft.clone())
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.error = None;
        if self.mode == ListingFormMode::Create {
            self.draft = ListingDraft::default();
        }
    }

    /// Server validation text is shown verbatim.
    pub fn fail(&mut self, err: &ApiError) {
        self.submitting = false;
        let fallback = match self.mode {
            ListingFormMode::Create => MSG_SELL_FAILED,
            ListingFormMode::Update => MSG_UPDATE_FAILED,
        };
        self.error = Some(err.user_message(fallback));
    }
}
