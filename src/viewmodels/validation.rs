use thiserror::Error;

use crate::services::ApiError;
use crate::utils::constants::MSG_PASSWORD_MISMATCH;

/// Problems caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", MSG_PASSWORD_MISMATCH)]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

/// Loading flag plus the inline error/success banners of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SubmitState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = None;
    }

    pub fn succeed(&mut self, message: &str) {
        self.loading = false;
        self.error = None;
        self.success = Some(message.to_string());
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.success = None;
        self.error = Some(message);
    }
}

/// What a list view does with the result of its initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(usize),
    RedirectToLogin,
    Failed(String),
}

impl FetchOutcome {
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        if err.is_unauthenticated() {
            FetchOutcome::RedirectToLogin
        } else {
            FetchOutcome::Failed(fallback.to_string())
        }
    }
}

pub fn require(value: &str, label: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(label))
    } else {
        Ok(())
    }
}

pub fn validate_price(price: &str) -> Result<(), FormError> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
        _ => Err(FormError::InvalidPrice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_is_exact() {
        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match!");
    }

    #[test]
    fn price_must_be_a_plain_number() {
        assert!(validate_price("450").is_ok());
        assert!(validate_price(" 12.5 ").is_ok());
        assert_eq!(validate_price("-1"), Err(FormError::InvalidPrice));
        assert_eq!(validate_price("abc"), Err(FormError::InvalidPrice));
        assert_eq!(validate_price("NaN"), Err(FormError::InvalidPrice));
    }

    #[test]
    fn only_session_failures_redirect() {
        assert_eq!(
            FetchOutcome::from_error(&ApiError::Unauthenticated, "x"),
            FetchOutcome::RedirectToLogin
        );
        assert_eq!(
            FetchOutcome::from_error(&ApiError::Network("down".into()), "x"),
            FetchOutcome::Failed("x".into())
        );
    }
}
