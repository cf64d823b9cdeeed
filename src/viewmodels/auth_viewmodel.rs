// ============================================================================
// AUTH VIEWMODELS - login, register, password reset forms
// ============================================================================

use super::validation::{FormError, SubmitState};
use crate::models::{LoginRequest, RegisterRequest, ResetPasswordRequest};
use crate::services::ApiError;
use crate::utils::constants::{
    MSG_LOGIN_FAILED, MSG_LOGIN_SUCCESS, MSG_REGISTER_FAILED, MSG_REGISTER_SUCCESS,
    MSG_RESET_FAILED, MSG_RESET_SUCCESS,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginViewModel {
    pub email: String,
    pub password: String,
    pub status: SubmitState,
}

impl LoginViewModel {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => log::warn!("⚠️ Unknown login field: {}", name),
        }
    }

    pub fn begin_submit(&mut self) -> LoginRequest {
        self.status.begin();
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn succeed(&mut self) {
        self.status.succeed(MSG_LOGIN_SUCCESS);
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.status.fail(err.user_message(MSG_LOGIN_FAILED));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterViewModel {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub status: SubmitState,
}

impl RegisterViewModel {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "password" => self.password = value,
            "confirmPassword" => self.confirm_password = value,
            _ => log::warn!("⚠️ Unknown register field: {}", name),
        }
    }

    /// Checks the form locally; on error nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<RegisterRequest, FormError> {
        self.status.begin();
        if self.password != self.confirm_password {
            let err = FormError::PasswordMismatch;
            self.status.fail(err.to_string());
            return Err(err);
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn succeed(&mut self) {
        *self = Self::default();
        self.status.succeed(MSG_REGISTER_SUCCESS);
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.status.fail(err.user_message(MSG_REGISTER_FAILED));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordViewModel {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub status: SubmitState,
}

impl ResetPasswordViewModel {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "email" => self.email = value,
            "password" => self.password = value,
            "confirmPassword" => self.confirm_password = value,
            _ => log::warn!("⚠️ Unknown reset field: {}", name),
        }
    }

    pub fn begin_submit(&mut self) -> Result<ResetPasswordRequest, FormError> {
        self.status.begin();
        if self.password != self.confirm_password {
            let err = FormError::PasswordMismatch;
            self.status.fail(err.to_string());
            return Err(err);
        }
        Ok(ResetPasswordRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn succeed(&mut self) {
        *self = Self::default();
        self.status.succeed(MSG_RESET_SUCCESS);
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.status.fail(err.user_message(MSG_RESET_FAILED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::tests::ScriptedTransport;
    use crate::services::ApiClient;
    use futures::executor::block_on;

    #[test]
    fn mismatched_passwords_block_register_without_network() {
        let transport = ScriptedTransport::default();
        let api = ApiClient::with_transport("https://api.test", transport.clone());

        let mut vm = RegisterViewModel::default();
        vm.set_field("name", "Asha".into());
        vm.set_field("email", "asha@example.com".into());
        vm.set_field("password", "a".into());
        vm.set_field("confirmPassword", "b".into());

        if let Ok(request) = vm.begin_submit() {
            let _ = block_on(api.register(&request));
        }

        assert_eq!(transport.sent_count(), 0);
        assert_eq!(vm.status.error.as_deref(), Some("Passwords do not match!"));
        assert!(!vm.status.loading);
    }

    #[test]
    fn register_success_clears_draft() {
        let mut vm = RegisterViewModel {
            name: "Asha".into(),
            email: " asha@example.com ".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            ..Default::default()
        };
        let request = vm.begin_submit().unwrap();
        assert_eq!(request.email, "asha@example.com");
        assert!(vm.status.loading);

        vm.succeed();
        assert!(vm.password.is_empty());
        assert_eq!(vm.status.success.as_deref(), Some(MSG_REGISTER_SUCCESS));
    }

    #[test]
    fn login_failure_shows_server_text_or_fallback() {
        let mut vm = LoginViewModel::default();
        vm.begin_submit();
        vm.fail(&ApiError::OperationRejected {
            reason: "User not found".into(),
        });
        assert_eq!(vm.status.error.as_deref(), Some("User not found"));

        vm.begin_submit();
        assert_eq!(vm.status.error, None);
        vm.fail(&ApiError::Network("offline".into()));
        assert_eq!(vm.status.error.as_deref(), Some(MSG_LOGIN_FAILED));
        assert!(!vm.status.loading);
    }

    #[test]
    fn reset_checks_confirmation() {
        let mut vm = ResetPasswordViewModel::default();
        vm.set_field("email", "a@b.c".into());
        vm.set_field("password", "new".into());
        vm.set_field("confirmPassword", "old".into());
        assert_eq!(vm.begin_submit(), Err(FormError::PasswordMismatch));

        vm.set_field("confirmPassword", "new".into());
        let request = vm.begin_submit().unwrap();
        assert_eq!(request.password, "new");
    }
}
