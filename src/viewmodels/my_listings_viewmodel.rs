use super::validation::FetchOutcome;
use crate::models::{DeleteListingRequest, Listing, MessageResponse};
use crate::services::ApiError;
use crate::utils::constants::{
    MSG_DELETE_FAILED, MSG_DELETE_SUCCESS, MSG_DELETE_WRONG_PASSWORD, MSG_LISTINGS_FETCH_FAILED,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Removed from the local list; carries the message to show.
    Removed(String),
    WrongPassword,
    RedirectToLogin,
    Failed(String),
}

impl DeleteOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            DeleteOutcome::Removed(message) | DeleteOutcome::Failed(message) => Some(message),
            DeleteOutcome::WrongPassword => Some(MSG_DELETE_WRONG_PASSWORD),
            DeleteOutcome::RedirectToLogin => None,
        }
    }
}

/// The caller's own listings. The list is a local copy: it is fetched on
/// mount and only changed afterwards by successful deletes.
#[derive(Debug, Clone, PartialEq)]
pub struct MyListingsViewModel {
    pub listings: Vec<Listing>,
    pub loading: bool,
    /// Listing whose delete request is in flight.
    pub deleting: Option<String>,
}

impl Default for MyListingsViewModel {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            loading: true,
            deleting: None,
        }
    }
}

impl MyListingsViewModel {
    pub fn apply_fetch(&mut self, result: Result<Vec<Listing>, ApiError>) -> FetchOutcome {
        self.loading = false;
        match result {
            Ok(listings) => {
                self.listings = listings;
                FetchOutcome::Loaded(self.listings.len())
            }
            Err(err) => FetchOutcome::from_error(&err, MSG_LISTINGS_FETCH_FAILED),
        }
    }

    /// Starts a delete; `None` while another delete is still running.
    pub fn begin_delete(&mut self, id: &str, password: String) -> Option<DeleteListingRequest> {
        if self.deleting.is_some() {
            return None;
        }
        self.deleting = Some(id.to_string());
        Some(DeleteListingRequest {
            product_id: id.to_string(),
            password,
        })
    }

    pub fn apply_delete(
        &mut self,
        id: &str,
        result: Result<MessageResponse, ApiError>,
    ) -> DeleteOutcome {
        self.deleting = None;
        match result {
            Ok(reply) => {
                self.listings.retain(|listing| listing.id != id);
                let message = if reply.message.is_empty() {
                    MSG_DELETE_SUCCESS.to_string()
                } else {
                    reply.message
                };
                DeleteOutcome::Removed(message)
            }
            Err(ApiError::OperationRejected { .. }) => DeleteOutcome::WrongPassword,
            Err(ApiError::Unauthenticated) => DeleteOutcome::RedirectToLogin,
            Err(_) => DeleteOutcome::Failed(MSG_DELETE_FAILED.to_string()),
        }
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::tests::ScriptedTransport;
    use crate::services::ApiClient;
    use futures::executor::block_on;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: format!("item {}", id),
            ..Default::default()
        }
    }

    fn loaded(ids: &[&str]) -> MyListingsViewModel {
        let mut vm = MyListingsViewModel::default();
        vm.apply_fetch(Ok(ids.iter().map(|id| listing(id)).collect()));
        vm
    }

    #[test]
    fn expired_token_on_fetch_redirects_without_list() {
        let transport = ScriptedTransport::default().reply(401, "jwt expired");
        let api = ApiClient::with_transport("https://api.test", transport);

        let mut vm = MyListingsViewModel::default();
        let outcome = vm.apply_fetch(block_on(api.my_listings(Some("expired"))));

        assert_eq!(outcome, FetchOutcome::RedirectToLogin);
        assert!(vm.listings.is_empty());
        assert!(!vm.loading);
    }

    #[test]
    fn other_fetch_errors_are_reported() {
        let mut vm = MyListingsViewModel::default();
        let outcome = vm.apply_fetch(Err(ApiError::Http {
            status: 500,
            message: None,
        }));
        assert_eq!(outcome, FetchOutcome::Failed(MSG_LISTINGS_FETCH_FAILED.into()));
    }

    #[test]
    fn successful_delete_removes_locally_without_refetch() {
        let transport = ScriptedTransport::default().reply(200, r#"{"message":"Deleted"}"#);
        let api = ApiClient::with_transport("https://api.test", transport.clone());
        let mut vm = loaded(&["a", "b", "c"]);

        let request = vm.begin_delete("b", "pw".into()).unwrap();
        assert!(vm.is_deleting("b"));
        let outcome = vm.apply_delete("b", block_on(api.delete_listing(Some("tok"), &request)));

        assert_eq!(outcome, DeleteOutcome::Removed("Deleted".into()));
        let ids: Vec<_> = vm.listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(transport.sent_count(), 1);
        assert_eq!(vm.deleting, None);
    }

    #[test]
    fn wrong_password_keeps_listing() {
        let transport = ScriptedTransport::default().reply(401, "Incorrect password");
        let api = ApiClient::with_transport("https://api.test", transport);
        let mut vm = loaded(&["a", "b"]);

        let request = vm.begin_delete("a", "nope".into()).unwrap();
        let outcome = vm.apply_delete("a", block_on(api.delete_listing(Some("tok"), &request)));

        assert_eq!(outcome, DeleteOutcome::WrongPassword);
        assert_eq!(outcome.message(), Some("Invalid password. Deletion failed."));
        assert_eq!(vm.listings.len(), 2);
    }

    #[test]
    fn only_one_delete_at_a_time() {
        let mut vm = loaded(&["a", "b"]);
        assert!(vm.begin_delete("a", "pw".into()).is_some());
        assert!(vm.begin_delete("b", "pw".into()).is_none());
        vm.apply_delete("a", Err(ApiError::Network("down".into())));
        assert_eq!(vm.listings.len(), 2);
        assert!(vm.begin_delete("b", "pw".into()).is_some());
    }
}
