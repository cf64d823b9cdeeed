// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Builds requests for the marketplace backend, sends them through a
// Transport and classifies failures. The token is passed in per call; the
// client never stores it.
// ============================================================================

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{server_message, ApiError};
use super::transport::{FetchTransport, RawResponse, Transport};
use crate::config::CONFIG;
use crate::models::{
    DeleteListingRequest, Listing, ListingDraft, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, ResetPasswordRequest,
};
use crate::utils::constants::{MSG_DELETE_WRONG_PASSWORD, MSG_LOGIN_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// What a 401 from a given endpoint means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedMeaning {
    /// The session token is missing, expired or invalid.
    SessionInvalid,
    /// A credential sent for this one operation was wrong; the session
    /// itself is untouched. Carries the fallback reason.
    CredentialRejected(&'static str),
}

/// Every backend operation the front-end uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    ResetPassword,
    MyListings,
    FetchListing(String),
    UpdateListing(String),
    DeleteListing,
    Products { name: Option<String> },
    CreateListing,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::ResetPassword
            | Endpoint::CreateListing => HttpMethod::Post,
            Endpoint::MyListings | Endpoint::FetchListing(_) | Endpoint::Products { .. } => {
                HttpMethod::Get
            }
            Endpoint::UpdateListing(_) => HttpMethod::Put,
            Endpoint::DeleteListing => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/login".to_string(),
            Endpoint::Register => "/register".to_string(),
            Endpoint::ResetPassword => "/updatepassword".to_string(),
            Endpoint::MyListings => "/mylistings".to_string(),
            Endpoint::FetchListing(id) => format!("/mylistings/{}", id),
            Endpoint::UpdateListing(id) => format!("/mylistings/updateproduct/{}", id),
            Endpoint::DeleteListing => "/mylistings/delete".to_string(),
            Endpoint::Products { .. } => "/products".to_string(),
            Endpoint::CreateListing => "/sellproduct".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Endpoint::Login | Endpoint::Register | Endpoint::ResetPassword
        )
    }

    pub fn unauthorized_means(&self) -> UnauthorizedMeaning {
        match self {
            Endpoint::Login => UnauthorizedMeaning::CredentialRejected(MSG_LOGIN_FAILED),
            Endpoint::DeleteListing => {
                UnauthorizedMeaning::CredentialRejected(MSG_DELETE_WRONG_PASSWORD)
            }
            Endpoint::Register | Endpoint::ResetPassword => {
                UnauthorizedMeaning::CredentialRejected("Request rejected")
            }
            _ => UnauthorizedMeaning::SessionInvalid,
        }
    }

    fn query(&self) -> Vec<(String, String)> {
        match self {
            Endpoint::Products { name: Some(name) } if !name.trim().is_empty() => {
                vec![("name".to_string(), name.trim().to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// Maps a non-2xx response to the error kind this endpoint implies.
    pub fn classify_failure(&self, response: &RawResponse) -> ApiError {
        let message = server_message(&response.body);
        if response.status == 401 {
            return match self.unauthorized_means() {
                UnauthorizedMeaning::SessionInvalid => ApiError::Unauthenticated,
                UnauthorizedMeaning::CredentialRejected(fallback) => ApiError::OperationRejected {
                    reason: message.unwrap_or_else(|| fallback.to_string()),
                },
            };
        }
        ApiError::Http {
            status: response.status,
            message,
        }
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Sent verbatim as the `Authorization` header (no `Bearer ` prefix).
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<FetchTransport> {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url(), FetchTransport)
    }
}

impl Default for ApiClient<FetchTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves an endpoint into a request.
    ///
    /// Fails with `Unauthenticated` before anything is sent when the
    /// endpoint needs a token and none is available.
    pub fn request(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiRequest, ApiError> {
        let token = token.filter(|t| !t.is_empty());
        let authorization = if endpoint.requires_auth() {
            Some(token.ok_or(ApiError::Unauthenticated)?.to_string())
        } else {
            None
        };

        Ok(ApiRequest {
            method: endpoint.method(),
            url: format!("{}{}", self.base_url, endpoint.path()),
            query: endpoint.query(),
            authorization,
            body,
        })
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let request = self.request(endpoint, token, body)?;
        log::info!("🌐 {} {}", request.method, endpoint.path());

        let response = self.transport.execute(request).await.map_err(|e| {
            log::error!("❌ {} {}: {}", endpoint.method(), endpoint.path(), e);
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = endpoint.classify_failure(&response);
            log::warn!("⚠️ {} {} → {}", endpoint.method(), endpoint.path(), err);
            Err(err)
        }
    }

    async fn call<B, R>(&self, endpoint: Endpoint, token: Option<&str>, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = body.map(to_json).transpose()?;
        let response = self.send(&endpoint, token, body).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like `call` but ignores the success body (201 responses may be empty).
    async fn call_unit<B: Serialize>(
        &self,
        endpoint: Endpoint,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = to_json(body)?;
        self.send(&endpoint, token, Some(body)).await.map(|_| ())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call(Endpoint::Login, None, Some(request)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.call_unit(Endpoint::Register, None, request).await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.call_unit(Endpoint::ResetPassword, None, request).await
    }

    pub async fn my_listings(&self, token: Option<&str>) -> Result<Vec<Listing>, ApiError> {
        self.call::<(), _>(Endpoint::MyListings, token, None).await
    }

    pub async fn fetch_listing(&self, token: Option<&str>, id: &str) -> Result<Listing, ApiError> {
        self.call::<(), _>(Endpoint::FetchListing(id.to_string()), token, None)
            .await
    }

    pub async fn update_listing(
        &self,
        token: Option<&str>,
        id: &str,
        draft: &ListingDraft,
    ) -> Result<MessageResponse, ApiError> {
        self.call(Endpoint::UpdateListing(id.to_string()), token, Some(draft))
            .await
    }

    pub async fn delete_listing(
        &self,
        token: Option<&str>,
        request: &DeleteListingRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.call(Endpoint::DeleteListing, token, Some(request)).await
    }

    /// Browse listings; the backend does the name filtering.
    pub async fn products(
        &self,
        token: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Listing>, ApiError> {
        let endpoint = Endpoint::Products {
            name: name.map(str::to_string),
        };
        self.call::<(), _>(endpoint, token, None).await
    }

    pub async fn create_listing(
        &self,
        token: Option<&str>,
        draft: &ListingDraft,
    ) -> Result<(), ApiError> {
        self.call_unit(Endpoint::CreateListing, token, draft).await
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays canned responses and records every request it receives.
    #[derive(Clone, Default)]
    pub(crate) struct ScriptedTransport {
        pub sent: Rc<RefCell<Vec<ApiRequest>>>,
        replies: Rc<RefCell<VecDeque<RawResponse>>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(RawResponse {
                status,
                body: body.to_string(),
            });
            self
        }

        pub fn sent_count(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn last(&self) -> ApiRequest {
            self.sent.borrow().last().cloned().expect("no request sent")
        }
    }

    impl Transport for ScriptedTransport {
        async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Network("no scripted reply".to_string()))
        }
    }

    fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::with_transport("https://api.test/", transport.clone())
    }

    #[test]
    fn login_is_sent_without_authorization() {
        let transport = ScriptedTransport::default().reply(200, r#"{"token":"tok-1"}"#);
        let response = block_on(client(&transport).login(&LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
        }))
        .unwrap();

        assert_eq!(response.token, "tok-1");
        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.test/login");
        assert_eq!(sent.authorization, None);
        assert_eq!(sent.body, Some(serde_json::json!({"email":"a@b.c","password":"pw"})));
    }

    #[test]
    fn protected_call_without_token_never_reaches_transport() {
        let transport = ScriptedTransport::default();
        let result = block_on(client(&transport).my_listings(None));
        assert_eq!(result, Err(ApiError::Unauthenticated));
        assert_eq!(transport.sent_count(), 0);

        let result = block_on(client(&transport).my_listings(Some("")));
        assert_eq!(result, Err(ApiError::Unauthenticated));
        assert_eq!(transport.sent_count(), 0);
    }

    #[test]
    fn token_is_attached_verbatim() {
        let transport = ScriptedTransport::default().reply(200, "[]");
        block_on(client(&transport).my_listings(Some("raw.jwt.value"))).unwrap();
        assert_eq!(transport.last().authorization.as_deref(), Some("raw.jwt.value"));
        assert_eq!(transport.last().body, None);
    }

    #[test]
    fn expired_session_on_list_fetch_is_unauthenticated() {
        let transport = ScriptedTransport::default().reply(401, "Invalid token");
        let result = block_on(client(&transport).my_listings(Some("stale")));
        assert_eq!(result, Err(ApiError::Unauthenticated));
    }

    #[test]
    fn unauthorized_delete_is_a_rejected_operation() {
        let transport = ScriptedTransport::default().reply(401, "");
        let result = block_on(client(&transport).delete_listing(
            Some("tok"),
            &DeleteListingRequest {
                product_id: "p1".into(),
                password: "wrong".into(),
            },
        ));
        assert_eq!(
            result,
            Err(ApiError::OperationRejected {
                reason: MSG_DELETE_WRONG_PASSWORD.to_string()
            })
        );
        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.url, "https://api.test/mylistings/delete");
        assert_eq!(
            sent.body,
            Some(serde_json::json!({"productId":"p1","password":"wrong"}))
        );
    }

    #[test]
    fn login_rejection_carries_server_text() {
        let transport = ScriptedTransport::default().reply(401, "Invalid email or password");
        let result = block_on(client(&transport).login(&LoginRequest {
            email: "a@b.c".into(),
            password: "bad".into(),
        }));
        assert_eq!(
            result,
            Err(ApiError::OperationRejected {
                reason: "Invalid email or password".to_string()
            })
        );
    }

    #[test]
    fn validation_error_keeps_status_and_body() {
        let transport =
            ScriptedTransport::default().reply(400, r#"{"message":"Phone number is required"}"#);
        let result = block_on(client(&transport).create_listing(Some("tok"), &ListingDraft::default()));
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 400,
                message: Some("Phone number is required".to_string())
            })
        );
    }

    #[test]
    fn created_listing_accepts_empty_body() {
        let transport = ScriptedTransport::default().reply(201, "");
        block_on(client(&transport).create_listing(Some("tok"), &ListingDraft::default())).unwrap();
        assert_eq!(transport.last().url, "https://api.test/sellproduct");
    }

    #[test]
    fn search_forwards_trimmed_query_and_skips_blank() {
        let transport = ScriptedTransport::default().reply(200, "[]").reply(200, "[]");
        let api = client(&transport);

        block_on(api.products(Some("tok"), Some("  lab coat "))).unwrap();
        assert_eq!(
            transport.last().query,
            vec![("name".to_string(), "lab coat".to_string())]
        );

        block_on(api.products(Some("tok"), Some("   "))).unwrap();
        assert!(transport.last().query.is_empty());
        assert_eq!(transport.last().url, "https://api.test/products");
    }

    #[test]
    fn update_targets_listing_path() {
        let transport = ScriptedTransport::default().reply(200, r#"{"message":"Updated"}"#);
        let reply = block_on(client(&transport).update_listing(
            Some("tok"),
            "abc123",
            &ListingDraft::default(),
        ))
        .unwrap();
        assert_eq!(reply.message, "Updated");
        assert_eq!(transport.last().method, HttpMethod::Put);
        assert_eq!(transport.last().url, "https://api.test/mylistings/updateproduct/abc123");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let transport = ScriptedTransport::default().reply(200, "<html>");
        let result = block_on(client(&transport).my_listings(Some("tok")));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
