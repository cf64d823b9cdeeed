pub mod api_client;
pub mod error;
pub mod transport;

pub use api_client::{ApiClient, ApiRequest, Endpoint, HttpMethod, UnauthorizedMeaning};
pub use error::ApiError;
pub use transport::{FetchTransport, RawResponse, Transport};
