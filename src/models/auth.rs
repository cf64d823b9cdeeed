use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The token is opaque: it is stored and sent back verbatim.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListingRequest {
    pub product_id: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_uses_backend_field_names() {
        let body = serde_json::to_value(DeleteListingRequest {
            product_id: "abc".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "productId": "abc", "password": "secret" }));
    }

    #[test]
    fn message_response_tolerates_missing_message() {
        let parsed: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_empty());
    }
}
