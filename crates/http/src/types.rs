//! Request and response payloads of the platform API.

use pylon_core::KmsProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body returned by the bootstrap login endpoint when the platform runs
/// without authentication configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsecureLoginResponse {
    #[serde(rename = "apiToken")]
    pub api_token: String,
    #[serde(rename = "customerUUID")]
    pub customer_uuid: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCountResponse {
    pub count: u64,
}

/// Body of a successful token validation. The customer id is echoed back so
/// the console can repair a missing persistent mirror.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenValidation {
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body returned by interactive login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "authToken")]
    pub auth_token: String,
    #[serde(rename = "customerUUID")]
    pub customer_uuid: Uuid,
}

/// One configured KMS integration, as listed by the platform. Credential
/// values arrive redacted; the console only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmsConfigEntry {
    pub provider: KmsProvider,
    #[serde(default)]
    pub credentials: serde_json::Value,
}
