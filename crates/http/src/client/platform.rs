//! Typed endpoint wrappers over the two client flavors.

use pylon_core::{KmsParams, KmsProvider};

use super::error::ClientError;
use super::typed::{AuthenticatedPlatformClient, PublicPlatformClient};
use crate::paths;
use crate::types::{
    CustomerCountResponse, InsecureLoginResponse, KmsConfigEntry, LoginRequest, RegisterRequest,
    SessionInfo, TokenValidation,
};

impl PublicPlatformClient {
    /// Bootstrap login for deployments running without authentication.
    pub async fn insecure_login(&self) -> Result<InsecureLoginResponse, ClientError> {
        let request = self.request(reqwest::Method::POST, paths::INSECURE_LOGIN);
        self.execute(request).await
    }

    /// Number of customers registered on the platform. Zero means this
    /// deployment has never been set up.
    pub async fn customer_count(&self) -> Result<CustomerCountResponse, ClientError> {
        let request = self.request(reqwest::Method::GET, paths::CUSTOMER_COUNT);
        self.execute(request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<SessionInfo, ClientError> {
        let request = self
            .request(reqwest::Method::POST, paths::LOGIN)
            .json(request);
        self.execute(request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionInfo, ClientError> {
        let request = self
            .request(reqwest::Method::POST, paths::REGISTER)
            .json(request);
        self.execute(request).await
    }
}

impl AuthenticatedPlatformClient {
    /// Validate the session tokens this client is bound to.
    ///
    /// The session guard inspects the raw status instead; this wrapper is for
    /// callers that only care about a valid session's body.
    pub async fn validate_token(&self) -> Result<TokenValidation, ClientError> {
        let request = self.request(reqwest::Method::GET, paths::SESSION_VALIDATE);
        self.execute(request).await
    }

    pub async fn kms_config_list(&self) -> Result<Vec<KmsConfigEntry>, ClientError> {
        let request = self.request(reqwest::Method::GET, &paths::kms_configs(self.customer_id()));
        self.execute(request).await
    }

    pub async fn set_kms_config(
        &self,
        provider: KmsProvider,
        params: &KmsParams,
    ) -> Result<(), ClientError> {
        let request = self
            .request(
                reqwest::Method::POST,
                &paths::kms_config(self.customer_id(), provider),
            )
            .json(params);
        self.execute_unit(request).await
    }

    pub async fn delete_kms_config(&self, provider: KmsProvider) -> Result<(), ClientError> {
        let request = self.request(
            reqwest::Method::DELETE,
            &paths::kms_config(self.customer_id(), provider),
        );
        self.execute_unit(request).await
    }
}
