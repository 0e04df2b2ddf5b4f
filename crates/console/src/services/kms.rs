//! KMS configuration service bound to the current session.

use pylon_http::client::ClientError;
use pylon_http::flows::KmsService;

use crate::client;

pub fn kms_service() -> Result<KmsService, ClientError> {
    Ok(KmsService::new(client::authenticated_client()?))
}
