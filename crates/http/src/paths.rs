//! REST paths of the platform API the console talks to.

use pylon_core::KmsProvider;
use uuid::Uuid;

pub const INSECURE_LOGIN: &str = "/api/insecure_login";
pub const CUSTOMER_COUNT: &str = "/api/customer_count";
pub const LOGIN: &str = "/api/login";
pub const REGISTER: &str = "/api/register";
pub const SESSION_VALIDATE: &str = "/api/session/validate";

pub fn kms_configs(customer_id: Uuid) -> String {
    format!("/api/customers/{customer_id}/kms_configs")
}

pub fn kms_config(customer_id: Uuid, provider: KmsProvider) -> String {
    format!("/api/customers/{customer_id}/kms_configs/{provider}")
}
