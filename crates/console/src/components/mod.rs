pub mod form;
pub mod kms_config;
mod spinner;

pub use kms_config::KmsConfiguration;
pub use spinner::LoadingSpinner;
