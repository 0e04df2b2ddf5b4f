//! Pylon console core types and utilities

pub mod kms;
pub mod remote;
pub mod session;

pub use kms::{
    AwsCredentials, AwsParams, AwsRegion, FieldError, FieldKey, FieldKind, FieldSpec,
    KmsConfigForm, KmsParams, KmsProvider, SMARTKEY_DEFAULT_BASE_URL, SmartKeyParams,
    display_fields,
};
pub use remote::RemoteData;
pub use session::{
    CredentialBackend, IdentityState, MemoryBackend, Scope, SessionCredentials, SessionService,
};
