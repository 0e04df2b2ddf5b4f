//! Key-management-service configuration: providers, form values, validation,
//! and the normalized payload sent to the platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base URL used for SmartKey when the operator leaves the field blank.
pub const SMARTKEY_DEFAULT_BASE_URL: &str = "api.amer.smartkey.io";

/// Supported KMS providers. The wire tag doubles as the path segment in the
/// platform's config endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KmsProvider {
    #[serde(rename = "SMARTKEY")]
    SmartKey,
    #[serde(rename = "AWS")]
    Aws,
}

impl KmsProvider {
    pub const ALL: &'static [KmsProvider] = &[KmsProvider::SmartKey, KmsProvider::Aws];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmartKey => "SMARTKEY",
            Self::Aws => "AWS",
        }
    }

    /// Human-readable name shown in the provider dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmartKey => "Equinix SmartKey",
            Self::Aws => "AWS KMS",
        }
    }
}

impl fmt::Display for KmsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown KMS provider: {0}")]
pub struct UnknownProvider(String);

impl FromStr for KmsProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMARTKEY" => Ok(Self::SmartKey),
            "AWS" => Ok(Self::Aws),
            other => Err(UnknownProvider(other.to_owned())),
        }
    }
}

macro_rules! aws_regions {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// AWS regions the platform can host key material in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum AwsRegion {
            $(#[serde(rename = $code)] $variant,)+
        }

        impl AwsRegion {
            pub const ALL: &'static [AwsRegion] = &[$(AwsRegion::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl FromStr for AwsRegion {
            type Err = UnknownRegion;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownRegion(other.to_owned())),
                }
            }
        }
    };
}

aws_regions! {
    UsWest1 => "us-west-1",
    UsWest2 => "us-west-2",
    UsEast1 => "us-east-1",
    UsEast2 => "us-east-2",
    ApSouth1 => "ap-south-1",
    ApNortheast1 => "ap-northeast-1",
    ApNortheast2 => "ap-northeast-2",
    ApSoutheast1 => "ap-southeast-1",
    ApSoutheast2 => "ap-southeast-2",
    CaCentral1 => "ca-central-1",
    EuCentral1 => "eu-central-1",
    EuWest1 => "eu-west-1",
    EuWest2 => "eu-west-2",
    EuWest3 => "eu-west-3",
    SaEast1 => "sa-east-1",
}

#[derive(Debug, Error)]
#[error("unknown AWS region: {0}")]
pub struct UnknownRegion(String);

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static AWS credentials; absent when the server should assume its ambient
/// IAM role instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwsCredentials {
    #[serde(rename = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: String,
    #[serde(rename = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartKeyParams {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwsParams {
    #[serde(rename = "AWS_REGION")]
    pub region: AwsRegion,
    /// Omitted from the payload entirely in IAM-profile mode.
    #[serde(flatten)]
    pub credentials: Option<AwsCredentials>,
}

/// Normalized payload for the config-set endpoint. Serializes to the flat
/// key/value map the platform expects for each provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KmsParams {
    SmartKey(SmartKeyParams),
    Aws(AwsParams),
}

impl KmsParams {
    pub fn provider(&self) -> KmsProvider {
        match self {
            Self::SmartKey(_) => KmsProvider::SmartKey,
            Self::Aws(_) => KmsProvider::Aws,
        }
    }
}

/// Widget a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Select,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    ApiUrl,
    ApiKey,
    UseIamProfile,
    AccessKeyId,
    SecretKeyId,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

const SMARTKEY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: FieldKey::ApiUrl,
        label: "API Url",
        kind: FieldKind::Text,
        placeholder: Some(SMARTKEY_DEFAULT_BASE_URL),
    },
    FieldSpec {
        key: FieldKey::ApiKey,
        label: "Secret API Key",
        kind: FieldKind::Password,
        placeholder: None,
    },
];

const AWS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: FieldKey::UseIamProfile,
        label: "Use IAM Profile",
        kind: FieldKind::Toggle,
        placeholder: None,
    },
    FieldSpec {
        key: FieldKey::AccessKeyId,
        label: "Access Key Id",
        kind: FieldKind::Text,
        placeholder: None,
    },
    FieldSpec {
        key: FieldKey::SecretKeyId,
        label: "Secret Key Id",
        kind: FieldKind::Password,
        placeholder: None,
    },
    FieldSpec {
        key: FieldKey::Region,
        label: "Region",
        kind: FieldKind::Select,
        placeholder: None,
    },
];

/// Field set for a provider selection. An absent provider falls back to the
/// SmartKey fields; that is the form's default view, not an error.
pub fn display_fields(provider: Option<KmsProvider>) -> &'static [FieldSpec] {
    match provider.unwrap_or(KmsProvider::SmartKey) {
        KmsProvider::SmartKey => SMARTKEY_FIELDS,
        KmsProvider::Aws => AWS_FIELDS,
    }
}

/// A field-scoped validation failure. Blocks submission; never reaches the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldKey,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: FieldKey, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Raw values collected by the configuration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmsConfigForm {
    pub provider: Option<KmsProvider>,
    pub api_url: String,
    pub api_key: String,
    pub use_iam_profile: bool,
    pub access_key_id: String,
    pub secret_key_id: String,
    pub region: Option<AwsRegion>,
}

impl KmsConfigForm {
    pub fn provider_or_default(&self) -> KmsProvider {
        self.provider.unwrap_or(KmsProvider::SmartKey)
    }

    /// Evaluate the declarative rules against the current provider
    /// selection, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        match self.provider_or_default() {
            KmsProvider::SmartKey => {
                if self.api_key.trim().is_empty() {
                    errors.push(FieldError::new(FieldKey::ApiKey, "API key is required"));
                }
            }
            KmsProvider::Aws => {
                if !self.use_iam_profile {
                    if self.access_key_id.trim().is_empty() {
                        errors.push(FieldError::new(
                            FieldKey::AccessKeyId,
                            "Access key ID is required",
                        ));
                    }
                    if self.secret_key_id.trim().is_empty() {
                        errors.push(FieldError::new(
                            FieldKey::SecretKeyId,
                            "Secret key ID is required",
                        ));
                    }
                }
                if self.region.is_none() {
                    errors.push(FieldError::new(FieldKey::Region, "AWS region is required"));
                }
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate and normalize into the submission payload. Defaults (the
    /// SmartKey base URL) are applied here, not during validation.
    pub fn to_params(&self) -> Result<KmsParams, Vec<FieldError>> {
        self.validate()?;
        match self.provider_or_default() {
            KmsProvider::SmartKey => {
                let base_url = if self.api_url.trim().is_empty() {
                    SMARTKEY_DEFAULT_BASE_URL.to_owned()
                } else {
                    self.api_url.trim().to_owned()
                };
                Ok(KmsParams::SmartKey(SmartKeyParams {
                    base_url,
                    api_key: self.api_key.trim().to_owned(),
                }))
            }
            KmsProvider::Aws => {
                let region = self
                    .region
                    .ok_or_else(|| vec![FieldError::new(FieldKey::Region, "AWS region is required")])?;
                let credentials = if self.use_iam_profile {
                    None
                } else {
                    Some(AwsCredentials {
                        access_key_id: self.access_key_id.trim().to_owned(),
                        secret_key_id: self.secret_key_id.trim().to_owned(),
                    })
                };
                Ok(KmsParams::Aws(AwsParams {
                    region,
                    credentials,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aws_form() -> KmsConfigForm {
        KmsConfigForm {
            provider: Some(KmsProvider::Aws),
            access_key_id: "AKIA123".into(),
            secret_key_id: "secret".into(),
            region: Some(AwsRegion::UsWest2),
            ..Default::default()
        }
    }

    #[test]
    fn absent_provider_defaults_to_smartkey_fields() {
        let fields = display_fields(None);
        assert_eq!(fields, display_fields(Some(KmsProvider::SmartKey)));
        assert_eq!(fields[0].key, FieldKey::ApiUrl);
    }

    #[test]
    fn aws_fields_include_iam_toggle_and_region() {
        let fields = display_fields(Some(KmsProvider::Aws));
        assert!(fields.iter().any(|f| f.key == FieldKey::UseIamProfile));
        assert!(fields.iter().any(|f| f.key == FieldKey::Region));
        assert!(fields.iter().all(|f| f.key != FieldKey::ApiKey));
    }

    #[test]
    fn smartkey_requires_api_key() {
        let form = KmsConfigForm {
            provider: Some(KmsProvider::SmartKey),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldKey::ApiKey);
    }

    #[test]
    fn default_provider_validates_as_smartkey() {
        let form = KmsConfigForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, FieldKey::ApiKey);
    }

    #[test]
    fn aws_without_credentials_fails_unless_iam_enabled() {
        let mut form = aws_form();
        form.access_key_id.clear();
        form.secret_key_id.clear();
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == FieldKey::AccessKeyId));
        assert!(errors.iter().any(|e| e.field == FieldKey::SecretKeyId));

        form.use_iam_profile = true;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn aws_requires_region() {
        let mut form = aws_form();
        form.region = None;
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::new(FieldKey::Region, "AWS region is required")]);
    }

    #[test]
    fn smartkey_payload_defaults_base_url() {
        let form = KmsConfigForm {
            provider: Some(KmsProvider::SmartKey),
            api_key: "key-material".into(),
            ..Default::default()
        };
        let params = form.to_params().unwrap();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["base_url"], SMARTKEY_DEFAULT_BASE_URL);
        assert_eq!(value["api_key"], "key-material");
    }

    #[test]
    fn smartkey_payload_keeps_entered_url() {
        let form = KmsConfigForm {
            provider: Some(KmsProvider::SmartKey),
            api_url: "api.eu.smartkey.io".into(),
            api_key: "key-material".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(form.to_params().unwrap()).unwrap();
        assert_eq!(value["base_url"], "api.eu.smartkey.io");
    }

    #[test]
    fn aws_payload_with_static_credentials() {
        let value = serde_json::to_value(aws_form().to_params().unwrap()).unwrap();
        assert_eq!(value["AWS_REGION"], "us-west-2");
        assert_eq!(value["AWS_ACCESS_KEY_ID"], "AKIA123");
        assert_eq!(value["AWS_SECRET_ACCESS_KEY"], "secret");
    }

    #[test]
    fn iam_profile_omits_credential_keys_entirely() {
        let mut form = aws_form();
        form.use_iam_profile = true;
        form.access_key_id.clear();
        form.secret_key_id.clear();

        let value = serde_json::to_value(form.to_params().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("AWS_REGION"));
        assert!(!object.contains_key("AWS_ACCESS_KEY_ID"));
        assert!(!object.contains_key("AWS_SECRET_ACCESS_KEY"));
    }

    #[test]
    fn provider_wire_tags_round_trip() {
        for provider in KmsProvider::ALL {
            let parsed: KmsProvider = provider.as_str().parse().unwrap();
            assert_eq!(parsed, *provider);
        }
        assert!("GCP".parse::<KmsProvider>().is_err());
    }
}
