/// Configuration models
use crate::error::CloudpostError;
use serde::{Deserialize, Serialize};

/// Per-service AWS settings: one access key / secret key / region triple for
/// each of S3, SES and SNS.
///
/// All fields default to empty strings so partially configured deployments
/// deserialize cleanly; a wrapper built from an incomplete triple simply
/// reports itself as not ready.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AwsProperties {
    #[serde(default)]
    pub s3_access_key: String,
    #[serde(default)]
    pub s3_secret_key: String,
    #[serde(default)]
    pub s3_region: String,

    #[serde(default)]
    pub ses_access_key: String,
    #[serde(default)]
    pub ses_secret_key: String,
    #[serde(default)]
    pub ses_region: String,

    #[serde(default)]
    pub sns_access_key: String,
    #[serde(default)]
    pub sns_secret_key: String,
    #[serde(default)]
    pub sns_region: String,
}

impl AwsProperties {
    /// Loads settings from `AWS_S3_ACCESS_KEY`, `AWS_SES_REGION` and friends,
    /// treating absent variables as empty
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            s3_access_key: var("AWS_S3_ACCESS_KEY"),
            s3_secret_key: var("AWS_S3_SECRET_KEY"),
            s3_region: var("AWS_S3_REGION"),
            ses_access_key: var("AWS_SES_ACCESS_KEY"),
            ses_secret_key: var("AWS_SES_SECRET_KEY"),
            ses_region: var("AWS_SES_REGION"),
            sns_access_key: var("AWS_SNS_ACCESS_KEY"),
            sns_secret_key: var("AWS_SNS_SECRET_KEY"),
            sns_region: var("AWS_SNS_REGION"),
        }
    }

    /// Parses settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, CloudpostError> {
        serde_json::from_str(json)
            .map_err(|e| CloudpostError::Config(format!("Invalid settings JSON: {}", e)))
    }

    pub fn s3_credentials(&self) -> ServiceCredentials {
        ServiceCredentials {
            access_key: self.s3_access_key.clone(),
            secret_key: self.s3_secret_key.clone(),
            region: self.s3_region.clone(),
        }
    }

    pub fn ses_credentials(&self) -> ServiceCredentials {
        ServiceCredentials {
            access_key: self.ses_access_key.clone(),
            secret_key: self.ses_secret_key.clone(),
            region: self.ses_region.clone(),
        }
    }

    pub fn sns_credentials(&self) -> ServiceCredentials {
        ServiceCredentials {
            access_key: self.sns_access_key.clone(),
            secret_key: self.sns_secret_key.clone(),
            region: self.sns_region.clone(),
        }
    }
}

/// One service's credential triple, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl ServiceCredentials {
    /// Readiness is a pure function of the triple: all three fields non-empty
    pub fn is_complete(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty() && !self.region.is_empty()
    }
}
