// Library root - exports public API

pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::CloudpostError;
pub use models::{AwsProperties, BucketAcl, FileType, MailAttachment, MailBody, ObjectAcl};
pub use services::{EmailSender, ObjectStore, S3Storage, SesMailer, SmsPublisher, SnsTexter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
