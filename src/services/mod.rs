/// AWS service wrappers
pub mod s3;
pub(crate) mod scoped;
pub mod ses;
pub mod sns;

// Re-export service traits
pub use s3::{ObjectStore, S3Storage};
pub use ses::{EmailSender, SesMailer};
pub use sns::{SmsPublisher, SnsTexter};
