/// Application constants
///
/// Hardcoded limits and defaults used throughout the library.
// ============================================================================
// Presigned URL Limits
// ============================================================================
/// Maximum presigned URL lifetime accepted by S3 (7 days)
pub const MAX_PRESIGN_DURATION_SECS: u64 = 7 * 24 * 60 * 60;

/// Default presigned URL lifetime (5 minutes)
pub const DEFAULT_PRESIGN_DURATION_SECS: u64 = 5 * 60;

// ============================================================================
// Timing Constants
// ============================================================================

/// Maximum time to wait for a freshly created bucket to become visible
pub const BUCKET_EXISTS_WAIT_SECS: u64 = 60;

// ============================================================================
// Identifiers
// ============================================================================

/// Provider name attached to static credentials handed to the SDK
pub const CREDENTIALS_PROVIDER_NAME: &str = "cloudpost";
