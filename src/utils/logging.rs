/// Logging utilities for PII redaction and tracing setup
///
/// Recipient addresses and phone numbers are personal data; log statements
/// route them through the redaction helpers below.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Initializes the global tracing subscriber with env-filter controls
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use cloudpost::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

/// Redacts a phone number, keeping the last four digits
///
/// # Examples
/// ```
/// use cloudpost::utils::logging::redact_phone;
///
/// assert_eq!(redact_phone("+15551234567"), "***4567");
/// assert_eq!(redact_phone("123"), "***");
/// ```
pub fn redact_phone(phone: &str) -> String {
    // Count in chars, not bytes: numbers may carry non-ASCII digits
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        "***".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("***{}", tail)
    }
}
