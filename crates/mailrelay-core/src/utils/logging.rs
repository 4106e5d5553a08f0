/// Logging utilities for PII redaction
///
/// Recipient addresses, subjects and bodies pass through these helpers before
/// they reach a log line.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use mailrelay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Contact: test@acme.com for help"), "Contact: ***@acme.com for help");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts subject line for logging (first few characters plus length)
///
/// # Examples
/// ```
/// use mailrelay_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let len = subject.chars().count();
    if len < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, len)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}
