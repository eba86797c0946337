//! Deny list of disposable-email providers.

/// Domains rejected at contact validation. Matching covers the domain
/// itself and any subdomain of it.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "dispostable.com",
    "fakeinbox.com",
    "getnada.com",
    "guerrillamail.com",
    "guerrillamail.net",
    "maildrop.cc",
    "mailinator.com",
    "mintemail.com",
    "mohmal.com",
    "sharklasers.com",
    "spam4.me",
    "tempmail.com",
    "temp-mail.org",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
];

/// Checks a lower-cased domain against the deny list.
pub fn is_disposable(domain: &str) -> bool {
    DISPOSABLE_DOMAINS
        .iter()
        .any(|denied| domain == *denied || domain.ends_with(&format!(".{}", denied)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_domains_match() {
        assert!(is_disposable("mailinator.com"));
        assert!(is_disposable("yopmail.com"));
    }

    #[test]
    fn subdomains_of_denied_domains_match() {
        assert!(is_disposable("mx.mailinator.com"));
    }

    #[test]
    fn regular_providers_pass() {
        assert!(!is_disposable("example.com"));
        assert!(!is_disposable("gmail.com"));
        // Suffix match must not catch lookalike registrations.
        assert!(!is_disposable("notmailinator.com"));
    }
}
