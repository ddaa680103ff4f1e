use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use sha2::{Digest, Sha256};

#[allow(clippy::expect_used)]
mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        pub static ref EMAIL_REGEX: Regex =
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern");
        pub static ref PHONE_REGEX: Regex =
            Regex::new(r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("phone pattern");
        pub static ref CARD_REGEX: Regex =
            Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b").expect("card pattern");
        pub static ref STREET_REGEX: Regex = Regex::new(
            r"(?i)\b\d{1,5}(?:\s+[A-Za-z0-9.]+){1,4}?\s+(?:st|street|ave|avenue|rd|road|blvd|boulevard|ln|lane|dr|drive|way|ct|court)\b\.?"
        )
        .expect("street pattern");
        pub static ref DEFAULT: super::PiiRedactor = super::PiiRedactor::new(super::RedactionConfig::default());
    }
}

/// Which kinds of PII to scrub and how
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_cards: bool,
    pub redact_addresses: bool,
    /// Replace values with a short stable hash instead of a mask
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_emails: true,
            redact_phones: true,
            redact_cards: true,
            redact_addresses: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// PII redactor for log messages
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

pub(crate) fn default_redactor() -> &'static PiiRedactor {
    &patterns::DEFAULT
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        // cards before phones: a card number contains phone-shaped digit runs
        if self.config.redact_cards {
            result = self.replace(&patterns::CARD_REGEX, &result, "CC", "****-****-****-****");
        }

        if self.config.redact_phones {
            result = self.replace(&patterns::PHONE_REGEX, &result, "PHONE", "(***) ***-****");
        }

        if self.config.redact_addresses {
            result = self.replace(&patterns::STREET_REGEX, &result, "ADDRESS", "[ADDRESS]");
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    fn redact_emails(&self, text: &str) -> String {
        patterns::EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let email = caps.get(0).map_or("", |m| m.as_str());
                if self.config.hash_for_correlation {
                    return format!("EMAIL[{}]", self.hash_value(email));
                }
                match email.split_once('@') {
                    Some((local, domain)) => format!(
                        "{}***@{}***",
                        local.chars().next().unwrap_or('*'),
                        domain.chars().next().unwrap_or('*')
                    ),
                    None => "***@***".to_string(),
                }
            })
            .to_string()
    }

    fn replace(&self, pattern: &Regex, text: &str, tag: &str, mask: &str) -> String {
        pattern
            .replace_all(text, |caps: &regex::Captures| {
                let value = caps.get(0).map_or("", |m| m.as_str());
                if self.config.hash_for_correlation {
                    format!("{}[{}]", tag, self.hash_value(value))
                } else {
                    mask.to_string()
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        general_purpose::STANDARD.encode(digest.get(..8).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masking() -> PiiRedactor {
        PiiRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_email_redaction() {
        let redacted = masking().redact("Profile updated for john@example.com");
        assert!(redacted.contains("j***@e***"));
        assert!(!redacted.contains("john@example.com"));
    }

    #[test]
    fn test_phone_redaction() {
        let redacted = masking().redact("Call 555-123-4567 on delivery");
        assert!(redacted.contains("(***) ***-****"));
    }

    #[test]
    fn test_card_redaction() {
        let redacted = masking().redact("Paid with 4242 4242 4242 4242");
        assert_eq!(redacted, "Paid with ****-****-****-****");
    }

    #[test]
    fn test_street_address_redaction() {
        let redacted = masking().redact("Deliver to 123 Main St, Anytown, USA");
        assert_eq!(redacted, "Deliver to [ADDRESS], Anytown, USA");
    }

    #[test]
    fn test_hashes_are_stable_for_correlation() {
        let redactor = PiiRedactor::new(RedactionConfig::default());
        let first = redactor.redact("john@example.com");
        let second = redactor.redact("john@example.com");
        assert_eq!(first, second);
        assert!(first.starts_with("EMAIL["));
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Added 2 x ColdEase Plus (med-101) to cart";
        assert_eq!(masking().redact(text), text);
    }
}
