//! Input validation applied at the command boundary
//!
//! The repository accepts any well-shaped input; required-field and
//! email-format checks live here.

use anyhow::{Result, ensure};

/// Minimal structural check for an email address: one `@`, a non-empty
/// local part, and a host containing an interior dot. Deliberately far
/// short of RFC 5322.
pub fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && !host.is_empty()
                && !host.contains('@')
                && host.contains('.')
                && !host.starts_with('.')
                && !host.ends_with('.')
        }
        None => false,
    };
    ensure!(valid, "invalid email address: {email:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john.doe@email.com")]
    #[case("a@b.c")]
    #[case("first+tag@sub.example.org")]
    fn accepts_reasonable_addresses(#[case] email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("plainaddress")]
    #[case("@missing-local.com")]
    #[case("missing-host@")]
    #[case("two@@ats.com")]
    #[case("no-dot@host")]
    #[case("dot-at-edge@.host")]
    #[case("dot-at-edge@host.")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        assert!(validate_email(email).is_err());
    }
}
