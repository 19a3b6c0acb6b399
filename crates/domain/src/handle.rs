//! Handles — short, human-typable identifiers (`sales`, `crm.lead`, `ops-team`).

/// Whether `s` is a well-formed handle.
///
/// A handle starts with an ASCII letter, ends with a letter or digit, and
/// otherwise contains only letters, digits, `_`, `-` or `.`. Single-character
/// handles are rejected.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if bytes.len() < 2 || !first.is_ascii_alphabetic() || !last.is_ascii_alphanumeric() {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_common_handles() {
        for h in ["sales", "sales-eu", "crm.lead", "ops_team2", "ab"] {
            assert!(is_valid(h), "{h} should be valid");
        }
    }

    #[test]
    fn should_reject_malformed_handles() {
        for h in ["", "a", "1sales", "sales-", "sales eu", "_x", "café"] {
            assert!(!is_valid(h), "{h} should be invalid");
        }
    }
}
