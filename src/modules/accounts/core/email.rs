// Email rules for account identities.
//
// Grammar accepted by `is_valid_email` (after trimming surrounding whitespace):
// - exactly one "@" separating a local part and a domain
// - local part: 1..=64 chars of ASCII alphanumerics or !#$%&'*+/=?^_`{|}~.-
//   with no leading, trailing or doubled "."
// - domain: at least two "."-separated labels of 1..=63 ASCII alphanumerics or "-",
//   no label starting or ending with "-", final label at least two letters
// - 254 chars at most overall

use std::fmt;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;
const LOCAL_PART_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Store key for an account: trimmed and case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_email(raw: &str) -> NormalizedEmail {
    NormalizedEmail(raw.trim().to_lowercase())
}

pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local_part, domain)) = email.split_once('@') else {
        return false;
    };
    !domain.contains('@') && is_valid_local_part(local_part) && is_valid_domain(domain)
}

fn is_valid_local_part(local_part: &str) -> bool {
    !local_part.is_empty()
        && local_part.len() <= MAX_LOCAL_PART_LEN
        && !local_part.starts_with('.')
        && !local_part.ends_with('.')
        && !local_part.contains("..")
        && local_part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
