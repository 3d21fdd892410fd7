// SPDX-License-Identifier: Apache-2.0

use crate::messages;
use bijux_contacts_model::{Contact, ContactInput, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_MAX_LEN: usize = 254;
pub const EMAIL_LOCAL_MAX_LEN: usize = 64;
pub const EMAIL_DOMAIN_MAX_LEN: usize = 254;
pub const EMAIL_LABEL_MAX_LEN: usize = 63;

// Atom characters plus letters outside ASCII, one dot-separated part at a time.
const EMAIL_LOCAL_PART_PATTERN: &str = r"^[-A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+$";
const EMAIL_LABEL_PATTERN: &str = r"^[A-Za-z0-9\x{A1}-\x{FFFF}]([-A-Za-z0-9\x{A1}-\x{FFFF}]*[A-Za-z0-9\x{A1}-\x{FFFF}])?$";
const EMAIL_TLD_PATTERN: &str = r"^([A-Za-z\x{A1}-\x{A8}\x{AA}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}|[Xx][Nn][-A-Za-z0-9]{2,})$";
// Indonesian mobile numbers: +62/62/0 prefix, an 8xx operator code, then
// 5 to 11 ASCII digits (whitespace allowed).
const ID_MOBILE_PATTERN: &str =
    r"^(\+?62|0)8(1[123456789]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[123456789])([\s?|0-9]{5,11})$";

static EMAIL_LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_LOCAL_PART_PATTERN).expect("email local-part pattern"));
static EMAIL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_LABEL_PATTERN).expect("email label pattern"));
static EMAIL_TLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_TLD_PATTERN).expect("email tld pattern"));
static ID_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID_MOBILE_PATTERN).expect("id-ID mobile pattern"));

fn is_fullwidth_ascii(c: char) -> bool {
    ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Address check with the usual email-form defaults: non-ASCII letters are
/// allowed in the local part and domain, the domain needs at least two
/// labels and an alphabetic (or `xn`) TLD, and the whole address is at most
/// 254 UTF-16 units.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.encode_utf16().count() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LEN {
        return false;
    }
    if domain.is_empty() || domain.len() > EMAIL_DOMAIN_MAX_LEN {
        return false;
    }
    if !local.split('.').all(|part| EMAIL_LOCAL_PART.is_match(part)) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        label.len() <= EMAIL_LABEL_MAX_LEN
            && !label.chars().any(is_fullwidth_ascii)
            && EMAIL_LABEL.is_match(label)
    });
    let tld = labels[labels.len() - 1];
    labels_ok && !tld.chars().any(char::is_whitespace) && EMAIL_TLD.is_match(tld)
}

#[must_use]
pub fn is_valid_id_mobile_phone(value: &str) -> bool {
    ID_MOBILE.is_match(value)
}

/// What the rules may consult besides the payload itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Existing contact carrying the requested name, if any.
    pub duplicate: Option<&'a Contact>,
    /// Record being replaced; `None` on create.
    pub current: Option<&'a Contact>,
}

impl<'a> ValidationContext<'a> {
    #[must_use]
    pub fn for_create(duplicate: Option<&'a Contact>) -> Self {
        Self {
            duplicate,
            current: None,
        }
    }

    #[must_use]
    pub fn for_update(current: &'a Contact, duplicate: Option<&'a Contact>) -> Self {
        Self {
            duplicate,
            current: Some(current),
        }
    }
}

pub type ContactRule = fn(&ContactInput, &ValidationContext<'_>) -> Option<ValidationError>;

/// Rules run in this order and all of them run; messages come back in the
/// same order.
pub const CONTACT_RULES: &[ContactRule] = &[name_present, name_unique, email_format, phone_format];

pub fn validate_contact(
    input: &ContactInput,
    ctx: &ValidationContext<'_>,
) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = CONTACT_RULES
        .iter()
        .filter_map(|rule| rule(input, ctx))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn name_present(input: &ContactInput, _ctx: &ValidationContext<'_>) -> Option<ValidationError> {
    input
        .nama
        .trim()
        .is_empty()
        .then(|| ValidationError::new(messages::NAME_REQUIRED))
}

fn name_unique(_input: &ContactInput, ctx: &ValidationContext<'_>) -> Option<ValidationError> {
    let duplicate = ctx.duplicate?;
    // Keeping one's own name on update is not a conflict.
    if ctx
        .current
        .is_some_and(|current| current.id == duplicate.id || current.nama == duplicate.nama)
    {
        return None;
    }
    Some(ValidationError::new(messages::NAME_TAKEN))
}

fn email_format(input: &ContactInput, _ctx: &ValidationContext<'_>) -> Option<ValidationError> {
    (!is_valid_email(&input.email)).then(|| ValidationError::new(messages::EMAIL_INVALID))
}

fn phone_format(input: &ContactInput, _ctx: &ValidationContext<'_>) -> Option<ValidationError> {
    (!is_valid_id_mobile_phone(&input.no_hp)).then(|| ValidationError::new(messages::PHONE_INVALID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for pattern in [
            EMAIL_LOCAL_PART_PATTERN,
            EMAIL_LABEL_PATTERN,
            EMAIL_TLD_PATTERN,
            ID_MOBILE_PATTERN,
        ] {
            assert!(Regex::new(pattern).is_ok(), "{pattern}");
        }
    }

    #[test]
    fn email_accepts_common_addresses() {
        for ok in [
            "alice@example.com",
            "a.b+tag@sub.example.co.id",
            "x_y-z@mail-server.org",
            "o'neil@example.ie",
            "user@xn--80ak6aa92e.com",
            "josé@example.com",
            "user@bücher.de",
            "用户@例子.中国",
        ] {
            assert!(is_valid_email(ok), "{ok}");
        }
    }

    #[test]
    fn email_length_is_capped_for_the_whole_address() {
        let label = "d".repeat(EMAIL_LABEL_MAX_LEN);
        let domain = format!("{label}.{label}.{label}.com");
        let fits = format!("{}@{domain}", "a".repeat(50));
        let too_long = format!("{}@{domain}", "a".repeat(EMAIL_LOCAL_MAX_LEN));
        assert!(fits.len() <= EMAIL_MAX_LEN);
        assert!(too_long.len() > EMAIL_MAX_LEN);
        assert!(is_valid_email(&fits));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        let long_local = format!("{}@example.com", "a".repeat(EMAIL_LOCAL_MAX_LEN + 1));
        let long_label = format!("a@{}.com", "b".repeat(EMAIL_LABEL_MAX_LEN + 1));
        for bad in [
            "",
            "not-an-email",
            "@example.com",
            "alice@",
            "alice@localhost",
            "alice@example.c",
            "alice@example.123",
            "al ice@example.com",
            ".alice@example.com",
            "alice.@example.com",
            "al..ice@example.com",
            "alice@-example.com",
            "alice@example-.com",
            "alice@exa_mple.com",
            "alice@example..com",
            "user@\u{FF45}xample.com",
            "user@example.co m",
            long_local.as_str(),
            long_label.as_str(),
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn indonesian_mobile_numbers_follow_operator_prefixes() {
        for ok in [
            "081234567890",
            "+6281234567890",
            "6281234567890",
            "085212345",
            "0878 1234 5678",
        ] {
            assert!(is_valid_id_mobile_phone(ok), "{ok}");
        }
        for bad in [
            "",
            "12345",
            "081012345678",
            "0812345",
            "08123456789012345",
            "+1 415 555 0100",
            "0812abc45678",
            "0812\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}",
            "0812\u{FF11}\u{FF12}\u{FF13}\u{FF14}\u{FF15}\u{FF16}\u{FF17}\u{FF18}",
        ] {
            assert!(!is_valid_id_mobile_phone(bad), "{bad}");
        }
    }
}
