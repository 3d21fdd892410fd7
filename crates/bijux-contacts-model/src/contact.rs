// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl ValidationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Numeric contact identifier.
///
/// Ids are assigned by the store as `max + 1` and are never negative in
/// practice, but the wire format is a plain JSON integer so the full `i64`
/// range is accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The following id, or `None` once the id space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Parses an id the way a path segment is compared against stored ids:
    /// surrounding whitespace is ignored and any spelling of an integral
    /// number (`"3"`, `"03"`, `"+3"`, `"3.0"`, `"3e0"`, `"0x3"`, `"0o3"`,
    /// `"0b11"`) denotes that integer.
    pub fn parse_loose(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::new("contact id must not be empty"));
        }
        if let Some(value) = parse_radix_prefixed(s) {
            return value.map(Self);
        }
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self(value));
        }
        let value = s
            .parse::<f64>()
            .map_err(|_| ValidationError(format!("contact id is not a number: {s}")))?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ValidationError(format!(
                "contact id is not an integer: {s}"
            )));
        }
        if value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(ValidationError(format!("contact id out of range: {s}")));
        }
        Ok(Self(value as i64))
    }
}

/// `0x`/`0o`/`0b` literals (unsigned, prefix case-insensitive). `None` when
/// `s` carries no such prefix.
fn parse_radix_prefixed(s: &str) -> Option<Result<i64, ValidationError>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1].to_ascii_lowercase() {
        b'x' => 16,
        b'o' => 8,
        b'b' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(Err(ValidationError(format!(
            "contact id is not a number: {s}"
        ))));
    }
    Some(
        i64::from_str_radix(digits, radix)
            .map_err(|_| ValidationError(format!("contact id is not a number: {s}"))),
    )
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_loose(s)
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Request payload for create and update.
///
/// Absent fields default to empty strings so they surface as validation
/// messages instead of body parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub nama: String,
    #[serde(rename = "noHP")]
    pub no_hp: String,
    pub email: String,
}

impl ContactInput {
    #[must_use]
    pub fn new(nama: impl Into<String>, no_hp: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nama: nama.into(),
            no_hp: no_hp.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub nama: String,
    #[serde(rename = "noHP")]
    pub no_hp: String,
    pub email: String,
}

impl Contact {
    /// Builds a full record from a payload; every field of `input` replaces
    /// the previous value wholesale.
    #[must_use]
    pub fn new(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            nama: input.nama,
            no_hp: input.no_hp,
            email: input.email,
        }
    }
}
