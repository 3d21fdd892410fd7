// SPDX-License-Identifier: Apache-2.0

use bijux_contacts_model::ContactId;

/// Normalizes an `:id` path segment.
///
/// A segment that cannot denote an integer can never match a stored id, so
/// callers treat `None` as "not found" rather than as a bad request.
#[must_use]
pub fn parse_contact_id(raw: &str) -> Option<ContactId> {
    ContactId::parse_loose(raw).ok()
}
