//! User domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::MAX_USER_ID_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Store-issued user identifier.
///
/// Ids are decimal sequence numbers rendered as strings. They are handed out
/// by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Build the id for a sequence number.
    pub fn from_sequence(seq: u64) -> Self {
        UserId(seq.to_string())
    }

    /// Parse an externally supplied id.
    ///
    /// Only strings the store could have issued are accepted: the canonical
    /// decimal rendering of a `u64`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() {
            return Err(DomainError::invalid_id("id must not be empty"));
        }
        if raw.len() > MAX_USER_ID_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "id must be at most {} digits",
                MAX_USER_ID_LENGTH
            )));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "`{}` is not a numeric user id",
                raw
            )));
        }

        // Must be exactly what `from_sequence` renders: fits u64, no leading zeros
        let seq: u64 = raw
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("`{}` is out of range", raw)))?;
        if seq.to_string() != raw {
            return Err(DomainError::invalid_id(format!(
                "`{}` is not in canonical form",
                raw
            )));
        }

        Ok(UserId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: u32,
    pub is_married: bool,
}

/// Validated input for creating a user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    /// Display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Age in years
    #[validate(range(min = 0, message = "age must be a non-negative integer"))]
    pub age: i32,
    /// Marital status
    pub is_married: bool,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i32, is_married: bool) -> Self {
        Self {
            name: name.into(),
            age,
            is_married,
        }
    }

    /// Run field validation, reporting the first failing field.
    pub fn check(&self) -> DomainResult<()> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));

            fields
                .into_iter()
                .next()
                .map(|(field, errs)| {
                    let reason = errs
                        .first()
                        .and_then(|e| e.message.as_ref())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "invalid value".to_string());
                    DomainError::validation(field.to_string(), reason)
                })
                .unwrap_or_else(|| DomainError::validation("input", "validation failed"))
        })
    }

    /// Turn validated input into a stored record with the given id.
    pub fn into_user(self, id: UserId) -> DomainResult<User> {
        self.check()?;
        let age = u32::try_from(self.age)
            .map_err(|_| DomainError::validation("age", "age must be a non-negative integer"))?;

        Ok(User {
            id,
            name: self.name,
            age,
            is_married: self.is_married,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_sequence() {
        assert_eq!(UserId::from_sequence(5).as_str(), "5");
    }

    #[test]
    fn test_user_id_parse_accepts_digits() {
        assert_eq!(UserId::parse("42").unwrap(), UserId::from_sequence(42));
        assert_eq!(UserId::parse("0").unwrap(), UserId::from_sequence(0));
        assert_eq!(
            UserId::parse("18446744073709551615").unwrap(),
            UserId::from_sequence(u64::MAX)
        );
    }

    #[test]
    fn test_user_id_parse_rejects_malformed() {
        assert!(matches!(UserId::parse(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(UserId::parse("abc"), Err(DomainError::InvalidId(_))));
        assert!(matches!(UserId::parse("-1"), Err(DomainError::InvalidId(_))));
        assert!(matches!(UserId::parse(" 1"), Err(DomainError::InvalidId(_))));
        assert!(matches!(
            UserId::parse("123456789012345678901"),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(UserId::parse("01"), Err(DomainError::InvalidId(_))));
        assert!(matches!(
            UserId::parse("99999999999999999999"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn test_new_user_valid() {
        let user = NewUser::new("Alex", 5, false)
            .into_user(UserId::from_sequence(5))
            .unwrap();

        assert_eq!(user.id.as_str(), "5");
        assert_eq!(user.name, "Alex");
        assert_eq!(user.age, 5);
        assert!(!user.is_married);
    }

    #[test]
    fn test_new_user_zero_age_allowed() {
        assert!(NewUser::new("Baby", 0, false).check().is_ok());
    }

    #[test]
    fn test_new_user_empty_name() {
        let err = NewUser::new("", 5, false).check().unwrap_err();
        assert_eq!(err, DomainError::validation("name", "name must not be empty"));
    }

    #[test]
    fn test_new_user_negative_age() {
        let err = NewUser::new("Alex", -1, false).check().unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "age"));
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = NewUser::new("Ginny", 6, false)
            .into_user(UserId::from_sequence(4))
            .unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "4", "name": "Ginny", "age": 6, "isMarried": false})
        );
    }
}
