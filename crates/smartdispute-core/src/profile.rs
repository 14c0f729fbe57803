//! Caller-supplied facts about a user's case.
//!
//! A [`UserProfile`] is validated once at the boundary (unknown keys and
//! malformed dates are rejected) and then passed explicitly to the
//! autofiller, which never fails on missing fields.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ProfileError;

/// Semantic profile field, independent of any particular form's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Address,
    Summary,
    Message,
    Date,
    Opponent,
    Remedy,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        Self::Name,
        Self::Address,
        Self::Summary,
        Self::Message,
        Self::Date,
        Self::Opponent,
        Self::Remedy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Summary => "summary",
            Self::Message => "message",
            Self::Date => "date",
            Self::Opponent => "opponent",
            Self::Remedy => "remedy",
        }
    }
}

impl FromStr for ProfileField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ProfileError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated set of known facts about the user's case.
///
/// Values are trimmed; blank values are treated as absent. `date`, when
/// present, is a valid ISO `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    values: BTreeMap<ProfileField, String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Blank values clear the field.
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Result<Self, ProfileError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Set a field, validating its value.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> Result<(), ProfileError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.values.remove(&field);
            return Ok(());
        }
        if field == ProfileField::Date {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
                ProfileError::InvalidDate {
                    value: trimmed.to_string(),
                }
            })?;
        }
        self.values.insert(field, trimmed.to_string());
        Ok(())
    }

    /// Build a profile from string-keyed pairs, e.g. a session dictionary.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut profile = Self::new();
        for (key, value) in pairs {
            let field: ProfileField = key.as_ref().parse()?;
            profile.set(field, value)?;
        }
        Ok(profile)
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        UserProfile::from_pairs(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_accepts_known_keys() {
        let profile =
            UserProfile::from_pairs([("name", "Ada Tenant"), ("Address", "9 Queen St")]).unwrap();
        assert_eq!(profile.get(ProfileField::Name), Some("Ada Tenant"));
        assert_eq!(profile.get(ProfileField::Address), Some("9 Queen St"));
        assert_eq!(profile.get(ProfileField::Remedy), None);
    }

    #[test]
    fn from_pairs_rejects_unknown_keys() {
        let err = UserProfile::from_pairs([("nickname", "Ada")]).unwrap_err();
        assert_eq!(err, ProfileError::UnknownField("nickname".to_string()));
    }

    #[test]
    fn blank_values_are_absent() {
        let profile = UserProfile::from_pairs([("summary", "   "), ("message", "leak")]).unwrap();
        assert_eq!(profile.get(ProfileField::Summary), None);
        assert_eq!(profile.get(ProfileField::Message), Some("leak"));
    }

    #[test]
    fn blank_value_clears_existing_field() {
        let mut profile = UserProfile::new().with(ProfileField::Opponent, "Acme").unwrap();
        profile.set(ProfileField::Opponent, "").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn values_are_trimmed() {
        let profile = UserProfile::new()
            .with(ProfileField::Name, "  Ada  ")
            .unwrap();
        assert_eq!(profile.get(ProfileField::Name), Some("Ada"));
    }

    #[test]
    fn date_must_be_iso() {
        assert!(UserProfile::new().with(ProfileField::Date, "2024-02-29").is_ok());
        let err = UserProfile::new()
            .with(ProfileField::Date, "2023-02-29")
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidDate {
                value: "2023-02-29".to_string()
            }
        );
        assert!(UserProfile::new().with(ProfileField::Date, "March 3").is_err());
    }

    #[test]
    fn deserialises_with_validation() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Ada", "date": "2025-01-15"}"#).unwrap();
        assert_eq!(profile.get(ProfileField::Date), Some("2025-01-15"));

        let bad = serde_json::from_str::<UserProfile>(r#"{"colour": "red"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn serialises_with_field_ids() {
        let profile = UserProfile::new().with(ProfileField::Remedy, "rent abatement").unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"remedy":"rent abatement"}"#);
    }
}
