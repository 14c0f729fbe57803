//! Profile input from `--profile <file>` and `--set key=value` flags.

use std::path::Path;

use anyhow::Context;
use smartdispute_core::{ProfileField, UserProfile};

/// Read the profile file (if any), then apply `--set` overrides in order.
pub fn load_profile(path: Option<&Path>, sets: &[String]) -> anyhow::Result<UserProfile> {
    let mut profile = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing profile {}", path.display()))?
        }
        None => UserProfile::new(),
    };

    for set in sets {
        let (key, value) = parse_set(set)?;
        let field: ProfileField = key.parse()?;
        profile
            .set(field, value)
            .with_context(|| format!("--set {set}"))?;
    }

    Ok(profile)
}

fn parse_set(s: &str) -> anyhow::Result<(&str, &str)> {
    s.split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sets_without_file() {
        let profile = load_profile(
            None,
            &["name=Ada Tenant".to_string(), "remedy=rent abatement".to_string()],
        )
        .unwrap();
        assert_eq!(profile.get(ProfileField::Name), Some("Ada Tenant"));
        assert_eq!(profile.get(ProfileField::Remedy), Some("rent abatement"));
    }

    #[test]
    fn sets_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Ada", "address": "9 Queen St"}}"#).unwrap();

        let profile = load_profile(Some(file.path()), &["name=Grace".to_string()]).unwrap();
        assert_eq!(profile.get(ProfileField::Name), Some("Grace"));
        assert_eq!(profile.get(ProfileField::Address), Some("9 Queen St"));
    }

    #[test]
    fn value_may_contain_equals() {
        let profile = load_profile(None, &["summary=rent=too high".to_string()]).unwrap();
        assert_eq!(profile.get(ProfileField::Summary), Some("rent=too high"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(load_profile(None, &["name".to_string()]).is_err());
        assert!(load_profile(None, &["colour=red".to_string()]).is_err());
        assert!(load_profile(None, &["date=tomorrow".to_string()]).is_err());
    }

    #[test]
    fn rejects_unknown_field_in_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"landlord": "Acme"}}"#).unwrap();
        assert!(load_profile(Some(file.path()), &[]).is_err());
    }
}
