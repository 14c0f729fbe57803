//! Issue category → recommended legal form.
//!
//! The table must cover every [`IssueCategory`]. A gap means the enum and
//! the table have drifted apart, which is reported as
//! [`TriageError::MissingFormMapping`] when the recommender is built rather
//! than papered over with a default form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smartdispute_core::{FormId, IssueCategory};
use tracing::debug;

use crate::TriageError;

/// A primary form plus any acceptable alternates, in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary: FormId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<FormId>,
}

impl Recommendation {
    pub fn single(primary: FormId) -> Self {
        Self {
            primary,
            alternates: Vec::new(),
        }
    }

    pub fn with_alternates(primary: FormId, alternates: &[FormId]) -> Self {
        Self {
            primary,
            alternates: alternates.to_vec(),
        }
    }

    /// Primary first, then alternates.
    pub fn forms(&self) -> impl Iterator<Item = FormId> + '_ {
        std::iter::once(self.primary).chain(self.alternates.iter().copied())
    }
}

/// Renders as `"T2 or S2"`.
impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.forms().map(|form| form.code()).collect();
        f.write_str(&codes.join(" or "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTableEntry {
    pub category: IssueCategory,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Declarative category → recommendation table, not yet checked for totality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormTable {
    pub entries: Vec<FormTableEntry>,
}

impl FormTable {
    pub fn builtin() -> Self {
        use FormId::*;
        use IssueCategory::*;

        let entries = vec![
            (MaintenanceDispute, Recommendation::single(T6)),
            (Eviction, Recommendation::with_alternates(T2, &[S2])),
            (HumanRightsComplaint, Recommendation::single(HrtoForm1)),
            (SecurityDepositDispute, Recommendation::single(LtbT1)),
            (GeneralHousingIssue, Recommendation::single(LtbGeneral)),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(category, recommendation)| FormTableEntry {
                    category,
                    recommendation,
                })
                .collect(),
        }
    }
}

/// Total category → recommendation lookup.
#[derive(Debug, Clone)]
pub struct Recommender {
    table: BTreeMap<IssueCategory, Recommendation>,
}

impl Default for Recommender {
    fn default() -> Self {
        // The built-in table covers every category; see `builtin_table_is_total`.
        let table = FormTable::builtin()
            .entries
            .into_iter()
            .map(|e| (e.category, e.recommendation))
            .collect();
        Self { table }
    }
}

impl Recommender {
    /// Build from a table, failing on duplicate or missing categories.
    pub fn new(table: FormTable) -> Result<Self, TriageError> {
        let mut map = BTreeMap::new();
        for entry in table.entries {
            if map.insert(entry.category, entry.recommendation).is_some() {
                return Err(TriageError::DuplicateFormMapping(entry.category));
            }
        }
        if let Some(missing) = IssueCategory::ALL.iter().find(|c| !map.contains_key(c)) {
            return Err(TriageError::MissingFormMapping(*missing));
        }
        Ok(Self { table: map })
    }

    /// Look up the recommendation for a category.
    pub fn recommend(&self, category: IssueCategory) -> Result<Recommendation, TriageError> {
        let recommendation = self
            .table
            .get(&category)
            .cloned()
            .ok_or(TriageError::MissingFormMapping(category))?;
        debug!(
            category = category.as_str(),
            primary = recommendation.primary.code(),
            alternates = recommendation.alternates.len(),
            "form recommended"
        );
        Ok(recommendation)
    }
}

/// Recommend with the built-in table.
pub fn recommend(category: IssueCategory) -> Result<Recommendation, TriageError> {
    Recommender::default().recommend(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_total() {
        let recommender = Recommender::new(FormTable::builtin()).unwrap();
        for category in IssueCategory::ALL {
            assert!(
                recommender.recommend(category).is_ok(),
                "no recommendation for {category:?}"
            );
        }
    }

    #[test]
    fn builtin_mappings() {
        assert_eq!(recommend(IssueCategory::MaintenanceDispute).unwrap().primary, FormId::T6);
        assert_eq!(recommend(IssueCategory::HumanRightsComplaint).unwrap().primary, FormId::HrtoForm1);
        assert_eq!(recommend(IssueCategory::SecurityDepositDispute).unwrap().primary, FormId::LtbT1);
        assert_eq!(recommend(IssueCategory::GeneralHousingIssue).unwrap().primary, FormId::LtbGeneral);
    }

    #[test]
    fn eviction_has_primary_and_alternate() {
        let rec = recommend(IssueCategory::Eviction).unwrap();
        assert_eq!(rec.primary, FormId::T2);
        assert_eq!(rec.alternates, vec![FormId::S2]);
        assert_eq!(rec.to_string(), "T2 or S2");
    }

    #[test]
    fn single_form_display() {
        assert_eq!(Recommendation::single(FormId::HrtoForm1).to_string(), "HRTO Form 1");
    }

    #[test]
    fn missing_category_fails_loudly() {
        let mut table = FormTable::builtin();
        table.entries.retain(|e| e.category != IssueCategory::SecurityDepositDispute);
        let err = Recommender::new(table).unwrap_err();
        assert!(matches!(
            err,
            TriageError::MissingFormMapping(IssueCategory::SecurityDepositDispute)
        ));
    }

    #[test]
    fn duplicate_category_rejected() {
        let mut table = FormTable::builtin();
        table.entries.push(FormTableEntry {
            category: IssueCategory::Eviction,
            recommendation: Recommendation::single(FormId::S2),
        });
        let err = Recommender::new(table).unwrap_err();
        assert!(matches!(err, TriageError::DuplicateFormMapping(IssueCategory::Eviction)));
    }

    #[test]
    fn table_deserialises_flat_entries() {
        let json = r#"[
            {"category": "eviction", "primary": "S2", "alternates": ["T2"]},
            {"category": "maintenance_dispute", "primary": "T6"}
        ]"#;
        let table: FormTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.entries[0].recommendation.alternates, vec![FormId::T2]);
        assert!(table.entries[1].recommendation.alternates.is_empty());
    }

    #[test]
    fn recommend_is_idempotent() {
        let recommender = Recommender::default();
        assert_eq!(
            recommender.recommend(IssueCategory::Eviction).unwrap(),
            recommender.recommend(IssueCategory::Eviction).unwrap()
        );
    }
}
