//! Ordered keyword rules for complaint classification.
//!
//! Rules are evaluated top to bottom and the first match wins, so the order
//! encodes domain judgment: a complaint mentioning both repairs and an
//! eviction notice is a maintenance dispute. The last rule is always an
//! unconditional default.

use serde::{Deserialize, Serialize};
use smartdispute_core::IssueCategory;

use crate::TriageError;

/// Built-in rule order: (keywords, category). Keywords are lower-case.
const BUILTIN_RULES: &[(&[&str], IssueCategory)] = &[
    (&["repairs", "maintenance"], IssueCategory::MaintenanceDispute),
    (&["eviction", "notice"], IssueCategory::Eviction),
    (&["discrimination"], IssueCategory::HumanRightsComplaint),
    (&["deposit"], IssueCategory::SecurityDepositDispute),
];

/// Category produced when no keyword rule matches.
pub const DEFAULT_CATEGORY: IssueCategory = IssueCategory::GeneralHousingIssue;

/// Condition under which a rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Any keyword occurs as a substring of the case-folded text.
    AnyKeyword(Vec<String>),
    /// Always matches. Only valid as the final rule.
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub predicate: Predicate,
    pub category: IssueCategory,
}

impl Rule {
    pub fn keywords(keywords: &[&str], category: IssueCategory) -> Self {
        Self {
            predicate: Predicate::AnyKeyword(keywords.iter().map(|k| k.to_string()).collect()),
            category,
        }
    }

    pub fn default_to(category: IssueCategory) -> Self {
        Self {
            predicate: Predicate::Always,
            category,
        }
    }
}

/// Validated, ordered list of rules ending in an unconditional default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
    #[serde(skip)]
    default: IssueCategory,
}

impl RuleSet {
    /// Validate and normalise a rule list.
    ///
    /// Keywords are trimmed and lower-cased. Fails if a keyword set is empty
    /// or contains a blank keyword, if there is no `Always` rule, or if any
    /// rule follows the first `Always` rule.
    pub fn new(rules: Vec<Rule>) -> Result<Self, TriageError> {
        let mut normalized = Vec::with_capacity(rules.len());
        let mut default = None;

        for (index, rule) in rules.into_iter().enumerate() {
            if default.is_some() {
                return Err(TriageError::UnreachableRule { index });
            }
            let predicate = match rule.predicate {
                Predicate::Always => {
                    default = Some(rule.category);
                    Predicate::Always
                }
                Predicate::AnyKeyword(keywords) => {
                    let keywords: Vec<String> = keywords
                        .iter()
                        .map(|k| k.trim().to_lowercase())
                        .collect();
                    if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                        return Err(TriageError::EmptyKeyword { index });
                    }
                    Predicate::AnyKeyword(keywords)
                }
            };
            normalized.push(Rule {
                predicate,
                category: rule.category,
            });
        }

        let default = default.ok_or(TriageError::MissingDefaultRule)?;

        Ok(Self {
            rules: normalized,
            default,
        })
    }

    /// The built-in tenant-complaint rules.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(keywords, category)| Rule::keywords(keywords, *category))
            .chain(std::iter::once(Rule::default_to(DEFAULT_CATEGORY)))
            .collect();
        Self {
            rules,
            default: DEFAULT_CATEGORY,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Category of the terminal `Always` rule.
    pub fn default_category(&self) -> IssueCategory {
        self.default
    }

    /// Categories in evaluation order.
    pub fn priority(&self) -> impl Iterator<Item = IssueCategory> + '_ {
        self.rules.iter().map(|r| r.category)
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rules = Vec::<Rule>::deserialize(deserializer)?;
        RuleSet::new(rules).map_err(serde::de::Error::custom)
    }
}
