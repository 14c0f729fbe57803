//! Conversational case intake.
//!
//! Builds a [`CaseProfile`] one chat message at a time, asks for whatever is
//! still missing, and links a starting form once province, issue and role
//! are all known. Profiles are values: [`CaseProfile::absorb`] returns an
//! updated copy and the caller decides where to keep it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smartdispute_core::FormId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "ON")]
    Ontario,
    #[serde(rename = "BC")]
    BritishColumbia,
}

impl Province {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ontario => "ON",
            Self::BritishColumbia => "BC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeIssue {
    Custody,
    TenantRights,
}

impl IntakeIssue {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Custody => "custody",
            Self::TenantRights => "tenant rights",
        }
    }

    /// Starting form for this issue.
    pub fn form(&self) -> FormId {
        match self {
            Self::Custody => FormId::Form35_1,
            Self::TenantRights => FormId::T6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Father,
    Mother,
    Tenant,
}

// Cue tables are checked in order; the first hit in a table wins.
const PROVINCE_CUES: &[(&[&str], Province)] = &[
    (&["ontario", "toronto"], Province::Ontario),
    (&["bc", "british columbia", "vancouver"], Province::BritishColumbia),
];

const ISSUE_CUES: &[(&[&str], IntakeIssue)] = &[
    (&["child", "children", "custody"], IntakeIssue::Custody),
    (&["eviction", "landlord"], IntakeIssue::TenantRights),
];

const ROLE_CUES: &[(&[&str], UserRole)] = &[
    (&["father", "dad"], UserRole::Father),
    (&["mother", "mom"], UserRole::Mother),
    (&["tenant"], UserRole::Tenant),
];

const URGENCY_CUES: &[&str] = &["urgent", "won't return", "danger"];

/// Cues short enough to turn up inside unrelated words ("abc", "daddy",
/// "moment"); these only match as whole words. All other cues are substrings.
const WHOLE_WORD_CUES: &[&str] = &["bc", "dad", "mom"];

static WHOLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(bc|dad|mom)\b").unwrap());

/// Link to the form generator for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLink {
    pub form: FormId,
    pub url: String,
}

/// What is known so far about a user's case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseProfile {
    pub province: Option<Province>,
    pub issue: Option<IntakeIssue>,
    pub role: Option<UserRole>,
    #[serde(default)]
    pub urgent: bool,
    /// Every message absorbed so far, space-joined.
    #[serde(default)]
    pub facts: String,
}

impl CaseProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy updated with whatever `message` reveals.
    ///
    /// Detections only overwrite earlier values when the new message matches;
    /// urgency, once set, stays set.
    pub fn absorb(&self, message: &str) -> Self {
        let text = message.to_lowercase().replace('’', "'");
        let mut next = self.clone();

        if let Some(province) = first_cue(PROVINCE_CUES, &text) {
            next.province = Some(province);
        }
        if let Some(issue) = first_cue(ISSUE_CUES, &text) {
            next.issue = Some(issue);
        }
        if let Some(role) = first_cue(ROLE_CUES, &text) {
            next.role = Some(role);
        }
        if URGENCY_CUES.iter().any(|cue| contains_cue(&text, cue)) {
            next.urgent = true;
        }

        let message = message.trim();
        if !message.is_empty() {
            if !next.facts.is_empty() {
                next.facts.push(' ');
            }
            next.facts.push_str(message);
        }

        debug!(
            province = next.province.map(|p| p.code()),
            issue = next.issue.map(|i| i.label()),
            role = ?next.role,
            urgent = next.urgent,
            "case profile updated"
        );
        next
    }

    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.issue.is_some() && self.role.is_some()
    }

    /// Questions for the facts still missing, in asking order.
    pub fn follow_up_questions(&self) -> Vec<&'static str> {
        let mut questions = Vec::new();
        if self.province.is_none() {
            questions.push("What province are you in?");
        }
        if self.issue.is_none() {
            questions.push("What legal issue are you facing?");
        }
        if self.role.is_none() {
            questions.push("Are you the tenant, parent, or other?");
        }
        questions
    }

    /// Chat reply: the outstanding questions, or a summary once complete.
    pub fn reply(&self) -> String {
        match (self.issue, self.province) {
            (Some(issue), Some(province)) if self.is_complete() => format!(
                "Thanks! You're dealing with a {} issue in {}. Let me find relevant forms and legal steps...",
                issue.label(),
                province.code()
            ),
            _ => self.follow_up_questions().join(" "),
        }
    }

    /// Starting form and generator URL, once the profile is complete.
    pub fn form_link(&self) -> Option<FormLink> {
        if !self.is_complete() {
            return None;
        }
        let form = self.issue?.form();
        let province = self.province?;
        Some(FormLink {
            form,
            url: format!(
                "/generate?form={}&province={}",
                form_urlencoded::byte_serialize(form.code().as_bytes()).collect::<String>(),
                province.code()
            ),
        })
    }
}

impl fmt::Display for CaseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = "-";
        write!(
            f,
            "province={} issue={} role={} urgent={}",
            self.province.map(|p| p.code()).unwrap_or(dash),
            self.issue.map(|i| i.label()).unwrap_or(dash),
            self.role.map(|r| format!("{r:?}").to_lowercase()).unwrap_or_else(|| dash.into()),
            self.urgent
        )
    }
}

fn first_cue<T: Copy>(table: &[(&[&str], T)], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| contains_cue(text, cue)))
        .map(|(_, value)| *value)
}

/// `text` and `cue` are both lower-case.
fn contains_cue(text: &str, cue: &str) -> bool {
    if WHOLE_WORD_CUES.contains(&cue) {
        WHOLE_WORD_RE.find_iter(text).any(|m| m.as_str() == cue)
    } else {
        text.contains(cue)
    }
}
