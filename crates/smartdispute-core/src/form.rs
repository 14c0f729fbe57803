//! Legal form codes for Ontario tribunals and family court.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFormIdError;

/// A jurisdiction-specific legal form.
///
/// Serialises as its printed code (`"T6"`, `"HRTO Form 1"`, ...) so that
/// configuration files and template names use the same spelling tenants see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FormId {
    /// LTB T6: Tenant Application about Maintenance.
    T6,
    /// LTB T2: Application about Tenant Rights.
    T2,
    /// Small-claims / tenant rights alternate to T2.
    S2,
    /// Human Rights Tribunal of Ontario application.
    HrtoForm1,
    /// LTB T1: Tenant Application for a Rebate of Money Owed.
    LtbT1,
    /// Catch-all Landlord and Tenant Board application.
    LtbGeneral,
    /// Family court parenting affidavit.
    Form35_1,
}

impl FormId {
    /// Every form, in declaration order.
    pub const ALL: [FormId; 7] = [
        Self::T6,
        Self::T2,
        Self::S2,
        Self::HrtoForm1,
        Self::LtbT1,
        Self::LtbGeneral,
        Self::Form35_1,
    ];

    /// Printed form code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::T6 => "T6",
            Self::T2 => "T2",
            Self::S2 => "S2",
            Self::HrtoForm1 => "HRTO Form 1",
            Self::LtbT1 => "LTB T1",
            Self::LtbGeneral => "LTB General Application",
            Self::Form35_1 => "Form 35.1",
        }
    }

    /// Extra spellings accepted by [`FromStr`], already normalised.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::LtbGeneral => &["ltbgeneral"],
            Self::Form35_1 => &["35.1"],
            _ => &[],
        }
    }
}

/// Lowercase and drop everything but ASCII alphanumerics and `.`, so
/// `"HRTO-Form-1"`, `"hrto form 1"` and `"HRTO Form 1"` compare equal.
fn normalize_code(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for FormId {
    type Err = ParseFormIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_code(s);
        if wanted.is_empty() {
            return Err(ParseFormIdError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|form| {
                normalize_code(form.code()) == wanted || form.aliases().contains(&wanted.as_str())
            })
            .ok_or_else(|| ParseFormIdError(s.to_string()))
    }
}

impl TryFrom<String> for FormId {
    type Error = ParseFormIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormId> for &'static str {
    fn from(form: FormId) -> Self {
        form.code()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
