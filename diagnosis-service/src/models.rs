use catalog_service::MedicineRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Input label that marks a report as severe
pub const SEVERE_LABEL: &str = "Severe";

/// What the user told the symptom checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub symptoms: BTreeSet<String>,
    /// Duration label, e.g. "1-3 days"
    pub duration: String,
    /// Severity label, e.g. "Severe"
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SymptomReport {
    pub fn new<I, S>(symptoms: I, duration: impl Into<String>, severity: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            duration: duration.into(),
            severity: severity.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        self
    }

    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    pub fn is_severe(&self) -> bool {
        self.severity == SEVERE_LABEL
    }

    /// Canonical text form of the report; equal reports give equal fingerprints
    pub fn fingerprint(&self) -> String {
        let mut parts: Vec<&str> = self.symptoms.iter().map(String::as_str).collect();
        parts.push(&self.duration);
        parts.push(&self.severity);
        parts.push(self.notes.as_deref().unwrap_or_default());
        parts.join("\u{1f}")
    }
}

/// Severity tag attached to a diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        };
        f.write_str(label)
    }
}

/// Outcome of one classifier run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub id: String,
    pub condition: String,
    pub description: String,
    /// Percentage, 0-100
    pub confidence: u8,
    pub severity: Severity,
    pub recommended_medicines: Vec<MedicineRecord>,
    pub advice: String,
    pub see_doctor: bool,
}

/// Summary of a past diagnosis kept in the user's medical history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub recommended_medicines: Vec<String>,
}

impl DiagnosisRecord {
    pub fn summarize(report: &SymptomReport, result: &DiagnosisResult, date: DateTime<Utc>) -> Self {
        Self {
            id: result.id.clone(),
            date,
            symptoms: report.symptoms.iter().cloned().collect(),
            diagnosis: result.condition.clone(),
            recommended_medicines: result
                .recommended_medicines
                .iter()
                .map(|m| m.id.clone())
                .collect(),
        }
    }
}
