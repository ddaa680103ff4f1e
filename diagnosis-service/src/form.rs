use crate::error::{DiagnosisError, FormResult};
use crate::models::SymptomReport;

/// Symptoms offered for each body part, in form order
pub const BODY_PART_SYMPTOMS: [(&str, &[&str]); 5] = [
    ("Head", &["Headache", "Dizziness", "Blurred vision", "Earache", "Sore throat"]),
    ("Chest", &["Chest pain", "Shortness of breath", "Cough", "Heart palpitations"]),
    ("Abdomen", &["Stomach pain", "Nausea", "Vomiting", "Diarrhea", "Constipation"]),
    ("Limbs", &["Joint pain", "Muscle pain", "Swelling", "Numbness", "Weakness"]),
    ("General", &["Fever", "Fatigue", "Sweating", "Chills", "Loss of appetite"]),
];

pub const DURATION_OPTIONS: [&str; 5] = [
    "Less than a day",
    "1-3 days",
    "4-7 days",
    "More than a week",
    "More than a month",
];

pub const SEVERITY_OPTIONS: [&str; 3] = ["Mild", "Moderate", "Severe"];

pub fn symptoms_for(body_part: &str) -> Option<&'static [&'static str]> {
    BODY_PART_SYMPTOMS
        .iter()
        .find(|(part, _)| *part == body_part)
        .map(|(_, symptoms)| *symptoms)
}

/// Body part whose list contains `symptom`
pub fn body_part_of(symptom: &str) -> Option<&'static str> {
    BODY_PART_SYMPTOMS
        .iter()
        .find(|(_, symptoms)| symptoms.contains(&symptom))
        .map(|(part, _)| *part)
}

/// Form label for a free-typed symptom, ignoring case and surrounding space
pub fn canonical_symptom(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    BODY_PART_SYMPTOMS
        .iter()
        .flat_map(|(_, symptoms)| symptoms.iter().copied())
        .find(|symptom| symptom.eq_ignore_ascii_case(wanted))
}

/// Form label for a free-typed body part
pub fn canonical_body_part(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    BODY_PART_SYMPTOMS
        .iter()
        .map(|(part, _)| *part)
        .find(|part| part.eq_ignore_ascii_case(wanted))
}

/// Steps of the symptom form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormStep {
    BodyParts = 1,
    Symptoms = 2,
    Details = 3,
}

impl FormStep {
    pub fn next(self) -> Option<FormStep> {
        match self {
            FormStep::BodyParts => Some(FormStep::Symptoms),
            FormStep::Symptoms => Some(FormStep::Details),
            FormStep::Details => None,
        }
    }
}

/// The multi-step symptom form. Selections toggle, like checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomForm {
    body_parts: Vec<String>,
    symptoms: Vec<String>,
    duration: Option<String>,
    severity: Option<String>,
    notes: String,
}

impl SymptomForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_parts(&self) -> &[String] {
        &self.body_parts
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn toggle_body_part(&mut self, body_part: &str) -> FormResult<()> {
        if symptoms_for(body_part).is_none() {
            return Err(DiagnosisError::UnknownOption {
                field: "body part",
                value: body_part.to_string(),
            });
        }
        toggle(&mut self.body_parts, body_part);
        Ok(())
    }

    pub fn toggle_symptom(&mut self, symptom: &str) -> FormResult<()> {
        if body_part_of(symptom).is_none() {
            return Err(DiagnosisError::UnknownOption {
                field: "symptom",
                value: symptom.to_string(),
            });
        }
        toggle(&mut self.symptoms, symptom);
        Ok(())
    }

    pub fn set_duration(&mut self, duration: &str) -> FormResult<()> {
        self.duration = Some(pick(&DURATION_OPTIONS, "duration", duration)?);
        Ok(())
    }

    pub fn set_severity(&mut self, severity: &str) -> FormResult<()> {
        self.severity = Some(pick(&SEVERITY_OPTIONS, "severity", severity)?);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Symptoms on offer for the currently selected body parts
    pub fn available_symptoms(&self) -> Vec<&'static str> {
        self.body_parts
            .iter()
            .filter_map(|part| symptoms_for(part))
            .flat_map(|symptoms| symptoms.iter().copied())
            .collect()
    }

    pub fn validate_step(&self, step: FormStep) -> FormResult<()> {
        match step {
            FormStep::BodyParts if self.body_parts.is_empty() => Err(DiagnosisError::NoBodyPart),
            FormStep::Symptoms if self.symptoms.is_empty() => Err(DiagnosisError::NoSymptom),
            FormStep::Details if self.duration.is_none() => Err(DiagnosisError::MissingDuration),
            FormStep::Details if self.severity.is_none() => Err(DiagnosisError::MissingSeverity),
            _ => Ok(()),
        }
    }

    /// Validate every step in order and build the report
    pub fn submit(&self) -> FormResult<SymptomReport> {
        let mut step = Some(FormStep::BodyParts);
        while let Some(current) = step {
            self.validate_step(current)?;
            step = current.next();
        }

        let report = SymptomReport::new(
            self.symptoms.iter().cloned(),
            self.duration.clone().unwrap_or_default(),
            self.severity.clone().unwrap_or_default(),
        );
        Ok(report.with_notes(self.notes.clone()))
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(pos) = selection.iter().position(|v| v == value) {
        selection.remove(pos);
    } else {
        selection.push(value.to_string());
    }
}

fn pick(options: &[&str], field: &'static str, value: &str) -> FormResult<String> {
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(value.trim()))
        .map(|option| (*option).to_string())
        .ok_or_else(|| DiagnosisError::UnknownOption {
            field,
            value: value.to_string(),
        })
}
