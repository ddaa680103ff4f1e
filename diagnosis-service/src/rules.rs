use crate::models::{Severity, SymptomReport};
use std::fmt;

/// One row of the classifier's rule table
pub struct Rule {
    pub condition: &'static str,
    pub description: &'static str,
    pub confidence: u8,
    /// Catalog ids, in recommendation order
    pub recommended: &'static [&'static str],
    pub advice: &'static str,
    applies: fn(&SymptomReport) -> bool,
    severity: fn(&SymptomReport) -> Severity,
    see_doctor: fn(&SymptomReport) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("condition", &self.condition)
            .field("confidence", &self.confidence)
            .field("recommended", &self.recommended)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub fn applies(&self, report: &SymptomReport) -> bool {
        (self.applies)(report)
    }

    pub fn severity(&self, report: &SymptomReport) -> Severity {
        (self.severity)(report)
    }

    pub fn see_doctor(&self, report: &SymptomReport) -> bool {
        (self.see_doctor)(report)
    }
}

fn cold(report: &SymptomReport) -> bool {
    report.has_symptom("Fever") && report.has_symptom("Cough")
}

fn tension_headache(report: &SymptomReport) -> bool {
    report.has_symptom("Headache") && report.duration.contains("week")
}

fn gastroenteritis(report: &SymptomReport) -> bool {
    report.has_symptom("Nausea") && report.duration.contains("day")
}

fn always(_: &SymptomReport) -> bool {
    true
}

fn never(_: &SymptomReport) -> bool {
    false
}

fn mild(_: &SymptomReport) -> Severity {
    Severity::Mild
}

fn moderate_when_severe(report: &SymptomReport) -> Severity {
    if report.is_severe() {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}

fn when_severe(report: &SymptomReport) -> bool {
    report.is_severe()
}

/// Evaluated top to bottom; the first rule that applies wins.
pub static RULES: [Rule; 3] = [
    Rule {
        condition: "Common Cold",
        description: "A viral infection of the upper respiratory tract. Rest, fluids, and over-the-counter medications can help alleviate symptoms.",
        confidence: 85,
        recommended: &["med-101", "med-102"],
        advice: "Rest, stay hydrated, and avoid spreading the infection to others. If symptoms worsen or persist for more than a week, consult a healthcare professional.",
        applies: cold,
        severity: moderate_when_severe,
        see_doctor: never,
    },
    Rule {
        condition: "Tension Headache",
        description: "Tension headaches are the most common type of headache and are often described as a feeling of pressure or tightness, like a band around the head.",
        confidence: 75,
        recommended: &["med-201"],
        advice: "Try relaxation techniques, ensure proper sleep, and stay hydrated. If headaches persist or are severe, consult a healthcare professional.",
        applies: tension_headache,
        severity: mild,
        see_doctor: never,
    },
    Rule {
        condition: "Gastroenteritis",
        description: "Inflammation of the stomach and intestines, typically resulting from a viral or bacterial infection.",
        confidence: 70,
        recommended: &["med-301", "med-302"],
        advice: "Stay hydrated, eat bland foods, and rest. If symptoms worsen or you cannot keep fluids down, seek medical attention.",
        applies: gastroenteritis,
        severity: moderate_when_severe,
        see_doctor: when_severe,
    },
];

/// Outcome when no rule in [`RULES`] applies
pub static FALLBACK: Rule = Rule {
    condition: "General Discomfort",
    description: "Based on your symptoms, you may be experiencing general discomfort that could be caused by various factors including stress, minor viral infection, or fatigue.",
    confidence: 60,
    recommended: &["med-801"],
    advice: "Rest, stay hydrated, and monitor your symptoms. If they persist or worsen, consider consulting a healthcare professional for a more accurate diagnosis.",
    applies: always,
    severity: mild,
    see_doctor: when_severe,
};

/// The rule that decides `report`
pub fn select_rule(report: &SymptomReport) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.applies(report))
        .unwrap_or(&FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fever_and_cough_beats_headache_for_a_week() {
        let report = SymptomReport::new(["Fever", "Cough", "Headache"], "More than a week", "Mild");
        assert_eq!(select_rule(&report).condition, "Common Cold");
    }

    #[test]
    fn test_headache_needs_week_duration() {
        let report = SymptomReport::new(["Headache"], "4-7 days", "Mild");
        assert_eq!(select_rule(&report).condition, "General Discomfort");

        let report = SymptomReport::new(["Headache"], "More than a week", "Mild");
        assert_eq!(select_rule(&report).condition, "Tension Headache");
    }

    #[test]
    fn test_nausea_needs_day_duration() {
        // "Less than a day" also contains "day"
        let report = SymptomReport::new(["Nausea"], "Less than a day", "Mild");
        assert_eq!(select_rule(&report).condition, "Gastroenteritis");

        let report = SymptomReport::new(["Nausea"], "More than a month", "Mild");
        assert_eq!(select_rule(&report).condition, "General Discomfort");
    }

    #[test]
    fn test_symptom_labels_are_case_sensitive() {
        let report = SymptomReport::new(["fever", "cough"], "1-3 days", "Mild");
        assert_eq!(select_rule(&report).condition, "General Discomfort");
    }

    #[test]
    fn test_fallback_is_never_in_table() {
        assert!(RULES.iter().all(|rule| rule.condition != FALLBACK.condition));
        assert!(RULES.iter().all(|rule| rule.confidence <= 100));
    }
}
