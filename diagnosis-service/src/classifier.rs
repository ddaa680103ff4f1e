use crate::models::{DiagnosisResult, SymptomReport};
use crate::rules::{self, Rule};
use catalog_service::{Catalog, MedicineRecord};
use std::sync::Arc;
use uuid::Uuid;

/// Maps a symptom report to exactly one diagnosis.
///
/// Pure: the same report always yields the same result, id included.
#[derive(Debug, Clone)]
pub struct DiagnosisClassifier {
    catalog: Arc<Catalog>,
}

impl DiagnosisClassifier {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classify(&self, report: &SymptomReport) -> DiagnosisResult {
        let rule = rules::select_rule(report);
        tracing::debug!(
            condition = rule.condition,
            symptoms = report.symptoms.len(),
            "symptom rule matched"
        );

        DiagnosisResult {
            id: diagnosis_id(report),
            condition: rule.condition.to_string(),
            description: rule.description.to_string(),
            confidence: rule.confidence,
            severity: rule.severity(report),
            recommended_medicines: self.recommendations(rule),
            advice: rule.advice.to_string(),
            see_doctor: rule.see_doctor(report),
        }
    }

    fn recommendations(&self, rule: &Rule) -> Vec<MedicineRecord> {
        rule.recommended
            .iter()
            .filter_map(|id| {
                let medicine = self.catalog.get(id);
                if medicine.is_none() {
                    tracing::warn!(
                        medicine_id = *id,
                        condition = rule.condition,
                        "recommended medicine missing from catalog"
                    );
                }
                medicine.cloned()
            })
            .collect()
    }
}

impl Default for DiagnosisClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::new()))
    }
}

fn diagnosis_id(report: &SymptomReport) -> String {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, report.fingerprint().as_bytes());
    format!("diagnosis-{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn ids(result: &DiagnosisResult) -> Vec<&str> {
        result.recommended_medicines.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_common_cold() {
        let classifier = DiagnosisClassifier::default();

        let mild = classifier.classify(&SymptomReport::new(["Fever", "Cough"], "1-3 days", "Moderate"));
        assert_eq!(mild.condition, "Common Cold");
        assert_eq!(mild.severity, Severity::Mild);
        assert_eq!(mild.confidence, 85);
        assert!(!mild.see_doctor);
        assert_eq!(ids(&mild), vec!["med-101", "med-102"]);

        let severe = classifier.classify(&SymptomReport::new(["Fever", "Cough"], "1-3 days", "Severe"));
        assert_eq!(severe.severity, Severity::Moderate);
        assert!(!severe.see_doctor);
    }

    #[test]
    fn test_tension_headache() {
        let classifier = DiagnosisClassifier::default();
        let result = classifier.classify(&SymptomReport::new(["Headache"], "More than a week", "Severe"));
        assert_eq!(result.condition, "Tension Headache");
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.confidence, 75);
        assert!(!result.see_doctor);
        assert_eq!(ids(&result), vec!["med-201"]);
    }

    #[test]
    fn test_severe_gastroenteritis() {
        let classifier = DiagnosisClassifier::default();
        let result = classifier.classify(&SymptomReport::new(["Nausea"], "1-3 days", "Severe"));
        assert_eq!(result.condition, "Gastroenteritis");
        assert_eq!(result.severity, Severity::Moderate);
        assert_eq!(result.confidence, 70);
        assert!(result.see_doctor);
        assert_eq!(ids(&result), vec!["med-301", "med-302"]);
    }

    #[test]
    fn test_empty_report_falls_back() {
        let classifier = DiagnosisClassifier::default();
        let result = classifier.classify(&SymptomReport::new(Vec::<String>::new(), "", ""));
        assert_eq!(result.condition, "General Discomfort");
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.confidence, 60);
        assert!(!result.see_doctor);
        assert_eq!(ids(&result), vec!["med-801"]);

        let severe = classifier.classify(&SymptomReport::new(["Fatigue"], "4-7 days", "Severe"));
        assert!(severe.see_doctor);
        assert_eq!(severe.severity, Severity::Mild);
    }

    #[test]
    fn test_identical_reports_give_identical_results() {
        let classifier = DiagnosisClassifier::default();
        let a = SymptomReport::new(["Cough", "Fever"], "1-3 days", "Mild").with_notes("worse at night");
        let b = SymptomReport::new(["Fever", "Cough"], "1-3 days", "Mild").with_notes("worse at night");
        assert_eq!(classifier.classify(&a), classifier.classify(&b));

        let other = SymptomReport::new(["Fever", "Cough"], "1-3 days", "Mild");
        assert_ne!(classifier.classify(&a).id, classifier.classify(&other).id);
    }

    #[test]
    fn test_missing_catalog_entries_are_skipped() {
        let catalog = Catalog::from_records(Vec::new());
        let classifier = DiagnosisClassifier::new(Arc::new(catalog));
        let result = classifier.classify(&SymptomReport::new(["Fever", "Cough"], "1-3 days", "Mild"));
        assert_eq!(result.condition, "Common Cold");
        assert!(result.recommended_medicines.is_empty());
    }
}
