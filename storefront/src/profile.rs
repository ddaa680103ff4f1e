use diagnosis_service::DiagnosisRecord;
use serde::{Deserialize, Serialize};

/// Signed-in shopper. One per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub medical_history: Vec<DiagnosisRecord>,
}

impl UserProfile {
    /// Demo account every session starts with
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            address: "123 Main St, Anytown, USA".to_string(),
            medical_history: Vec::new(),
        }
    }

    /// Overwrite the contact fields present in `update`. History is untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }

    pub fn record_diagnosis(&mut self, record: DiagnosisRecord) {
        self.medical_history.push(record);
    }
}

/// Partial edit from the profile page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }
}
