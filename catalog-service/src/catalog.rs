use crate::data;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, MedicineRecord};
use std::collections::HashMap;

/// The fixed medicine catalog.
///
/// All listings preserve table order; there is no ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    medicines: Vec<MedicineRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Catalog over the built-in medicine table
    pub fn new() -> Self {
        Self::from_records(data::medicines())
    }

    /// Catalog over arbitrary records. Later duplicates of an id are dropped.
    pub fn from_records(records: Vec<MedicineRecord>) -> Self {
        let mut medicines = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            if index.contains_key(&record.id) {
                tracing::warn!(medicine_id = %record.id, "duplicate catalog id ignored");
                continue;
            }
            index.insert(record.id.clone(), medicines.len());
            medicines.push(record);
        }
        Self { medicines, index }
    }

    pub fn all(&self) -> &[MedicineRecord] {
        &self.medicines
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MedicineRecord> {
        self.index.get(id).and_then(|&pos| self.medicines.get(pos))
    }

    /// Like [`Catalog::get`] but absent ids are an error
    pub fn require(&self, id: &str) -> CatalogResult<&MedicineRecord> {
        self.get(id)
            .ok_or_else(|| CatalogError::MedicineNotFound(id.to_string()))
    }

    /// Case-insensitive substring search over name, description and
    /// category. A blank query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<MedicineRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.medicines.clone();
        }
        self.medicines
            .iter()
            .filter(|medicine| medicine.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<MedicineRecord> {
        self.medicines
            .iter()
            .filter(|medicine| medicine.category == category)
            .cloned()
            .collect()
    }

    /// Medicines page filtering: optional exact category, then a
    /// name/description substring filter when `query` is not blank
    pub fn browse(&self, query: &str, category: Option<Category>) -> Vec<MedicineRecord> {
        let needle = query.trim().to_lowercase();
        self.medicines
            .iter()
            .filter(|medicine| category.map_or(true, |c| medicine.category == c))
            .filter(|medicine| needle.is_empty() || medicine.matches_text(&needle))
            .cloned()
            .collect()
    }

    /// Categories in display order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
