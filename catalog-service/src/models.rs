use crate::error::CatalogError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A purchasable medicine. Reference data, never mutated after start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub usage_instructions: String,
    pub side_effects: String,
    pub price: Decimal,
    /// Pack or strength label, e.g. "500mg tablets"
    pub dosage: String,
    pub category: Category,
    pub image: String,
    pub requires_prescription: bool,
    pub stock: u32,
}

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pain Relief")]
    PainRelief,
    #[serde(rename = "Cold & Flu")]
    ColdAndFlu,
    #[serde(rename = "Digestive Health")]
    DigestiveHealth,
    #[serde(rename = "Allergy")]
    Allergy,
    #[serde(rename = "First Aid")]
    FirstAid,
    #[serde(rename = "Vitamins")]
    Vitamins,
    #[serde(rename = "Skincare")]
    Skincare,
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// Display order used by the medicines page filter
    pub const ALL: [Category; 8] = [
        Category::PainRelief,
        Category::ColdAndFlu,
        Category::DigestiveHealth,
        Category::Allergy,
        Category::FirstAid,
        Category::Vitamins,
        Category::Skincare,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::PainRelief => "Pain Relief",
            Category::ColdAndFlu => "Cold & Flu",
            Category::DigestiveHealth => "Digestive Health",
            Category::Allergy => "Allergy",
            Category::FirstAid => "First Aid",
            Category::Vitamins => "Vitamins",
            Category::Skincare => "Skincare",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the display label in any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

impl MedicineRecord {
    /// Case-insensitive substring match over name, description and category.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
    }

    /// Name/description only match used by the medicines page search box
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
