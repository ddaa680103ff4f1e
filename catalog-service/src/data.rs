// Fixed catalog table

use crate::models::{Category, MedicineRecord};
use rust_decimal::Decimal;

const PRODUCT_IMAGE: &str =
    "https://images.pexels.com/photos/139398/pexels-photo-139398.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

struct Row {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    side_effects: &'static str,
    price_cents: i64,
    dosage: &'static str,
    category: Category,
    stock: u32,
}

const ROWS: [Row; 11] = [
    Row {
        id: "med-101",
        name: "ColdEase Plus",
        description: "Relieves cold symptoms including cough, congestion, and fever",
        usage: "Take 1-2 tablets every 4-6 hours as needed, not exceeding 8 tablets in 24 hours",
        side_effects: "May cause drowsiness. Avoid alcohol and operating machinery.",
        price_cents: 1299,
        dosage: "500mg tablets",
        category: Category::ColdAndFlu,
        stock: 50,
    },
    Row {
        id: "med-102",
        name: "NightTime Cold Relief",
        description: "Nighttime cold medicine for restful sleep while treating symptoms",
        usage: "Take 30ml before bedtime",
        side_effects: "Drowsiness, dizziness",
        price_cents: 899,
        dosage: "120ml syrup",
        category: Category::ColdAndFlu,
        stock: 35,
    },
    Row {
        id: "med-201",
        name: "HeadRelief Extra Strength",
        description: "Fast-acting pain relief for headaches and migraines",
        usage: "Take 2 tablets every 6 hours as needed, not exceeding 6 tablets in 24 hours",
        side_effects: "May cause stomach upset. Take with food if necessary.",
        price_cents: 999,
        dosage: "500mg tablets",
        category: Category::PainRelief,
        stock: 45,
    },
    Row {
        id: "med-202",
        name: "JointEase Gel",
        description: "Topical pain relief for arthritis and joint pain",
        usage: "Apply to affected area up to 4 times daily",
        side_effects: "May cause skin irritation in sensitive individuals",
        price_cents: 1549,
        dosage: "100g gel",
        category: Category::PainRelief,
        stock: 28,
    },
    Row {
        id: "med-301",
        name: "NauseaStop",
        description: "Relieves nausea, vomiting, and motion sickness",
        usage: "Take 1 tablet every 8 hours as needed",
        side_effects: "May cause drowsiness and dry mouth",
        price_cents: 1149,
        dosage: "25mg tablets",
        category: Category::DigestiveHealth,
        stock: 30,
    },
    Row {
        id: "med-302",
        name: "Rehydration Solution",
        description: "Replenishes electrolytes lost during vomiting or diarrhea",
        usage: "Mix one packet in a glass of water and drink as needed",
        side_effects: "None known when used as directed",
        price_cents: 1499,
        dosage: "10 packets",
        category: Category::DigestiveHealth,
        stock: 25,
    },
    Row {
        id: "med-401",
        name: "AllergyClear 24H",
        description: "Non-drowsy 24-hour relief from seasonal allergies",
        usage: "Take 1 tablet daily",
        side_effects: "May cause dry mouth and headache in some individuals",
        price_cents: 1899,
        dosage: "10mg tablets",
        category: Category::Allergy,
        stock: 40,
    },
    Row {
        id: "med-501",
        name: "First Aid Antiseptic",
        description: "Prevents infection in minor cuts, scrapes, and burns",
        usage: "Clean affected area and apply a small amount 1-3 times daily",
        side_effects: "Temporary stinging upon application",
        price_cents: 699,
        dosage: "120ml solution",
        category: Category::FirstAid,
        stock: 55,
    },
    Row {
        id: "med-601",
        name: "Daily Multivitamin",
        description: "Complete daily vitamin and mineral supplement for adults",
        usage: "Take 1 tablet daily with food",
        side_effects: "None when used as directed",
        price_cents: 1999,
        dosage: "90 tablets",
        category: Category::Vitamins,
        stock: 65,
    },
    Row {
        id: "med-701",
        name: "Hydrating Skin Lotion",
        description: "Intensive moisturizing lotion for dry and sensitive skin",
        usage: "Apply to clean skin as needed",
        side_effects: "May cause irritation in individuals with specific allergies",
        price_cents: 1349,
        dosage: "250ml lotion",
        category: Category::Skincare,
        stock: 38,
    },
    Row {
        id: "med-801",
        name: "MultiSymptom Relief",
        description: "General relief for multiple minor symptoms",
        usage: "Take 2 tablets every 6 hours as needed",
        side_effects: "May cause drowsiness in some individuals",
        price_cents: 799,
        dosage: "200mg tablets",
        category: Category::General,
        stock: 60,
    },
];

/// Build the catalog records in table order
pub fn medicines() -> Vec<MedicineRecord> {
    ROWS.iter()
        .map(|row| MedicineRecord {
            id: row.id.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            usage_instructions: row.usage.to_string(),
            side_effects: row.side_effects.to_string(),
            price: Decimal::new(row.price_cents, 2),
            dosage: row.dosage.to_string(),
            category: row.category,
            image: PRODUCT_IMAGE.to_string(),
            requires_prescription: false,
            stock: row.stock,
        })
        .collect()
}
