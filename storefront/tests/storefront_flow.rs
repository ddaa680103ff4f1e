use async_trait::async_trait;
use catalog_service::{Catalog, Category, MedicineRecord};
use diagnosis_service::{DiagnosisResult, SymptomReport};
use error_common::{Categorized, ErrorCategory};
use mockall::mock;
use order_service::{OrderStatus, PaymentMethod, PricingPolicy};
use rust_decimal::Decimal;
use std::sync::Arc;
use serde_json::{json, Value};
use storefront::{
    Action, JsonFileStore, KeyValueStore, MemoryStore, MockPharmacyApi, PharmacyApi, ProfileUpdate, Storefront,
    StorefrontError, StorefrontResult, CART_KEY, ORDERS_KEY,
};

mock! {
    pub Pharmacy {}

    #[async_trait]
    impl PharmacyApi for Pharmacy {
        async fn fetch_medicines(&self) -> StorefrontResult<Vec<MedicineRecord>>;
        async fn search_medicines(&self, query: &str) -> StorefrontResult<Vec<MedicineRecord>>;
        async fn get_medicine(&self, id: &str) -> StorefrontResult<Option<MedicineRecord>>;
        async fn analyze_symptoms(&self, report: &SymptomReport) -> StorefrontResult<DiagnosisResult>;
    }
}

/// Memory store whose writes to one key always fail
struct RefusingStore {
    inner: MemoryStore,
    refused_key: &'static str,
}

#[async_trait]
impl KeyValueStore for RefusingStore {
    async fn get(&self, key: &str) -> StorefrontResult<Option<Value>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> StorefrontResult<()> {
        if key == self.refused_key {
            return Err(StorefrontError::StorageWrite(format!("{key}: disk full")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        self.inner.remove(key).await
    }
}

async fn open_with(api: Arc<dyn PharmacyApi>, store: Arc<MemoryStore>) -> Storefront {
    Storefront::open(api, store, PricingPolicy::default()).await.unwrap()
}

#[tokio::test]
async fn test_diagnosis_to_order() {
    let store = Arc::new(MemoryStore::new());
    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::clone(&store)).await;

    let report = SymptomReport::new(["Nausea"], "1-3 days", "Severe");
    let diagnosis = shop.diagnose(&report).await.unwrap();
    assert_eq!(diagnosis.condition, "Gastroenteritis");
    assert!(diagnosis.see_doctor);
    assert_eq!(shop.state().current_diagnosis(), Some(&diagnosis));

    assert_eq!(shop.add_recommended_to_cart().await.unwrap(), 2);
    let totals = shop.state().cart_totals();

    let order = shop.checkout("123 Main St", PaymentMethod::Card).await.unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.user_id, "1");
    assert_eq!(order.total_amount, totals.total);
    assert!(shop.state().cart().is_empty());

    let history = &shop.state().user().unwrap().medical_history;
    assert_eq!(history.len(), 1);

    // a fresh session sees the same orders, profile and an empty cart
    let reopened = open_with(Arc::new(MockPharmacyApi::instant()), store).await;
    assert_eq!(reopened.state().orders().len(), 1);
    assert_eq!(reopened.state().orders().get(&order.id), Some(&order));
    assert_eq!(reopened.state().user().unwrap().medical_history.len(), 1);
    assert!(reopened.state().cart().is_empty());
}

#[tokio::test]
async fn test_cart_persists_under_cart_key() {
    let store = Arc::new(MemoryStore::new());
    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::clone(&store)).await;

    shop.add_to_cart("med-101", 2).await.unwrap();
    shop.add_to_cart("med-101", 1).await.unwrap();
    shop.add_to_cart("med-501", 1).await.unwrap();
    shop.update_cart_item_quantity("med-501", 0).await.unwrap();

    let saved = store.get(CART_KEY).await.unwrap().unwrap();
    let lines = saved.as_array().unwrap();
    assert_eq!(lines.len(), 1);

    let reopened = open_with(Arc::new(MockPharmacyApi::instant()), store).await;
    assert_eq!(reopened.state().cart().quantity_of("med-101"), 3);
    assert_eq!(
        reopened.state().cart_totals().subtotal,
        Decimal::new(1299, 2) * Decimal::from(3)
    );
}

#[tokio::test]
async fn test_unknown_medicine_is_not_found() {
    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::new(MemoryStore::new())).await;
    let err = shop.add_to_cart("med-999", 1).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(shop.state().cart().is_empty());

    let err = shop.update_cart_item_quantity("med-101", 2).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[tokio::test]
async fn test_checkout_validation_messages() {
    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::new(MemoryStore::new())).await;

    let err = shop.checkout("123 Main St", PaymentMethod::Card).await.unwrap_err();
    assert_eq!(shop.report(Action::PlaceOrder, &err), "Your cart is empty");

    shop.add_to_cart("med-201", 1).await.unwrap();
    let err = shop.checkout("  ", PaymentMethod::CashOnDelivery).await.unwrap_err();
    assert_eq!(shop.report(Action::PlaceOrder, &err), "Delivery address is required");
    assert!(shop.state().orders().is_empty());
    assert_eq!(shop.state().cart().item_count(), 1);
}

#[tokio::test]
async fn test_transport_failure_keeps_previous_diagnosis() {
    let api = Arc::new(MockPharmacyApi::instant());
    let mut shop = open_with(api.clone(), Arc::new(MemoryStore::new())).await;

    let report = SymptomReport::new(["Fever", "Cough"], "1-3 days", "Mild");
    let first = shop.diagnose(&report).await.unwrap();

    api.set_offline(true);
    let err = shop.diagnose(&SymptomReport::new(["Headache"], "More than a week", "Mild")).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Transport(_)));
    assert_eq!(
        shop.report(Action::AnalyzeSymptoms, &err),
        "Failed to analyze symptoms. Please try again."
    );
    assert_eq!(shop.state().current_diagnosis(), Some(&first));
    assert!(!shop.state().is_loading());
}

#[tokio::test]
async fn test_medicines_page_filters_locally() {
    let mut api = MockPharmacy::new();
    let catalog = Catalog::new();
    let all = catalog.all().to_vec();
    api.expect_fetch_medicines().times(2).returning(move || Ok(all.clone()));
    api.expect_search_medicines().never();

    let mut shop = open_with(Arc::new(api), Arc::new(MemoryStore::new())).await;

    let pain = shop.medicines("", Some(Category::PainRelief)).await.unwrap();
    assert!(!pain.is_empty());
    assert!(pain.iter().all(|m| m.category == Category::PainRelief));

    // the page matches name and description only
    let by_category_word = shop.medicines("cold & flu", None).await.unwrap();
    assert!(by_category_word.is_empty());
}

#[tokio::test]
async fn test_search_goes_through_api() {
    let mut api = MockPharmacy::new();
    api.expect_search_medicines()
        .withf(|query| query == "Allergy")
        .times(1)
        .returning(|query| Ok(Catalog::new().search(query)));

    let mut shop = open_with(Arc::new(api), Arc::new(MemoryStore::new())).await;
    let results = shop.search("Allergy").await.unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|m| m.category == Category::Allergy));
}

#[tokio::test]
async fn test_profile_update_persists() {
    let store = Arc::new(MemoryStore::new());
    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::clone(&store)).await;

    assert!(!shop.update_profile(ProfileUpdate::default()).await.unwrap());
    let changed = shop
        .update_profile(ProfileUpdate {
            address: Some("9 Elm Road, Springfield".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();
    assert!(changed);

    let reopened = open_with(Arc::new(MockPharmacyApi::instant()), store).await;
    assert_eq!(reopened.state().user().unwrap().address, "9 Elm Road, Springfield");
}

#[tokio::test]
async fn test_checkout_keeps_cart_when_history_write_fails() {
    let store = Arc::new(RefusingStore {
        inner: MemoryStore::new(),
        refused_key: ORDERS_KEY,
    });
    let mut shop = Storefront::open(Arc::new(MockPharmacyApi::instant()), store.clone(), PricingPolicy::default())
        .await
        .unwrap();
    shop.add_to_cart("med-101", 2).await.unwrap();

    let err = shop.checkout("123 Main St", PaymentMethod::Card).await.unwrap_err();
    assert!(matches!(err, StorefrontError::StorageWrite(_)));
    assert_eq!(
        shop.report(Action::PlaceOrder, &err),
        "Failed to place your order. Please try again."
    );

    assert_eq!(shop.state().cart().quantity_of("med-101"), 2);
    assert!(shop.state().orders().is_empty());
    let persisted_cart = store.get(CART_KEY).await.unwrap().unwrap();
    assert_eq!(persisted_cart.as_array().map(Vec::len), Some(1));
    assert!(store.get(ORDERS_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_checkout_restores_history_when_cart_write_fails() {
    let store = Arc::new(RefusingStore {
        inner: MemoryStore::new(),
        refused_key: CART_KEY,
    });
    store
        .inner
        .set(CART_KEY, json!([{"medicine": Catalog::new().get("med-201").unwrap(), "quantity": 1}]))
        .await
        .unwrap();
    let mut shop = Storefront::open(Arc::new(MockPharmacyApi::instant()), store.clone(), PricingPolicy::default())
        .await
        .unwrap();
    assert_eq!(shop.state().cart().item_count(), 1);

    assert!(shop.checkout("123 Main St", PaymentMethod::CashOnDelivery).await.is_err());
    assert_eq!(shop.state().cart().item_count(), 1);
    assert!(shop.state().orders().is_empty());
    assert_eq!(store.get(ORDERS_KEY).await.unwrap(), Some(json!([])));
}

#[tokio::test]
async fn test_unreadable_data_file_does_not_block_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"cart": ["#).unwrap();

    for _ in 0..3 {
        let store = Arc::new(JsonFileStore::new(&path));
        let shop = Storefront::open(Arc::new(MockPharmacyApi::instant()), store, PricingPolicy::default())
            .await
            .unwrap();
        assert!(shop.state().cart().is_empty());
        assert_eq!(shop.state().user().unwrap().name, "John Doe");
    }
    assert!(dir.path().join("data.json.corrupt").exists());

    let store = Arc::new(JsonFileStore::new(&path));
    let mut shop = Storefront::open(Arc::new(MockPharmacyApi::instant()), store, PricingPolicy::default())
        .await
        .unwrap();
    shop.clear_cart().await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_undecodable_value_is_dropped_on_open() {
    let store = Arc::new(MemoryStore::new());
    store.set(CART_KEY, json!({"not": "a cart"})).await.unwrap();
    store.set(ORDERS_KEY, json!("nonsense")).await.unwrap();

    let mut shop = open_with(Arc::new(MockPharmacyApi::instant()), Arc::clone(&store)).await;
    assert!(shop.state().cart().is_empty());
    assert!(shop.state().orders().is_empty());

    shop.add_to_cart("med-101", 1).await.unwrap();
    let reopened = open_with(Arc::new(MockPharmacyApi::instant()), store).await;
    assert_eq!(reopened.state().cart().quantity_of("med-101"), 1);
}
