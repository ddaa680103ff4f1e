use crate::api::{MockPharmacyApi, PharmacyApi};
use crate::error::{StorefrontError, StorefrontResult};
use crate::profile::{ProfileUpdate, UserProfile};
use crate::state::AppState;
use crate::storage::{load_json, save_json, JsonFileStore, KeyValueStore, CART_KEY, ORDERS_KEY, PROFILE_KEY};
use catalog_service::{Catalog, CatalogError, Category, MedicineRecord};
use config_engine::StorefrontConfig;
use diagnosis_service::{DiagnosisResult, SymptomReport};
use error_common::ErrorReporter;
use logger_redacted::redacted_info;
use order_service::{Cart, OrderHistory, OrderRecord, PaymentMethod, PricingPolicy};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User-triggered operations, used to pick the message shown on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadMedicines,
    AnalyzeSymptoms,
    UpdateCart,
    PlaceOrder,
    UpdateProfile,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::LoadMedicines => "load_medicines",
            Action::AnalyzeSymptoms => "analyze_symptoms",
            Action::UpdateCart => "update_cart",
            Action::PlaceOrder => "place_order",
            Action::UpdateProfile => "update_profile",
        }
    }

    /// Message for transport and storage failures
    pub fn retry_message(&self) -> &'static str {
        match self {
            Action::LoadMedicines => "Failed to load medicines. Please try again.",
            Action::AnalyzeSymptoms => "Failed to analyze symptoms. Please try again.",
            Action::UpdateCart => "Failed to update your cart. Please try again.",
            Action::PlaceOrder => "Failed to place your order. Please try again.",
            Action::UpdateProfile => "Failed to update your profile. Please try again.",
        }
    }
}

/// Composition root: owns the session state and keeps the persisted copy in
/// step with it after every change.
pub struct Storefront {
    api: Arc<dyn PharmacyApi>,
    store: Arc<dyn KeyValueStore>,
    state: AppState,
}

impl Storefront {
    /// Restore cart, orders and profile from `store`. A missing profile
    /// starts the demo account. A value that no longer decodes is dropped
    /// with a warning and replaced on the next write.
    pub async fn open(
        api: Arc<dyn PharmacyApi>,
        store: Arc<dyn KeyValueStore>,
        pricing: PricingPolicy,
    ) -> StorefrontResult<Self> {
        let mut state = AppState::new(pricing);

        if let Some(cart) = load_or_discard::<Cart>(store.as_ref(), CART_KEY).await? {
            state.replace_cart(cart);
        }
        if let Some(orders) = load_or_discard::<OrderHistory>(store.as_ref(), ORDERS_KEY).await? {
            state.replace_orders(orders);
        }
        let profile = load_or_discard::<UserProfile>(store.as_ref(), PROFILE_KEY)
            .await?
            .unwrap_or_else(UserProfile::demo);
        state.set_user(Some(profile));

        debug!(
            cart_lines = state.cart().len(),
            orders = state.orders().len(),
            "storefront state restored"
        );

        Ok(Self { api, store, state })
    }

    /// Simulated pharmacy and JSON file persistence, as configured
    pub async fn from_config(config: &StorefrontConfig) -> StorefrontResult<Self> {
        let api = MockPharmacyApi::new(Arc::new(Catalog::new()), config.latency.clone());
        let store = JsonFileStore::new(&config.storage.data_file);
        info!(data_file = %config.storage.data_file.display(), "opening storefront");
        Self::open(Arc::new(api), Arc::new(store), pricing_policy(config)).await
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &dyn PharmacyApi {
        self.api.as_ref()
    }

    /// Log `error` and return the text to show for a failed `action`
    pub fn report(&self, action: Action, error: &StorefrontError) -> String {
        ErrorReporter::new()
            .with_retry_message(action.retry_message())
            .report(action.as_str(), error)
    }

    /// Medicines page: whole catalog filtered by category, then by a
    /// name/description substring
    pub async fn medicines(&mut self, query: &str, category: Option<Category>) -> StorefrontResult<Vec<MedicineRecord>> {
        self.state.set_loading(true);
        let fetched = self.api.fetch_medicines().await;
        self.state.set_loading(false);

        Ok(Catalog::from_records(fetched?).browse(query, category))
    }

    pub async fn search(&mut self, query: &str) -> StorefrontResult<Vec<MedicineRecord>> {
        self.state.set_loading(true);
        let results = self.api.search_medicines(query).await;
        self.state.set_loading(false);
        results
    }

    pub async fn medicine(&mut self, id: &str) -> StorefrontResult<MedicineRecord> {
        self.state.set_loading(true);
        let found = self.api.get_medicine(id).await;
        self.state.set_loading(false);
        found?.ok_or_else(|| CatalogError::MedicineNotFound(id.to_string()).into())
    }

    /// Run the classifier and make the outcome the current diagnosis
    pub async fn diagnose(&mut self, report: &SymptomReport) -> StorefrontResult<DiagnosisResult> {
        self.state.set_loading(true);
        let analyzed = self.api.analyze_symptoms(report).await;
        self.state.set_loading(false);

        let result = analyzed?;
        self.state.set_current_diagnosis(report, result.clone());
        self.persist_profile().await?;
        Ok(result)
    }

    pub fn clear_diagnosis(&mut self) {
        self.state.clear_diagnosis();
    }

    pub async fn add_recommended_to_cart(&mut self) -> StorefrontResult<usize> {
        let added = self.state.add_recommended_to_cart();
        if added > 0 {
            self.persist_cart().await?;
        }
        Ok(added)
    }

    pub async fn add_to_cart(&mut self, medicine_id: &str, quantity: i64) -> StorefrontResult<()> {
        let medicine = self.medicine(medicine_id).await?;
        self.state.add_to_cart(&medicine, quantity);
        self.persist_cart().await
    }

    pub async fn remove_from_cart(&mut self, medicine_id: &str) -> StorefrontResult<bool> {
        let removed = self.state.remove_from_cart(medicine_id);
        if removed {
            self.persist_cart().await?;
        }
        Ok(removed)
    }

    pub async fn update_cart_item_quantity(&mut self, medicine_id: &str, quantity: i64) -> StorefrontResult<()> {
        if !self.state.update_cart_item_quantity(medicine_id, quantity) {
            return Err(CatalogError::MedicineNotFound(medicine_id.to_string()).into());
        }
        self.persist_cart().await
    }

    pub async fn clear_cart(&mut self) -> StorefrontResult<()> {
        self.state.clear_cart();
        self.persist_cart().await
    }

    /// Place the order, then persist the grown history and the emptied cart.
    ///
    /// The history is written first so a failed write never leaves an empty
    /// cart on disk without its order. On any write failure the session and
    /// the stored history go back to their pre-checkout contents.
    pub async fn checkout(&mut self, delivery_address: &str, payment_method: PaymentMethod) -> StorefrontResult<OrderRecord> {
        let previous_cart = self.state.cart().clone();
        let previous_orders = self.state.orders().clone();
        let order = self.state.checkout(delivery_address, payment_method)?;

        if let Err(e) = save_json(self.store.as_ref(), ORDERS_KEY, self.state.orders()).await {
            warn!(order_id = %order.id, error = %e, "order history not saved, checkout rolled back");
            self.state.replace_cart(previous_cart);
            self.state.replace_orders(previous_orders);
            return Err(e);
        }
        if let Err(e) = self.persist_cart().await {
            warn!(order_id = %order.id, error = %e, "cart not saved, checkout rolled back");
            if let Err(undo) = save_json(self.store.as_ref(), ORDERS_KEY, &previous_orders).await {
                warn!(error = %undo, "stored order history could not be restored");
            }
            self.state.replace_cart(previous_cart);
            self.state.replace_orders(previous_orders);
            return Err(e);
        }

        redacted_info!(
            "order {} confirmed for delivery to {}",
            order.id,
            order.delivery_address
        );
        Ok(order)
    }

    pub async fn update_profile(&mut self, update: ProfileUpdate) -> StorefrontResult<bool> {
        if update.is_empty() {
            return Ok(false);
        }
        if !self.state.update_profile(update) {
            return Ok(false);
        }
        if let Some(user) = self.state.user() {
            redacted_info!("profile updated: {} <{}> {}", user.name, user.email, user.phone);
        }
        self.persist_profile().await?;
        Ok(true)
    }

    async fn persist_cart(&self) -> StorefrontResult<()> {
        save_json(self.store.as_ref(), CART_KEY, self.state.cart()).await
    }

    async fn persist_profile(&self) -> StorefrontResult<()> {
        match self.state.user() {
            Some(user) => save_json(self.store.as_ref(), PROFILE_KEY, user).await,
            None => Ok(()),
        }
    }
}

async fn load_or_discard<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> StorefrontResult<Option<T>> {
    match load_json(store, key).await {
        Err(StorefrontError::CorruptState { key, source }) => {
            warn!(key = %key, error = %source, "stored value does not decode, starting without it");
            Ok(None)
        }
        other => other,
    }
}

/// Pricing rule from configuration
pub fn pricing_policy(config: &StorefrontConfig) -> PricingPolicy {
    PricingPolicy::new(config.pricing.free_delivery_threshold, config.pricing.delivery_fee)
}
