use crate::error::StorefrontResult;
use crate::profile::{ProfileUpdate, UserProfile};
use catalog_service::MedicineRecord;
use chrono::Utc;
use diagnosis_service::{DiagnosisRecord, DiagnosisResult, SymptomReport};
use order_service::{Cart, OrderHistory, OrderRecord, PaymentMethod, PricingPolicy, Totals};
use tracing::{debug, info};

/// User reference recorded on orders placed without a profile
pub const GUEST_USER: &str = "guest";

/// Everything a session knows: who is shopping, what is in the cart, the
/// diagnosis being looked at and the orders placed so far.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    user: Option<UserProfile>,
    cart: Cart,
    current_diagnosis: Option<DiagnosisResult>,
    orders: OrderHistory,
    is_loading: bool,
    pricing: PricingPolicy,
}

impl AppState {
    pub fn new(pricing: PricingPolicy) -> Self {
        Self {
            pricing,
            ..Self::default()
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
    }

    /// Returns false when nobody is signed in
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                user.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn user_ref(&self) -> &str {
        self.user.as_ref().map_or(GUEST_USER, |user| user.id.as_str())
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub(crate) fn replace_cart(&mut self, cart: Cart) {
        self.cart = cart;
    }

    pub fn add_to_cart(&mut self, medicine: &MedicineRecord, quantity: i64) {
        self.cart.add_line(medicine, quantity);
        debug!(medicine_id = %medicine.id, quantity, items = self.cart.item_count(), "cart updated");
    }

    pub fn remove_from_cart(&mut self, medicine_id: &str) -> bool {
        self.cart.remove_line(medicine_id).is_some()
    }

    pub fn update_cart_item_quantity(&mut self, medicine_id: &str, quantity: i64) -> bool {
        self.cart.set_quantity(medicine_id, quantity)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_totals(&self) -> Totals {
        self.cart.compute_totals(&self.pricing)
    }

    pub fn current_diagnosis(&self) -> Option<&DiagnosisResult> {
        self.current_diagnosis.as_ref()
    }

    /// Make `result` the current diagnosis and log it in the user's history
    pub fn set_current_diagnosis(&mut self, report: &SymptomReport, result: DiagnosisResult) {
        if let Some(user) = self.user.as_mut() {
            user.record_diagnosis(DiagnosisRecord::summarize(report, &result, Utc::now()));
        }
        info!(condition = %result.condition, severity = %result.severity, "diagnosis ready");
        self.current_diagnosis = Some(result);
    }

    pub fn clear_diagnosis(&mut self) {
        self.current_diagnosis = None;
    }

    /// Put one of each recommended medicine in the cart. Returns how many
    /// lines were touched; zero when there is no current diagnosis.
    pub fn add_recommended_to_cart(&mut self) -> usize {
        let Some(diagnosis) = self.current_diagnosis.as_ref() else {
            return 0;
        };
        for medicine in &diagnosis.recommended_medicines {
            self.cart.add_line(medicine, 1);
        }
        diagnosis.recommended_medicines.len()
    }

    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    pub(crate) fn replace_orders(&mut self, orders: OrderHistory) {
        self.orders = orders;
    }

    /// Check out the cart and record the order. Nothing changes on failure.
    pub fn checkout(&mut self, delivery_address: &str, payment_method: PaymentMethod) -> StorefrontResult<OrderRecord> {
        let user_ref = self.user_ref().to_string();
        let order = self
            .cart
            .checkout(&user_ref, delivery_address, payment_method, &self.pricing)?;
        self.orders.append(order.clone());
        Ok(order)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}
