use crate::error::{OrderError, OrderResult};
use crate::models::{CartLine, OrderRecord, OrderStatus, PaymentMethod, Totals};
use crate::pricing::PricingPolicy;
use catalog_service::MedicineRecord;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Shopping cart keyed by medicine id.
///
/// Lines keep insertion order. Every line has a quantity of at least one and
/// no two lines share a medicine id; a persisted cart that breaks either rule
/// is normalised on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units, merging into an existing line for the same medicine.
    ///
    /// A non-positive quantity on an existing line lowers it and drops the line
    /// once it reaches zero. A non-positive quantity for a new medicine is ignored.
    pub fn add_line(&mut self, medicine: &MedicineRecord, quantity: i64) {
        match self.position(&medicine.id) {
            Some(pos) => {
                let current = self.lines.get(pos).map_or(0, |line| i64::from(line.quantity));
                self.store_quantity(pos, current.saturating_add(quantity));
            }
            None if quantity > 0 => {
                self.lines.push(CartLine {
                    medicine: medicine.clone(),
                    quantity: clamp_quantity(quantity),
                });
            }
            None => {
                debug!(medicine_id = %medicine.id, quantity, "Ignoring non-positive add");
            }
        }
    }

    /// +/- stepper on the medicines page
    pub fn adjust_quantity(&mut self, medicine: &MedicineRecord, delta: i64) {
        self.add_line(medicine, delta);
    }

    pub fn remove_line(&mut self, medicine_id: &str) -> Option<CartLine> {
        let pos = self.position(medicine_id)?;
        Some(self.lines.remove(pos))
    }

    /// Replace the quantity of an existing line. Returns false when the
    /// medicine is not in the cart.
    pub fn set_quantity(&mut self, medicine_id: &str, quantity: i64) -> bool {
        match self.position(medicine_id) {
            Some(pos) => {
                self.store_quantity(pos, quantity);
                true
            }
            None => false,
        }
    }

    pub fn quantity_of(&self, medicine_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.medicine.id == medicine_id)
            .map_or(0, |line| line.quantity)
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn compute_totals(&self, pricing: &PricingPolicy) -> Totals {
        pricing.totals(self.subtotal())
    }

    /// Turn the cart into a confirmed order and empty it.
    ///
    /// The cart is left untouched when validation fails.
    pub fn checkout(
        &mut self,
        user_id: &str,
        delivery_address: &str,
        payment_method: PaymentMethod,
        pricing: &PricingPolicy,
    ) -> OrderResult<OrderRecord> {
        if self.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let address = delivery_address.trim();
        if address.is_empty() {
            return Err(OrderError::MissingAddress);
        }

        let totals = self.compute_totals(pricing);
        let now = Utc::now();
        let order = OrderRecord {
            id: format!("ORD-{}", Uuid::new_v4().simple()).to_uppercase(),
            user_id: user_id.to_string(),
            items: std::mem::take(&mut self.lines),
            total_amount: totals.total,
            status: OrderStatus::Confirmed,
            delivery_address: address.to_string(),
            payment_method,
            created_at: now,
            updated_at: now,
        };

        info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = %order.total_amount,
            payment = %order.payment_method,
            "Order placed"
        );
        Ok(order)
    }

    fn position(&self, medicine_id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.medicine.id == medicine_id)
    }

    fn store_quantity(&mut self, pos: usize, quantity: i64) {
        if quantity <= 0 {
            self.lines.remove(pos);
        } else if let Some(line) = self.lines.get_mut(pos) {
            line.quantity = clamp_quantity(quantity);
        }
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity).unwrap_or(u32::MAX)
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            cart.add_line(&line.medicine, i64::from(line.quantity));
        }
        cart
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
