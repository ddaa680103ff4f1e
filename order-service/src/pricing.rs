use crate::models::Totals;
use rust_decimal::Decimal;

/// Flat delivery fee, waived when the subtotal is strictly above the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub free_delivery_threshold: Decimal,
    pub delivery_fee: Decimal,
}

impl PricingPolicy {
    pub fn new(free_delivery_threshold: Decimal, delivery_fee: Decimal) -> Self {
        Self {
            free_delivery_threshold,
            delivery_fee,
        }
    }

    pub fn delivery_fee_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.free_delivery_threshold {
            Decimal::ZERO
        } else {
            self.delivery_fee
        }
    }

    pub fn totals(&self, subtotal: Decimal) -> Totals {
        let delivery_fee = self.delivery_fee_for(subtotal);
        Totals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(Decimal::from(50), Decimal::from(5))
    }
}
