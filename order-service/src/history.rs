use crate::models::OrderRecord;
use serde::{Deserialize, Serialize};

/// Append-only list of placed orders, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<OrderRecord>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, order: OrderRecord) {
        self.orders.push(order);
    }

    pub fn list(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn get(&self, order_id: &str) -> Option<&OrderRecord> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    pub fn latest(&self) -> Option<&OrderRecord> {
        self.orders.last()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
