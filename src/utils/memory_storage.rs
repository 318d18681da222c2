//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
///
/// Bills are kept in a vector so that [`BillStorage::list_bills`]
/// preserves insertion order, which the stable urgency sort relies on
/// for tie-breaking.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    bills: Arc<RwLock<Vec<Bill>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            bills: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.bills.write().unwrap().clear();
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStorage for MemoryStorage {
    async fn save_bill(&mut self, bill: &Bill) -> BillResult<()> {
        self.bills.write().unwrap().push(bill.clone());
        Ok(())
    }

    async fn get_bill(&self, name: &str) -> BillResult<Option<Bill>> {
        Ok(self
            .bills
            .read()
            .unwrap()
            .iter()
            .find(|b| b.name == name)
            .cloned())
    }

    async fn list_bills(&self) -> BillResult<Vec<Bill>> {
        Ok(self.bills.read().unwrap().clone())
    }

    async fn update_bill(&mut self, bill: &Bill) -> BillResult<()> {
        let mut bills = self.bills.write().unwrap();
        match bills.iter_mut().find(|b| b.name == bill.name) {
            Some(existing) => {
                *existing = bill.clone();
                Ok(())
            }
            None => Err(BillError::BillNotFound(bill.name.clone())),
        }
    }

    async fn delete_bill(&mut self, name: &str) -> BillResult<()> {
        let mut bills = self.bills.write().unwrap();
        let before = bills.len();
        bills.retain(|b| b.name != name);
        if bills.len() == before {
            Err(BillError::BillNotFound(name.to_string()))
        } else {
            Ok(())
        }
    }
}
