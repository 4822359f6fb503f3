use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, CustomerName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub version: i32,
    pub name: CustomerName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub name: CustomerName,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: CustomerName) -> Self {
        Self { name }
    }
}

/// Complete replacement state for the mutable fields of a [`Customer`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateCustomer {
    pub name: CustomerName,
}

/// Partial changes for a [`Customer`]; `None` keeps the stored value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PatchCustomer {
    pub name: Option<CustomerName>,
}

impl PatchCustomer {
    #[must_use]
    pub fn apply_to(&self, customer: &Customer) -> UpdateCustomer {
        UpdateCustomer {
            name: self.name.clone().unwrap_or_else(|| customer.name.clone()),
        }
    }
}
