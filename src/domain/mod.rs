//! Domain aggregates exposed by the brewery service layer.

pub mod beer;
pub mod category;
pub mod customer;
pub mod types;
