//! Database models shared across the brewery repository.

pub mod beer;
pub mod category;
pub mod config;
pub mod customer;
