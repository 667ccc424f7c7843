//! finaid - personal finance bookkeeping backend.
//!
//! Keeps track of people, their accounts, expense categories and the
//! expenses paid from those accounts, with referential integrity checked
//! before every write.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
