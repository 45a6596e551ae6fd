//! `storesight-policy`
//!
//! **Responsibility:** Policy Lookup — resolving an SOP id to its document
//! text under a configured root, with absence as a first-class value.

pub mod store;

pub use store::{PolicyStore, PolicyText};
