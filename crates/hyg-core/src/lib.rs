//! # hyg-core
//!
//! Core types and pure logic for the hygiene inspection workspace.
//!
//! This crate performs no I/O. It provides:
//! - Tagged enums for zone kinds, responses, checklist types, roles and collections
//! - Persisted entity structs (`ChecklistEntry`, `JournalEntry`) and the `Record` union
//! - The static item and sector catalogs
//! - Checklist derivation and response classification
//! - The per-sector inspection state machine
//! - The access policy governing deletion rights
//! - A clock abstraction so time-dependent rules can be tested

pub mod access;
pub mod catalog;
pub mod checklist;
pub mod classify;
pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod inspection;
