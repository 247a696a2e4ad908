//! Patient record data model
//!
//! This crate defines the shapes shared across the medrec workspace:
//! - `Patient` and its nested demographic, contact, and medical blocks
//! - `MedicalRecord` history entries
//! - Typed draft and update structs for creation and partial edits
//! - Age derivation from a date of birth
//! - The built-in sample dataset used to seed an empty store

pub mod age;
pub mod patient;
pub mod sample;

pub use age::*;
pub use patient::*;
pub use sample::*;
