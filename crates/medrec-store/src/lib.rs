//! Storage adapter and patient repository
//!
//! This crate provides:
//! - The `KeyValueStore` seam over the host's durable key-value storage,
//!   with file-backed and in-memory implementations
//! - `StorageAdapter`, binding one serializable value to one storage key
//!   with logged-and-swallowed failure semantics
//! - `PatientRepository`, the in-memory patient collection and its
//!   CRUD/search operations

pub mod adapter;
pub mod repository;

pub use adapter::*;
pub use repository::*;
