//! Patient record management
//!
//! Single-tenant patient records over a local key-value store: an in-memory
//! collection with CRUD and search operations, mirrored to storage on every
//! mutation, plus a command-line surface for day-to-day use.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use medrec::{MemoryStore, PatientRepository};
//! use medrec::types::PatientDraft;
//!
//! let repo = PatientRepository::new(Arc::new(MemoryStore::new()));
//! let patient = repo.add(PatientDraft::new("Grace", "Hopper"));
//! assert!(repo.find_by_id(&patient.id).is_some());
//! ```

// Re-export the internal crates
pub use medrec_store as store;
pub use medrec_types as types;

// Convenience re-exports
pub use medrec_store::{
    FileStore, KeyValueStore, MemoryStore, PATIENTS_STORAGE_KEY, PatientRepository,
    StorageAdapter, StoreError,
};
pub use medrec_types::{MedicalRecord, Patient};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
