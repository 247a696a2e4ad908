//! Patient repository
//!
//! Holds the full patient collection in memory behind a lock and mirrors it
//! through a `StorageAdapter` after every mutation. Each operation is a
//! complete read-modify-write over the collection; persistence is
//! fire-and-forget.

use crate::adapter::{KeyValueStore, StorageAdapter};
use medrec_types::{
    MedicalRecord, MedicalRecordDraft, Patient, PatientDraft, PatientUpdate, sample_patients,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Storage key the patient collection lives under
pub const PATIENTS_STORAGE_KEY: &str = "patient-management-patients";

/// The in-memory patient collection plus its CRUD/search operations
pub struct PatientRepository {
    patients: RwLock<Vec<Patient>>,
    slot: StorageAdapter<Vec<Patient>>,
}

impl PatientRepository {
    /// Open the repository over `store` under the fixed storage key,
    /// seeding the built-in sample patients when the slot holds nothing
    /// usable.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, PATIENTS_STORAGE_KEY)
    }

    /// Like [`new`](Self::new) with an explicit storage key
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let slot = StorageAdapter::new(store, key);
        let patients = slot.read(sample_patients());
        Self {
            patients: RwLock::new(patients),
            slot,
        }
    }

    /// Snapshot of the whole collection, in insertion order
    pub fn all(&self) -> Vec<Patient> {
        self.patients.read().clone()
    }

    /// Number of patients on file
    pub fn len(&self) -> usize {
        self.patients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.read().is_empty()
    }

    /// Create a patient from `draft`, generating the id and timestamps, and
    /// append it to the collection. No duplicate detection is performed.
    pub fn add(&self, draft: PatientDraft) -> Patient {
        let patient = Patient::from_draft(draft);
        let mut patients = self.patients.write();
        patients.push(patient.clone());
        self.slot.write(&patients);
        patient
    }

    /// Shallow-merge `update` over the patient with `id`, refreshing its
    /// last-updated timestamp. Silent no-op when the id is absent.
    pub fn update(&self, id: &str, update: PatientUpdate) {
        let mut patients = self.patients.write();
        if let Some(patient) = patients.iter_mut().find(|p| p.id == id) {
            patient.apply(update);
            self.slot.write(&patients);
        }
    }

    /// Remove the patient with `id`. Silent no-op when the id is absent.
    pub fn delete(&self, id: &str) {
        let mut patients = self.patients.write();
        let before = patients.len();
        patients.retain(|p| p.id != id);
        if patients.len() != before {
            self.slot.write(&patients);
        }
    }

    /// First patient with a matching id
    pub fn find_by_id(&self, id: &str) -> Option<Patient> {
        self.patients.read().iter().find(|p| p.id == id).cloned()
    }

    /// Filter the collection by a free-text query, preserving order.
    ///
    /// A blank query (after trimming) returns every patient. Otherwise a
    /// patient matches when the lowercased query is a substring of the
    /// lowercased first name, last name, or email, or when the query as
    /// given is a literal substring of the phone number or of the ISO
    /// date-of-birth string.
    pub fn search(&self, query: &str) -> Vec<Patient> {
        let patients = self.patients.read();
        if query.trim().is_empty() {
            return patients.clone();
        }

        let lower = query.to_lowercase();
        patients
            .iter()
            .filter(|p| {
                p.first_name.to_lowercase().contains(&lower)
                    || p.last_name.to_lowercase().contains(&lower)
                    || p.email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&lower))
                    || p.phone.as_deref().is_some_and(|phone| phone.contains(query))
                    || p.date_of_birth
                        .is_some_and(|dob| dob.to_string().contains(query))
            })
            .cloned()
            .collect()
    }

    /// Append a history entry to the patient with `patient_id`, generating
    /// the entry id. Entries are prepended, so the history reads most recent
    /// first regardless of the entry's own date. Returns `None` (and changes
    /// nothing) when the patient is absent.
    pub fn add_medical_record(
        &self,
        patient_id: &str,
        draft: MedicalRecordDraft,
    ) -> Option<MedicalRecord> {
        let mut patients = self.patients.write();
        let patient = patients.iter_mut().find(|p| p.id == patient_id)?;

        let record = MedicalRecord::from_draft(draft);
        patient.medical_history.insert(0, record.clone());
        patient.touch();
        self.slot.write(&patients);
        Some(record)
    }
}
