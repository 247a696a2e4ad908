//! Patient and medical-history record shapes
//!
//! Field names serialize in camelCase so a stored collection matches the
//! layout the original browser application persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Error for enum-like fields parsed from user input
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {field} value {value:?}, expected one of: {expected}")]
pub struct UnknownVariantError {
    /// Field being parsed (e.g. "gender")
    pub field: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings
    pub expected: &'static str,
}

/// Administrative gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Lowercase name, as persisted
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(UnknownVariantError {
                field: "gender",
                value: s.to_string(),
                expected: "male, female, other",
            }),
        }
    }
}

/// Kind of clinical event a history entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Visit,
    Diagnosis,
    Treatment,
    Prescription,
    Test,
}

impl RecordType {
    /// Lowercase name, as persisted
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Diagnosis => "diagnosis",
            Self::Treatment => "treatment",
            Self::Prescription => "prescription",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "visit" => Ok(Self::Visit),
            "diagnosis" => Ok(Self::Diagnosis),
            "treatment" => Ok(Self::Treatment),
            "prescription" => Ok(Self::Prescription),
            "test" => Ok(Self::Test),
            _ => Err(UnknownVariantError {
                field: "record type",
                value: s.to_string(),
                expected: "visit, diagnosis, treatment, prescription, test",
            }),
        }
    }
}

/// Postal address; every sub-field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Person to reach in an emergency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Medical profile block
///
/// The three list fields are always present on a patient, empty or not;
/// deserialization fills them in when a stored document omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_id: Option<String>,
}

/// A single dated clinical event attached to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "doctor", default, skip_serializing_if = "Option::is_none")]
    pub practitioner: Option<String>,
}

impl MedicalRecord {
    /// Build a full history entry from a draft, generating the id
    pub fn from_draft(draft: MedicalRecordDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            record_type: draft.record_type,
            description: draft.description,
            notes: draft.notes,
            practitioner: draft.practitioner,
        }
    }
}

/// Input for appending a history entry: everything except the generated id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalRecordDraft {
    pub date: NaiveDate,
    pub record_type: RecordType,
    pub description: String,
    pub notes: Option<String>,
    pub practitioner: Option<String>,
}

/// The full demographic, contact, and medical profile for one individual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Opaque unique id
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub medical_info: MedicalInfo,
    /// History entries, most recent first
    #[serde(default)]
    pub medical_history: Vec<MedicalRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Build a full record from a draft, generating the id and setting both
    /// timestamps to the creation instant.
    pub fn from_draft(draft: PatientDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_birth: draft.date_of_birth,
            gender: draft.gender,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            emergency_contact: draft.emergency_contact,
            medical_info: draft.medical_info,
            medical_history: draft.medical_history,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years as of today, when a birth date is on file
    pub fn age(&self) -> Option<u32> {
        self.date_of_birth.map(crate::age_in_years)
    }

    /// Refresh the last-updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Shallow-merge an update over this record and refresh `updated_at`.
    ///
    /// Present fields replace their counterpart in full; nested blocks swap
    /// atomically rather than merging sub-field by sub-field.
    pub fn apply(&mut self, update: PatientUpdate) {
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = update.gender {
            self.gender = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
        if let Some(v) = update.emergency_contact {
            self.emergency_contact = v;
        }
        if let Some(v) = update.medical_info {
            self.medical_info = v;
        }
        if let Some(v) = update.medical_history {
            self.medical_history = v;
        }
        self.touch();
    }
}

/// Input for creating a patient: everything except the generated id and
/// timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_info: MedicalInfo,
    pub medical_history: Vec<MedicalRecord>,
}

impl PatientDraft {
    /// Draft with the two required name fields set and everything else empty
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}

/// Typed partial update for a patient
///
/// `None` leaves a field alone. For fields that are optional on the patient
/// itself the payload is a nested `Option`, so `Some(None)` clears and
/// `Some(Some(v))` sets. Id and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub gender: Option<Option<Gender>>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub address: Option<Option<Address>>,
    pub emergency_contact: Option<Option<EmergencyContact>>,
    pub medical_info: Option<MedicalInfo>,
    pub medical_history: Option<Vec<MedicalRecord>>,
}

impl PatientUpdate {
    /// Update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the first name
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(Some(value.into()));
        self
    }

    /// Set the email address
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(Some(value.into()));
        self
    }
}
