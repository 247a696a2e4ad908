//! Built-in sample dataset
//!
//! Four complete patient records, used to seed a store that holds no data
//! yet. The contents match the demo dataset of the original application,
//! stable ids included, so existing dumps and the seeded state agree.

use crate::{
    Address, EmergencyContact, Gender, MedicalInfo, MedicalRecord, Patient, RecordType,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid sample timestamp")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four built-in sample patients, in seed order
pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: Some(date(1985, 3, 15)),
            gender: Some(Gender::Male),
            phone: Some("(555) 123-4567".to_string()),
            email: Some("john.doe@email.com".to_string()),
            address: Some(Address {
                street: Some("123 Main St".to_string()),
                city: Some("Anytown".to_string()),
                state: Some("CA".to_string()),
                zip_code: Some("12345".to_string()),
            }),
            emergency_contact: Some(EmergencyContact {
                name: Some("Jane Doe".to_string()),
                relationship: Some("Spouse".to_string()),
                phone: Some("(555) 987-6543".to_string()),
            }),
            medical_info: MedicalInfo {
                blood_type: Some("O+".to_string()),
                allergies: strings(&["Penicillin", "Shellfish"]),
                current_medications: strings(&["Lisinopril 10mg", "Metformin 500mg"]),
                chronic_conditions: strings(&["Hypertension", "Type 2 Diabetes"]),
                insurance_provider: Some("Blue Cross Blue Shield".to_string()),
                insurance_id: Some("BCBS123456".to_string()),
            },
            medical_history: vec![
                MedicalRecord {
                    id: "h1".to_string(),
                    date: date(2024, 1, 15),
                    record_type: RecordType::Visit,
                    description: "Annual physical examination".to_string(),
                    notes: Some("Blood pressure: 140/90, BMI: 28.5".to_string()),
                    practitioner: Some("Dr. Smith".to_string()),
                },
                MedicalRecord {
                    id: "h2".to_string(),
                    date: date(2024, 1, 10),
                    record_type: RecordType::Diagnosis,
                    description: "Hypertension diagnosis".to_string(),
                    notes: Some("Prescribed Lisinopril".to_string()),
                    practitioner: Some("Dr. Smith".to_string()),
                },
                MedicalRecord {
                    id: "h3".to_string(),
                    date: date(2023, 11, 20),
                    record_type: RecordType::Prescription,
                    description: "Metformin prescription".to_string(),
                    notes: Some("For diabetes management".to_string()),
                    practitioner: Some("Dr. Johnson".to_string()),
                },
            ],
            created_at: ts(2023, 1, 1),
            updated_at: ts(2024, 1, 15),
        },
        Patient {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            date_of_birth: Some(date(1990, 7, 22)),
            gender: Some(Gender::Female),
            phone: Some("(555) 234-5678".to_string()),
            email: Some("sarah.johnson@email.com".to_string()),
            address: Some(Address {
                street: Some("456 Oak Avenue".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip_code: Some("62701".to_string()),
            }),
            emergency_contact: Some(EmergencyContact {
                name: Some("Michael Johnson".to_string()),
                relationship: Some("Husband".to_string()),
                phone: Some("(555) 876-5432".to_string()),
            }),
            medical_info: MedicalInfo {
                blood_type: Some("A-".to_string()),
                allergies: strings(&["Latex"]),
                current_medications: strings(&["Synthroid 50mcg"]),
                chronic_conditions: strings(&["Hypothyroidism"]),
                insurance_provider: Some("Aetna".to_string()),
                insurance_id: Some("AET789012".to_string()),
            },
            medical_history: vec![
                MedicalRecord {
                    id: "h4".to_string(),
                    date: date(2024, 2, 1),
                    record_type: RecordType::Visit,
                    description: "Thyroid function check".to_string(),
                    notes: Some("TSH levels normal, medication adjustment made".to_string()),
                    practitioner: Some("Dr. Davis".to_string()),
                },
                MedicalRecord {
                    id: "h5".to_string(),
                    date: date(2023, 8, 15),
                    record_type: RecordType::Diagnosis,
                    description: "Hypothyroidism diagnosis".to_string(),
                    notes: Some("Started Synthroid therapy".to_string()),
                    practitioner: Some("Dr. Davis".to_string()),
                },
            ],
            created_at: ts(2023, 2, 15),
            updated_at: ts(2024, 2, 1),
        },
        Patient {
            id: "3".to_string(),
            first_name: "Robert".to_string(),
            last_name: "Williams".to_string(),
            date_of_birth: Some(date(1972, 11, 8)),
            gender: Some(Gender::Male),
            phone: Some("(555) 345-6789".to_string()),
            email: Some("robert.williams@email.com".to_string()),
            address: Some(Address {
                street: Some("789 Pine Street".to_string()),
                city: Some("Riverside".to_string()),
                state: Some("CA".to_string()),
                zip_code: Some("92501".to_string()),
            }),
            emergency_contact: Some(EmergencyContact {
                name: Some("Linda Williams".to_string()),
                relationship: Some("Wife".to_string()),
                phone: Some("(555) 765-4321".to_string()),
            }),
            medical_info: MedicalInfo {
                blood_type: Some("B+".to_string()),
                allergies: Vec::new(),
                current_medications: strings(&["Atorvastatin 20mg", "Aspirin 81mg"]),
                chronic_conditions: strings(&["High Cholesterol", "Coronary Artery Disease"]),
                insurance_provider: Some("United Healthcare".to_string()),
                insurance_id: Some("UHC345678".to_string()),
            },
            medical_history: vec![
                MedicalRecord {
                    id: "h6".to_string(),
                    date: date(2024, 1, 20),
                    record_type: RecordType::Visit,
                    description: "Cardiology follow-up".to_string(),
                    notes: Some(
                        "Cholesterol levels improved, continue current regimen".to_string(),
                    ),
                    practitioner: Some("Dr. Chen".to_string()),
                },
                MedicalRecord {
                    id: "h7".to_string(),
                    date: date(2023, 12, 1),
                    record_type: RecordType::Test,
                    description: "Lipid panel".to_string(),
                    notes: Some("Total cholesterol: 180, LDL: 95, HDL: 45".to_string()),
                    practitioner: Some("Dr. Chen".to_string()),
                },
                MedicalRecord {
                    id: "h8".to_string(),
                    date: date(2023, 6, 15),
                    record_type: RecordType::Diagnosis,
                    description: "Coronary artery disease diagnosis".to_string(),
                    notes: Some(
                        "Mild blockage detected, medication therapy initiated".to_string(),
                    ),
                    practitioner: Some("Dr. Chen".to_string()),
                },
            ],
            created_at: ts(2023, 3, 10),
            updated_at: ts(2024, 1, 20),
        },
        Patient {
            id: "4".to_string(),
            first_name: "Emily".to_string(),
            last_name: "Brown".to_string(),
            date_of_birth: Some(date(1995, 4, 12)),
            gender: Some(Gender::Female),
            phone: Some("(555) 456-7890".to_string()),
            email: Some("emily.brown@email.com".to_string()),
            address: Some(Address {
                street: Some("321 Elm Drive".to_string()),
                city: Some("Madison".to_string()),
                state: Some("WI".to_string()),
                zip_code: Some("53703".to_string()),
            }),
            emergency_contact: Some(EmergencyContact {
                name: Some("David Brown".to_string()),
                relationship: Some("Brother".to_string()),
                phone: Some("(555) 654-3210".to_string()),
            }),
            medical_info: MedicalInfo {
                blood_type: Some("AB+".to_string()),
                allergies: strings(&["Sulfa drugs"]),
                current_medications: strings(&["Albuterol inhaler"]),
                chronic_conditions: strings(&["Asthma"]),
                insurance_provider: Some("Humana".to_string()),
                insurance_id: Some("HUM901234".to_string()),
            },
            medical_history: vec![
                MedicalRecord {
                    id: "h9".to_string(),
                    date: date(2024, 1, 8),
                    record_type: RecordType::Visit,
                    description: "Asthma management review".to_string(),
                    notes: Some("Peak flow measurements within normal range".to_string()),
                    practitioner: Some("Dr. Rodriguez".to_string()),
                },
                MedicalRecord {
                    id: "h10".to_string(),
                    date: date(2023, 9, 20),
                    record_type: RecordType::Diagnosis,
                    description: "Asthma diagnosis".to_string(),
                    notes: Some("Allergic asthma, prescribed inhaler".to_string()),
                    practitioner: Some("Dr. Rodriguez".to_string()),
                },
            ],
            created_at: ts(2023, 4, 5),
            updated_at: ts(2024, 1, 8),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_patients_with_unique_ids() {
        let patients = sample_patients();
        assert_eq!(patients.len(), 4);
        let ids: HashSet<_> = patients.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn histories_are_most_recent_first() {
        for patient in sample_patients() {
            for pair in patient.medical_history.windows(2) {
                assert!(pair[0].date >= pair[1].date, "history out of order for {}", patient.id);
            }
        }
    }

    #[test]
    fn every_sample_has_contact_details() {
        for patient in sample_patients() {
            assert!(patient.phone.is_some());
            assert!(patient.email.is_some());
            assert!(patient.date_of_birth.is_some());
        }
    }
}
