//! Output formatting utilities

use colored::*;
use medrec_types::Patient;
use tabled::{Table, Tabled, settings::Style};

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {
            if atty::is(atty::Stream::Stdout) {
                colored::control::set_override(true);
            } else {
                colored::control::set_override(false);
            }
        }
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// One row of the patient listing
#[derive(Tabled)]
struct PatientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl PatientRow {
    fn new(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.full_name(),
            age: patient
                .age()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
            gender: patient
                .gender
                .map(|g| g.name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            phone: patient.phone.clone().unwrap_or_else(|| "-".to_string()),
            email: patient.email.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Render a patient collection as a table
pub fn patient_table(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "(no patients)".to_string();
    }
    let rows: Vec<PatientRow> = patients.iter().map(PatientRow::new).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
