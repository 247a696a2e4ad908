//! Show one patient in full, history included

use anyhow::{Result, bail};
use colored::*;
use medrec_store::PatientRepository;
use medrec_types::{Address, EmergencyContact, Patient};

pub fn run(repo: &PatientRepository, id: &str) -> Result<()> {
    let Some(patient) = repo.find_by_id(id) else {
        bail!("no patient with id {id:?}");
    };
    print_patient(&patient);
    Ok(())
}

fn print_patient(patient: &Patient) {
    println!("{} {}", patient.full_name().bold(), format!("[{}]", patient.id).dimmed());

    if let Some(dob) = patient.date_of_birth {
        let age = patient.age().map(|a| format!(" ({a} years)")).unwrap_or_default();
        println!("  {} {dob}{age}", "Born:".cyan());
    }
    if let Some(gender) = patient.gender {
        println!("  {} {gender}", "Gender:".cyan());
    }
    if let Some(phone) = &patient.phone {
        println!("  {} {phone}", "Phone:".cyan());
    }
    if let Some(email) = &patient.email {
        println!("  {} {email}", "Email:".cyan());
    }
    if let Some(address) = &patient.address {
        println!("  {} {}", "Address:".cyan(), format_address(address));
    }
    if let Some(contact) = &patient.emergency_contact {
        println!("  {} {}", "Emergency contact:".cyan(), format_contact(contact));
    }

    let info = &patient.medical_info;
    println!("\n{}", "Medical info".bold());
    if let Some(blood_type) = &info.blood_type {
        println!("  {} {blood_type}", "Blood type:".cyan());
    }
    println!("  {} {}", "Allergies:".cyan(), format_list(&info.allergies));
    println!("  {} {}", "Medications:".cyan(), format_list(&info.current_medications));
    println!("  {} {}", "Conditions:".cyan(), format_list(&info.chronic_conditions));
    if let Some(provider) = &info.insurance_provider {
        let insurance_id = info.insurance_id.as_deref().unwrap_or("-");
        println!("  {} {provider} ({insurance_id})", "Insurance:".cyan());
    }

    println!("\n{}", "Medical history".bold());
    if patient.medical_history.is_empty() {
        println!("  (no entries)");
    }
    for record in &patient.medical_history {
        let practitioner = record
            .practitioner
            .as_deref()
            .map(|p| format!(", {p}"))
            .unwrap_or_default();
        println!(
            "  {} {:12} {}{practitioner}",
            record.date.to_string().yellow(),
            record.record_type.name(),
            record.description
        );
        if let Some(notes) = &record.notes {
            println!("      {}", notes.dimmed());
        }
    }

    println!(
        "\n{} created {}, updated {}",
        "Record:".dimmed(),
        patient.created_at.format("%Y-%m-%d"),
        patient.updated_at.format("%Y-%m-%d")
    );
}

fn format_address(address: &Address) -> String {
    let parts: Vec<&str> = [
        address.street.as_deref(),
        address.city.as_deref(),
        address.state.as_deref(),
        address.zip_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn format_contact(contact: &EmergencyContact) -> String {
    let name = contact.name.as_deref().unwrap_or("-");
    let relationship = contact
        .relationship
        .as_deref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default();
    let phone = contact
        .phone
        .as_deref()
        .map(|p| format!(", {p}"))
        .unwrap_or_default();
    format!("{name}{relationship}{phone}")
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_formats_present_parts_only() {
        let address = Address {
            street: Some("123 Main St".to_string()),
            city: None,
            state: Some("CA".to_string()),
            zip_code: None,
        };
        assert_eq!(format_address(&address), "123 Main St, CA");
        assert_eq!(format_address(&Address::default()), "-");
    }

    #[test]
    fn contact_formats_gracefully_when_sparse() {
        let contact = EmergencyContact {
            name: Some("Jane Doe".to_string()),
            relationship: None,
            phone: Some("(555) 987-6543".to_string()),
        };
        assert_eq!(format_contact(&contact), "Jane Doe, (555) 987-6543");
    }
}
