//! Create a patient

use super::{output, validate};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use medrec_store::PatientRepository;
use medrec_types::{Address, EmergencyContact, Gender, MedicalInfo, PatientDraft};

/// Flags for `medrec add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Given name
    #[arg(long)]
    pub first_name: String,

    /// Family name
    #[arg(long)]
    pub last_name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,

    /// Gender (male, female, other)
    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip_code: Option<String>,

    /// Emergency contact name
    #[arg(long)]
    pub emergency_name: Option<String>,

    /// Emergency contact relationship
    #[arg(long)]
    pub emergency_relationship: Option<String>,

    /// Emergency contact phone
    #[arg(long)]
    pub emergency_phone: Option<String>,

    #[arg(long)]
    pub blood_type: Option<String>,

    /// May be given multiple times
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// May be given multiple times
    #[arg(long = "medication")]
    pub medications: Vec<String>,

    /// May be given multiple times
    #[arg(long = "condition")]
    pub conditions: Vec<String>,

    #[arg(long)]
    pub insurance_provider: Option<String>,

    #[arg(long)]
    pub insurance_id: Option<String>,
}

impl AddArgs {
    fn address(&self) -> Option<Address> {
        let address = Address {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
        };
        (address != Address::default()).then_some(address)
    }

    fn emergency_contact(&self) -> Option<EmergencyContact> {
        let contact = EmergencyContact {
            name: self.emergency_name.clone(),
            relationship: self.emergency_relationship.clone(),
            phone: self.emergency_phone.clone(),
        };
        (contact != EmergencyContact::default()).then_some(contact)
    }
}

pub fn run(repo: &PatientRepository, args: AddArgs) -> Result<()> {
    if let Some(email) = &args.email {
        validate::validate_email(email)?;
    }

    let draft = PatientDraft {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        date_of_birth: args.date_of_birth,
        gender: args.gender,
        phone: args.phone.clone(),
        email: args.email.clone(),
        address: args.address(),
        emergency_contact: args.emergency_contact(),
        medical_info: MedicalInfo {
            blood_type: args.blood_type.clone(),
            allergies: args.allergies.clone(),
            current_medications: args.medications.clone(),
            chronic_conditions: args.conditions.clone(),
            insurance_provider: args.insurance_provider.clone(),
            insurance_id: args.insurance_id.clone(),
        },
        medical_history: Vec::new(),
    };

    let patient = repo.add(draft);
    println!(
        "{}",
        output::format_success(&format!(
            "added patient {} with id {}",
            patient.full_name(),
            patient.id
        ))
    );
    Ok(())
}
