//! Edit fields of an existing patient

use super::{output, validate};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Args;
use medrec_store::PatientRepository;
use medrec_types::{Gender, PatientUpdate};

/// Flags for `medrec edit`; omitted flags leave the field untouched
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Patient id
    pub id: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

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

    /// Replaces the whole allergy list; may be given multiple times
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Replaces the whole medication list; may be given multiple times
    #[arg(long = "medication")]
    pub medications: Vec<String>,

    /// Replaces the whole condition list; may be given multiple times
    #[arg(long = "condition")]
    pub conditions: Vec<String>,

    #[arg(long)]
    pub insurance_provider: Option<String>,

    #[arg(long)]
    pub insurance_id: Option<String>,
}

pub fn run(repo: &PatientRepository, args: EditArgs) -> Result<()> {
    // The repository treats an absent id as a silent no-op; the command
    // checks first so the user hears about a typo.
    let Some(existing) = repo.find_by_id(&args.id) else {
        bail!("no patient with id {:?}", args.id);
    };
    if let Some(email) = &args.email {
        validate::validate_email(email)?;
    }

    let mut update = PatientUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        date_of_birth: args.date_of_birth.map(Some),
        gender: args.gender.map(Some),
        phone: args.phone.map(Some),
        email: args.email.map(Some),
        ..PatientUpdate::default()
    };

    // Address and medical-info blocks swap atomically in an update, so
    // fold the flags into a copy of the current block first.
    if args.street.is_some()
        || args.city.is_some()
        || args.state.is_some()
        || args.zip_code.is_some()
    {
        let mut address = existing.address.clone().unwrap_or_default();
        if args.street.is_some() {
            address.street = args.street;
        }
        if args.city.is_some() {
            address.city = args.city;
        }
        if args.state.is_some() {
            address.state = args.state;
        }
        if args.zip_code.is_some() {
            address.zip_code = args.zip_code;
        }
        update.address = Some(Some(address));
    }

    if args.emergency_name.is_some()
        || args.emergency_relationship.is_some()
        || args.emergency_phone.is_some()
    {
        let mut contact = existing.emergency_contact.clone().unwrap_or_default();
        if args.emergency_name.is_some() {
            contact.name = args.emergency_name;
        }
        if args.emergency_relationship.is_some() {
            contact.relationship = args.emergency_relationship;
        }
        if args.emergency_phone.is_some() {
            contact.phone = args.emergency_phone;
        }
        update.emergency_contact = Some(Some(contact));
    }

    if args.blood_type.is_some()
        || !args.allergies.is_empty()
        || !args.medications.is_empty()
        || !args.conditions.is_empty()
        || args.insurance_provider.is_some()
        || args.insurance_id.is_some()
    {
        let mut info = existing.medical_info.clone();
        if args.blood_type.is_some() {
            info.blood_type = args.blood_type;
        }
        if !args.allergies.is_empty() {
            info.allergies = args.allergies;
        }
        if !args.medications.is_empty() {
            info.current_medications = args.medications;
        }
        if !args.conditions.is_empty() {
            info.chronic_conditions = args.conditions;
        }
        if args.insurance_provider.is_some() {
            info.insurance_provider = args.insurance_provider;
        }
        if args.insurance_id.is_some() {
            info.insurance_id = args.insurance_id;
        }
        update.medical_info = Some(info);
    }

    if update.is_empty() {
        println!("nothing to change for {}", existing.full_name());
        return Ok(());
    }

    repo.update(&args.id, update);
    println!(
        "{}",
        output::format_success(&format!("updated patient {}", args.id))
    );
    Ok(())
}
