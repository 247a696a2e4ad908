//! Append a medical-history entry to a patient

use super::output;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Args;
use medrec_store::PatientRepository;
use medrec_types::{MedicalRecordDraft, RecordType};

/// Flags for `medrec record`
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Patient id the entry belongs to
    pub patient_id: String,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Kind of event (visit, diagnosis, treatment, prescription, test)
    #[arg(long = "type")]
    pub record_type: RecordType,

    /// What happened
    #[arg(long)]
    pub description: String,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Practitioner name
    #[arg(long)]
    pub practitioner: Option<String>,
}

pub fn run(repo: &PatientRepository, args: RecordArgs) -> Result<()> {
    let draft = MedicalRecordDraft {
        date: args.date,
        record_type: args.record_type,
        description: args.description,
        notes: args.notes,
        practitioner: args.practitioner,
    };

    match repo.add_medical_record(&args.patient_id, draft) {
        Some(record) => {
            println!(
                "{}",
                output::format_success(&format!(
                    "added {} entry {} to patient {}",
                    record.record_type, record.id, args.patient_id
                ))
            );
            Ok(())
        }
        None => bail!("no patient with id {:?}", args.patient_id),
    }
}
