//! Delete a patient

use super::output;
use anyhow::{Result, bail};
use medrec_store::PatientRepository;

pub fn run(repo: &PatientRepository, id: &str) -> Result<()> {
    let Some(patient) = repo.find_by_id(id) else {
        bail!("no patient with id {id:?}");
    };
    repo.delete(id);
    println!(
        "{}",
        output::format_success(&format!("removed patient {} ({id})", patient.full_name()))
    );
    Ok(())
}
