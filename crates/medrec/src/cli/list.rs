//! List and search commands

use super::output;
use anyhow::Result;
use medrec_store::PatientRepository;

/// List every patient on file
pub fn list(repo: &PatientRepository) -> Result<()> {
    println!("{}", output::patient_table(&repo.all()));
    Ok(())
}

/// List the patients matching `query`
pub fn search(repo: &PatientRepository, query: &str) -> Result<()> {
    let matches = repo.search(query);
    if matches.is_empty() {
        println!("no patients match {query:?}");
    } else {
        println!("{}", output::patient_table(&matches));
    }
    Ok(())
}
