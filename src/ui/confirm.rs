//! Confirmation prompt for project creation
//!
//! Service accounts cannot delete projects, so a created project can only be
//! removed by an organization admin in the Mixpanel UI.

use std::io::{self, BufRead, Write};

use crate::mixpanel::NewProject;

/// What is about to be created
#[derive(Debug, Clone)]
pub struct CreationSummary {
    pub name: String,
    pub domain: String,
    pub timezone: String,
    pub host: String,
}

impl CreationSummary {
    pub fn new(project: &NewProject, host: &str) -> Self {
        Self {
            name: project.name.clone(),
            domain: project.domain.to_string(),
            timezone: project.timezone.clone(),
            host: host.to_string(),
        }
    }

    fn describe(&self) -> String {
        format!(
            "About to create Mixpanel project:\n\
             \n\
             \x20 Name:      {}\n\
             \x20 Domain:    {}\n\
             \x20 Timezone:  {}\n\
             \x20 Host:      {}\n\
             \n\
             Service accounts cannot delete projects. Removing it later requires\n\
             an organization admin in the Mixpanel UI.",
            self.name, self.domain, self.timezone, self.host
        )
    }
}

/// Ask the user to confirm project creation
///
/// Returns `true` if the user confirms. `assume_yes` skips the prompt.
/// In batch mode without `assume_yes`, always returns `false` (fails safe).
pub fn confirm_project_creation(summary: &CreationSummary, assume_yes: bool, batch: bool) -> bool {
    if assume_yes {
        return true;
    }

    if batch {
        eprintln!(
            "{}\n\nAborted: batch mode requires --yes to create projects.",
            summary.describe()
        );
        return false;
    }

    eprintln!("{}", summary.describe());
    eprint!("\nProceed? [y/N]: ");
    let _ = io::stderr().flush();

    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> bool {
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
