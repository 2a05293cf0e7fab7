//! Create command - provision a new Space.

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::hub::HubClient;
use crate::core::provision::{self, Plan};
use crate::error::{HubError, Result};

/// Provision a Space and print its id.
pub fn execute(settings: &Settings) -> Result<()> {
    settings.validate()?;

    let plan = Plan::from_settings(settings);
    let client = HubClient::new(settings.endpoint(), &settings.token)?;

    // One sequential run; a current-thread runtime is enough.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| HubError::Runtime(e.to_string()))?;
    let repo_id = rt.block_on(provision::provision(&client, &plan))?;

    output::success(&format!("Space created: {}", repo_id));
    output::kv(
        "url:",
        output::path(&format!("{}/spaces/{}", settings.endpoint(), repo_id)),
    );
    output::kv("image:", &plan.image);
    output::kv("secrets:", plan.secrets.len());

    Ok(())
}

/// Print what would be created without calling the Hub.
pub fn dry_run(settings: &Settings) -> Result<()> {
    settings.validate()?;

    let plan = Plan::from_settings(settings);

    output::header(&format!("Space <owner>/{}", plan.name));

    output::section("README.md");
    print!("{}", plan.readme());

    output::section("Dockerfile");
    print!("{}", plan.dockerfile());

    output::section("Secrets");
    if plan.secrets.is_empty() {
        output::dimmed("no secrets");
    }
    for secret in &plan.secrets {
        output::list_item(&output::key(secret.key()));
    }

    println!();
    output::hint("dry run: nothing was created");
    Ok(())
}
