//! Space provisioning pipeline.
//!
//! Resolves the owner, creates the Space with its secrets, then commits the
//! README and the Dockerfile. Each step waits for the previous one and the
//! first failure stops the run; a Space created before a failed upload is
//! left as it is.

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::constants::{DOCKERFILE_PATH, README_PATH, REPO_TYPE, SPACE_SDK};
use crate::core::hub::Hub;
use crate::core::secrets::{self, SpaceSecret};
use crate::core::types::RepoId;
use crate::core::{naming, templates};
use crate::error::{ConfigError, Result};

/// Everything decided locally before touching the network.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Generated Space name (without owner)
    pub name: String,
    /// Image the Dockerfile pulls
    pub image: String,
    /// Secrets attached at creation
    pub secrets: Vec<SpaceSecret>,
}

impl Plan {
    /// Build a plan with a freshly generated name.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_name(settings, naming::generate(settings.name_length))
    }

    /// Build a plan with a fixed name.
    pub fn with_name(settings: &Settings, name: String) -> Self {
        Self {
            name,
            image: settings.image().to_string(),
            secrets: secrets::collect(settings),
        }
    }

    /// README.md content for this plan.
    pub fn readme(&self) -> String {
        templates::readme(&self.name)
    }

    /// Dockerfile content for this plan.
    pub fn dockerfile(&self) -> String {
        templates::dockerfile(&self.image)
    }
}

/// Run the plan against `hub` and return the created Space's id.
pub async fn provision<H: Hub + ?Sized>(hub: &H, plan: &Plan) -> Result<RepoId> {
    let identity = hub.whoami().await?;
    let owner = identity.name().ok_or(ConfigError::MissingIdentity)?;

    let repo_id = RepoId::new(owner, plan.name.as_str());
    debug!(repo = %repo_id, image = %plan.image, "provisioning space");

    hub.create_repo(&repo_id, REPO_TYPE, SPACE_SDK, &plan.secrets)
        .await?;
    hub.upload_file(&repo_id, README_PATH, plan.readme().as_bytes(), REPO_TYPE)
        .await?;
    hub.upload_file(
        &repo_id,
        DOCKERFILE_PATH,
        plan.dockerfile().as_bytes(),
        REPO_TYPE,
    )
    .await?;

    info!(repo = %repo_id, "space provisioned");
    Ok(repo_id)
}
