//! Run settings.
//!
//! A flat record of everything one provisioning run needs. The CLI fills it
//! in; the rest of the crate only reads it.

use std::fmt;
use zeroize::Zeroize;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings for a single run.
#[derive(Clone, Default)]
pub struct Settings {
    /// Hub access token (needs write scope)
    pub token: String,
    /// Docker image the Space runs; empty means the default image
    pub image: String,
    /// Hub API base URL
    pub endpoint: String,
    /// Length of the generated Space name
    pub name_length: usize,

    pub password: String,
    pub database_url: String,
    pub cf_key: String,
    pub tg_bot_token: String,
    pub tg_user_id: String,
    pub wechat_sendkey: String,
    pub qmsg_key: String,
    pub qmsg_qq: String,
    pub webdav_url: String,
    pub webdav_user: String,
    pub webdav_pass: String,
    pub git_token: String,
}

impl Settings {
    /// Fail early if the token is empty.
    ///
    /// Runs before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(ConfigError::EmptyToken.into());
        }
        Ok(())
    }

    /// Image reference for the Dockerfile, falling back to the default.
    pub fn image(&self) -> &str {
        if self.image.is_empty() {
            constants::DEFAULT_IMAGE
        } else {
            &self.image
        }
    }

    /// Endpoint without trailing slashes, falling back to the public Hub.
    pub fn endpoint(&self) -> &str {
        let trimmed = self.endpoint.trim_end_matches('/');
        if trimmed.is_empty() {
            constants::DEFAULT_ENDPOINT
        } else {
            trimmed
        }
    }
}

impl Zeroize for Settings {
    fn zeroize(&mut self) {
        for field in [
            &mut self.token,
            &mut self.password,
            &mut self.database_url,
            &mut self.cf_key,
            &mut self.tg_bot_token,
            &mut self.tg_user_id,
            &mut self.wechat_sendkey,
            &mut self.qmsg_key,
            &mut self.qmsg_qq,
            &mut self.webdav_url,
            &mut self.webdav_user,
            &mut self.webdav_pass,
            &mut self.git_token,
        ] {
            field.zeroize();
        }
    }
}

// Every field except the layout ones is a credential.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("image", &self.image())
            .field("endpoint", &self.endpoint())
            .field("name_length", &self.name_length)
            .finish_non_exhaustive()
    }
}
