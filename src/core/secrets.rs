//! Space secrets.
//!
//! Turns the credential fields of [`Settings`] into the ordered list of
//! runtime secrets attached to the Space at creation.

use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

use crate::core::config::Settings;

/// A key/value pair injected into the Space's environment.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SpaceSecret {
    key: String,
    value: String,
}

impl SpaceSecret {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Environment variable name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SpaceSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceSecret")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl Drop for SpaceSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Build the secret list from settings.
///
/// Order is fixed. A field is kept iff it has non-whitespace content; the
/// value is passed through untrimmed.
pub fn collect(settings: &Settings) -> Vec<SpaceSecret> {
    let fields: [(&str, &str); 12] = [
        ("PASSWORD", settings.password.as_str()),
        ("DATABASE_URL", settings.database_url.as_str()),
        ("CF_KEY", settings.cf_key.as_str()),
        ("TG_BOT_TOKEN", settings.tg_bot_token.as_str()),
        ("TG_USER_ID", settings.tg_user_id.as_str()),
        ("WECHAT_SENDKEY", settings.wechat_sendkey.as_str()),
        ("QMSG_KEY", settings.qmsg_key.as_str()),
        ("QMSG_QQ", settings.qmsg_qq.as_str()),
        ("WEBDAV_URL", settings.webdav_url.as_str()),
        ("WEBDAV_USER", settings.webdav_user.as_str()),
        ("WEBDAV_PASS", settings.webdav_pass.as_str()),
        ("GIT_TOKEN", settings.git_token.as_str()),
    ];

    fields
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| SpaceSecret::new(key, value))
        .collect()
}
