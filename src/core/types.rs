//! Shared types.

use serde::Deserialize;
use std::fmt;

/// The caller as reported by the Hub's whoami endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identity {
    /// Account name; the namespace new Spaces are created under
    #[serde(default)]
    pub name: Option<String>,
}

impl Identity {
    /// The account name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// `owner/name` address of a repository on the Hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
