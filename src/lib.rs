//! Seedspace - provision a Docker Space on the Hugging Face Hub.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # Provision (or dry-run) a Space
//! │   └── output        # Terminal output helpers
//! └── core/             # Library components
//!     ├── config        # Run settings
//!     ├── constants     # Defaults and Space metadata
//!     ├── hub           # Hub trait and HTTP client
//!     ├── naming        # Random Space names
//!     ├── provision     # whoami -> create -> upload pipeline
//!     ├── secrets       # Secret list from settings
//!     ├── templates     # README.md and Dockerfile
//!     └── types         # Identity, RepoId
//! ```

pub mod cli;
pub mod core;
pub mod error;
