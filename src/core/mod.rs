//! Core library components.
//!
//! Everything needed to plan and provision a Space, independent of the
//! command-line surface.

pub mod config;
pub mod constants;
pub mod hub;
pub mod naming;
pub mod provision;
pub mod secrets;
pub mod templates;
pub mod types;
