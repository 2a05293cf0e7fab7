//! Files committed into a new Space.

use crate::core::constants::{
    APP_PORT, README_COLOR_FROM, README_COLOR_TO, README_DESCRIPTION, README_EMOJI, SPACE_SDK,
};

/// README.md with the front matter the Hub reads to build and run the Space.
pub fn readme(title: &str) -> String {
    format!(
        "---\n\
         title: {title}\n\
         emoji: {README_EMOJI}\n\
         colorFrom: {README_COLOR_FROM}\n\
         colorTo: {README_COLOR_TO}\n\
         sdk: {SPACE_SDK}\n\
         app_port: {APP_PORT}\n\
         pinned: false\n\
         ---\n\
         {README_DESCRIPTION}\n"
    )
}

/// Single-line Dockerfile pulling `image`.
pub fn dockerfile(image: &str) -> String {
    format!("FROM {image}\n")
}
