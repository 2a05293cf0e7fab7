//! Constants used throughout seedspace.
//!
//! Centralizes default endpoints, image references and Space metadata.

/// Hub endpoint used when `--endpoint` / `HF_ENDPOINT` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Image the Dockerfile points at when `--image` is omitted or empty.
pub const DEFAULT_IMAGE: &str = "ghcr.io/zxlwq/domain:latest";

/// Default length of the generated Space name.
pub const DEFAULT_NAME_LENGTH: u16 = 2;

/// Repository type for every repo this tool creates.
pub const REPO_TYPE: &str = "space";

/// Space SDK.
pub const SPACE_SDK: &str = "docker";

/// Branch that uploads are committed to.
pub const REVISION: &str = "main";

/// Port the image listens on, advertised in the README front matter.
pub const APP_PORT: u16 = 3000;

pub const README_PATH: &str = "README.md";
pub const DOCKERFILE_PATH: &str = "Dockerfile";

/// README front matter values.
pub const README_EMOJI: &str = "🌐";
pub const README_COLOR_FROM: &str = "blue";
pub const README_COLOR_TO: &str = "indigo";

/// Line following the front matter.
pub const README_DESCRIPTION: &str = "Space based on the domain project (runs with Docker).";

/// Alphabet for generated Space names.
pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
