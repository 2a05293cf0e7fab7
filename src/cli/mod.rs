//! Command-line interface.

pub mod create;
pub mod output;

use clap::Parser;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants::{DEFAULT_ENDPOINT, DEFAULT_NAME_LENGTH};

/// Seedspace - provision a Docker Space on the Hugging Face Hub.
#[derive(Parser)]
#[command(
    name = "seedspace",
    about = "Provision a Docker Space on the Hugging Face Hub with runtime secrets",
    version
)]
pub struct Cli {
    /// Hugging Face token (needs write access)
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Docker image the Space runs [default: ghcr.io/zxlwq/domain:latest]
    #[arg(long)]
    pub image: Option<String>,

    /// Admin password
    #[arg(long)]
    pub password: String,

    /// Database connection string
    #[arg(long)]
    pub database_url: String,

    /// Cloudflare API token
    #[arg(long, default_value = "")]
    pub cf_key: String,

    /// Telegram bot token
    #[arg(long, default_value = "")]
    pub tg_bot_token: String,

    /// Telegram chat id
    #[arg(long, default_value = "")]
    pub tg_user_id: String,

    /// WeChat ServerChan send key
    #[arg(long, default_value = "")]
    pub wechat_sendkey: String,

    /// Qmsg key
    #[arg(long, default_value = "")]
    pub qmsg_key: String,

    /// Qmsg receiving QQ number
    #[arg(long, default_value = "")]
    pub qmsg_qq: String,

    /// WebDAV URL
    #[arg(long, default_value = "")]
    pub webdav_url: String,

    /// WebDAV user name
    #[arg(long, default_value = "")]
    pub webdav_user: String,

    /// WebDAV password
    #[arg(long, default_value = "")]
    pub webdav_pass: String,

    /// GitHub token
    #[arg(long, default_value = "")]
    pub git_token: String,

    /// Hub API endpoint
    #[arg(long, env = "HF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Length of the generated Space name
    #[arg(
        long,
        default_value_t = DEFAULT_NAME_LENGTH,
        value_parser = clap::value_parser!(u16).range(1..=96)
    )]
    pub name_length: u16,

    /// Show the Space that would be created without calling the Hub
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collect the run settings from parsed flags.
    pub fn settings(&self) -> Settings {
        Settings {
            token: self.token.clone(),
            image: self.image.clone().unwrap_or_default(),
            endpoint: self.endpoint.clone(),
            name_length: usize::from(self.name_length),
            password: self.password.clone(),
            database_url: self.database_url.clone(),
            cf_key: self.cf_key.clone(),
            tg_bot_token: self.tg_bot_token.clone(),
            tg_user_id: self.tg_user_id.clone(),
            wechat_sendkey: self.wechat_sendkey.clone(),
            qmsg_key: self.qmsg_key.clone(),
            qmsg_qq: self.qmsg_qq.clone(),
            webdav_url: self.webdav_url.clone(),
            webdav_user: self.webdav_user.clone(),
            webdav_pass: self.webdav_pass.clone(),
            git_token: self.git_token.clone(),
        }
    }
}

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    // Credentials are wiped once the run finishes.
    let settings = Zeroizing::new(cli.settings());
    if cli.dry_run {
        create::dry_run(&settings)
    } else {
        create::execute(&settings)
    }
}
