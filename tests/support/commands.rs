//! Command helper methods for Test.

use super::{Test, DATABASE_URL, PASSWORD, TOKEN};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a seedspace command with a clean environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("seedspace").expect("failed to find seedspace binary");
        cmd.env_remove("HF_TOKEN");
        cmd.env_remove("SEEDSPACE_LOG");
        cmd.env("HF_ENDPOINT", &self.endpoint);
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Command with the three required flags already set.
    pub fn provision_cmd(&self, token: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "--token",
            token,
            "--password",
            PASSWORD,
            "--database-url",
            DATABASE_URL,
        ]);
        cmd
    }

    /// Shortcut for a full provisioning run with extra flags.
    pub fn provision(&self, extra: &[&str]) -> Output {
        self.provision_cmd(TOKEN)
            .args(extra)
            .output()
            .expect("failed to run seedspace")
    }

    /// Shortcut for `seedspace --dry-run` with extra flags.
    pub fn dry_run(&self, extra: &[&str]) -> Output {
        self.provision_cmd(TOKEN)
            .arg("--dry-run")
            .args(extra)
            .output()
            .expect("failed to run seedspace --dry-run")
    }
}
