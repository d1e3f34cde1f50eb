//! Bot process management.
//!
//! Spawns the real slircbot binary against a config written into a
//! temporary directory.

use std::process::{Child, Command, ExitStatus};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// A running bot process. Killed on drop.
pub struct TestBot {
    child: Child,
    _dir: TempDir,
}

impl TestBot {
    /// Spawn the bot pointed at `127.0.0.1:<port>`.
    pub fn spawn(port: u16, nick: &str, channel: &str) -> anyhow::Result<Self> {
        let config = format!(
            r#"
[server]
host = "127.0.0.1"
port = {port}

[bot]
nick = "{nick}"
channel = "{channel}"

[pacing]
ms_per_char = 0
"#
        );
        Self::spawn_with_config(&config)
    }

    /// Spawn the bot with an arbitrary config file body.
    pub fn spawn_with_config(config: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, config)?;

        let child = Command::new(env!("CARGO_BIN_EXE_slircbot"))
            .arg(&config_path)
            .env("RUST_LOG", "debug")
            .spawn()?;

        Ok(Self { child, _dir: dir })
    }

    /// Wait for the process to exit on its own.
    pub async fn wait_for_exit(&mut self, within: Duration) -> anyhow::Result<ExitStatus> {
        let step = Duration::from_millis(50);
        let mut waited = Duration::ZERO;
        while waited < within {
            if let Some(status) = self.child.try_wait()? {
                return Ok(status);
            }
            sleep(step).await;
            waited += step;
        }
        anyhow::bail!("bot still running after {within:?}")
    }
}

impl Drop for TestBot {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
