//! Completion cue playback

use tokio::{
    io::{stdout, AsyncWriteExt},
    process::Command,
};
use tracing::{debug, info};

/// How the end of a countdown is announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuePlayer {
    /// ASCII bell on stdout
    Bell,
    /// Shell command run through `sh -c`
    Command(String),
    Silent,
}

impl CuePlayer {
    /// Build a player from the optional `--cue-command` value.
    ///
    /// Blank or `#`-commented commands disable the cue.
    pub fn from_command(command: Option<String>) -> Self {
        match command {
            None => CuePlayer::Bell,
            Some(command) => {
                let trimmed = command.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    debug!("Cue command is blank or commented out: {:?}", command);
                    CuePlayer::Silent
                } else {
                    CuePlayer::Command(trimmed.to_string())
                }
            }
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, CuePlayer::Silent)
    }

    /// Play the cue once
    pub async fn play(&self) -> Result<(), String> {
        match self {
            CuePlayer::Silent => Ok(()),
            CuePlayer::Bell => {
                let mut out = stdout();
                out.write_all(b"\x07")
                    .await
                    .map_err(|e| format!("Failed to write bell: {}", e))?;
                out.flush()
                    .await
                    .map_err(|e| format!("Failed to flush bell: {}", e))
            }
            CuePlayer::Command(command) => {
                debug!("Running cue command: {}", command);

                let output = Command::new("sh")
                    .arg("-c")
                    .arg(command)
                    .output()
                    .await
                    .map_err(|e| format!("Failed to execute cue command: {}", e))?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(format!("Cue command failed: {}", stderr.trim()));
                }

                info!("Completion cue played");
                Ok(())
            }
        }
    }
}
