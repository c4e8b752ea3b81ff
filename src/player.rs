// Copyright 2025 Chime Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! External player invocation.
//!
//! Playback is delegated to a player binary resolved from `PATH` and runs on
//! a detached thread. Everything here is fire-and-forget: failures are
//! logged and never reach the caller, and overlapping playbacks are not
//! coordinated.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::error::ChimeError;

/// Player binaries probed, in order, when no override is configured.
const PLAYER_CANDIDATES: &[&str] = &[
    "afplay", "paplay", "aplay", "mpv", "ffplay", "play", "mpg123",
];

/// Options forwarded verbatim to the player on every playback call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Player binary to use instead of probing `PATH` candidates.
    #[serde(default)]
    pub program: Option<String>,

    /// Extra arguments placed before the file path.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Playback backend.
///
/// Implementations must be fire-and-forget: `play` returns immediately and
/// never reports failure to the caller.
pub trait SoundPlayer: Send + Sync {
    /// Start playing the file at `path`.
    fn play(&self, path: &Path, options: &PlayerOptions);
}

/// Default backend: spawns an external player process on a detached thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandPlayer;

impl CommandPlayer {
    pub fn new() -> Self {
        Self
    }

    fn resolve_program(options: &PlayerOptions) -> Result<PathBuf, ChimeError> {
        if let Some(program) = &options.program {
            return which::which(program)
                .map_err(|_| ChimeError::NoPlayerAvailable(format!("'{program}' not on PATH")));
        }
        for candidate in PLAYER_CANDIDATES {
            if let Ok(program) = which::which(candidate) {
                return Ok(program);
            }
        }
        Err(ChimeError::NoPlayerAvailable(format!(
            "tried {}",
            PLAYER_CANDIDATES.join(", ")
        )))
    }

    fn run(program: &Path, file: &Path, options: &PlayerOptions) -> Result<(), ChimeError> {
        let status = Command::new(program)
            .args(&options.args)
            .arg(file)
            .status()
            .map_err(|source| ChimeError::PlayerSpawn {
                player: program.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ChimeError::PlayerExit {
                player: program.display().to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl SoundPlayer for CommandPlayer {
    fn play(&self, path: &Path, options: &PlayerOptions) {
        let program = match Self::resolve_program(options) {
            Ok(program) => program,
            Err(e) => {
                tracing::warn!(error = %e, file = %path.display(), "skipping playback");
                return;
            }
        };

        let file = path.to_path_buf();
        let options = options.clone();
        std::thread::spawn(move || {
            tracing::debug!(
                player = %program.display(),
                file = %file.display(),
                "playing sound"
            );
            if let Err(e) = Self::run(&program, &file, &options) {
                tracing::error!(error = %e, "sound playback failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_is_empty() {
        let options = PlayerOptions::default();
        assert!(options.program.is_none());
        assert!(options.args.is_empty());
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: PlayerOptions = serde_json::from_str(r#"{"args": ["-q"]}"#).unwrap();
        assert!(options.program.is_none());
        assert_eq!(options.args, vec!["-q"]);
    }

    #[test]
    fn test_resolve_missing_override_fails() {
        let options = PlayerOptions {
            program: Some("definitely-not-a-real-player-binary".to_string()),
            args: Vec::new(),
        };
        let err = CommandPlayer::resolve_program(&options).unwrap_err();
        assert!(matches!(err, ChimeError::NoPlayerAvailable(_)));
    }

    #[test]
    fn test_missing_player_does_not_panic() {
        let options = PlayerOptions {
            program: Some("definitely-not-a-real-player-binary".to_string()),
            args: Vec::new(),
        };
        // Resolution fails, playback is skipped, no error surfaces.
        CommandPlayer::new().play(Path::new("/tmp/nope.wav"), &options);
    }
}
