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

//! Plugin error types

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type for chime operations
pub type ChimeResult<T> = Result<T, ChimeError>;

/// Errors that can occur in the notification plugin.
///
/// None of these ever cross a hook-callback boundary: playback failures are
/// consumed by logging so the host build is never interrupted.
#[derive(Debug, Error)]
pub enum ChimeError {
    // Configuration errors
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    // Player errors
    #[error("No usable audio player found ({0})")]
    NoPlayerAvailable(String),

    #[error("Failed to spawn player '{player}': {source}")]
    PlayerSpawn {
        player: String,
        #[source]
        source: io::Error,
    },

    #[error("Player '{player}' exited with {status}")]
    PlayerExit { player: String, status: ExitStatus },
}

impl From<serde_json::Error> for ChimeError {
    fn from(e: serde_json::Error) -> Self {
        ChimeError::ConfigParse(e.to_string())
    }
}

impl From<toml::de::Error> for ChimeError {
    fn from(e: toml::de::Error) -> Self {
        ChimeError::ConfigParse(e.to_string())
    }
}
