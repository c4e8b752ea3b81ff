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

//! Construction options and their file-loadable form.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ChimeResult;
use crate::events::BuildStats;
use crate::notifications::Response;
use crate::player::PlayerOptions;
use crate::plugin::ChimePlugin;

/// Programmatic construction options for [`ChimePlugin`].
///
/// Every field is a partial override shallow-merged over the defaults; a
/// default (empty) options value leaves the defaults untouched.
///
/// # Example
///
/// ```
/// use chime::ChimeOptions;
///
/// let options = ChimeOptions::new()
///     .notification("$hasWarnings", "nope")
///     .sound("airhorn", "/usr/share/sounds/airhorn.wav")
///     .handler("failed", |plugin, _stats| plugin.play("airhorn"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChimeOptions {
    /// Event-to-response overrides merged over the default notification map.
    pub notifications: HashMap<String, Response>,

    /// Identifier-to-path overrides merged over the default sound library.
    pub sounds: HashMap<String, PathBuf>,

    /// Options forwarded verbatim to the player.
    pub player_options: PlayerOptions,
}

impl ChimeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an event (or `$` alias) to a sound identifier.
    pub fn notification(mut self, event: impl Into<String>, sound: impl Into<String>) -> Self {
        self.notifications.insert(event.into(), Response::sound(sound));
        self
    }

    /// Map an event to a custom handler.
    pub fn handler<F>(mut self, event: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ChimePlugin, &dyn BuildStats) + Send + Sync + 'static,
    {
        self.notifications.insert(event.into(), Response::handler(f));
        self
    }

    /// Register or override a sound in the library.
    pub fn sound(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.sounds.insert(name.into(), path.into());
        self
    }

    /// Set the options forwarded to the player.
    pub fn player_options(mut self, options: PlayerOptions) -> Self {
        self.player_options = options;
        self
    }
}

/// File form of the construction options.
///
/// Responses can only be sound identifiers here; handler responses are
/// attached programmatically through [`ChimeOptions`].
///
/// # Example TOML
///
/// ```toml
/// [notifications]
/// "$hasWarnings" = "nope"
/// failed = "xpError"
///
/// [sounds]
/// oof = "/home/me/sounds/sad-trombone.wav"
///
/// [player]
/// args = ["-q"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChimeConfig {
    /// Event name to sound identifier.
    #[serde(default)]
    pub notifications: HashMap<String, String>,

    /// Sound identifier to file path.
    #[serde(default)]
    pub sounds: HashMap<String, PathBuf>,

    /// Player options.
    #[serde(default)]
    pub player: PlayerOptions,
}

impl ChimeConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> ChimeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> ChimeResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert into programmatic options.
    pub fn into_options(self) -> ChimeOptions {
        ChimeOptions {
            notifications: self
                .notifications
                .into_iter()
                .map(|(event, sound)| (event, Response::Sound(sound)))
                .collect(),
            sounds: self.sounds,
            player_options: self.player,
        }
    }
}

impl From<ChimeConfig> for ChimeOptions {
    fn from(config: ChimeConfig) -> Self {
        config.into_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChimeError;

    #[test]
    fn test_parse_json_config() {
        let config = ChimeConfig::from_json(
            r#"{
                "notifications": {"$hasWarnings": "nope"},
                "sounds": {"oof": "/custom.mp3"},
                "player": {"args": ["-q"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.notifications["$hasWarnings"], "nope");
        assert_eq!(config.sounds["oof"], PathBuf::from("/custom.mp3"));
        assert_eq!(config.player.args, vec!["-q"]);
    }

    #[test]
    fn test_parse_toml_config() {
        let config = ChimeConfig::from_toml(
            r#"
            [notifications]
            failed = "xpError"

            [player]
            program = "mpv"
            "#,
        )
        .unwrap();

        assert_eq!(config.notifications["failed"], "xpError");
        assert_eq!(config.player.program.as_deref(), Some("mpv"));
    }

    #[test]
    fn test_empty_config_yields_empty_overrides() {
        let options = ChimeConfig::from_json("{}").unwrap().into_options();
        assert!(options.notifications.is_empty());
        assert!(options.sounds.is_empty());
        assert_eq!(options.player_options, PlayerOptions::default());
    }

    #[test]
    fn test_parse_error_is_config_parse() {
        let err = ChimeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ChimeError::ConfigParse(_)));
    }

    #[test]
    fn test_into_options_maps_responses() {
        let options = ChimeConfig::from_json(r#"{"notifications": {"done": "levelUp"}}"#)
            .unwrap()
            .into_options();
        assert_eq!(
            options.notifications["done"].as_sound(),
            Some("levelUp")
        );
    }

    #[test]
    fn test_builder() {
        let options = ChimeOptions::new()
            .notification("failed", "xpError")
            .sound("tada", "/tada.wav")
            .handler("done", |_, _| {});

        assert_eq!(options.notifications["failed"].as_sound(), Some("xpError"));
        assert!(options.notifications["done"].as_sound().is_none());
        assert_eq!(options.sounds["tada"], PathBuf::from("/tada.wav"));
    }
}
