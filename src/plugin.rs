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

//! The notification plugin: merges configuration, registers against a host
//! compiler, and reacts to fired hooks.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::config::ChimeOptions;
use crate::events::BuildStats;
use crate::host::{Compiler, RegistrationStrategy, StatsCallback};
use crate::library::SoundLibrary;
use crate::notifications::{
    NotificationMap, Response, HAS_ERRORS, HAS_WARNINGS, SUCCESS, SUCCESS_AFTER_ERRORS,
};
use crate::player::{CommandPlayer, PlayerOptions, SoundPlayer};
use crate::PLUGIN_LABEL;

struct Inner {
    notifications: NotificationMap,
    sounds: SoundLibrary,
    player_options: PlayerOptions,
    player: Box<dyn SoundPlayer>,
    error_count: AtomicU32,
}

/// Sound notification plugin for build lifecycle hooks.
///
/// Cloning is cheap and shares state: every callback registered by
/// [`apply`](ChimePlugin::apply) carries a clone of the same plugin, and the
/// error counter is shared between them. Each plugin instance owns its own
/// merged mappings; instances never share defaults.
#[derive(Clone)]
pub struct ChimePlugin {
    inner: Arc<Inner>,
}

impl Default for ChimePlugin {
    fn default() -> Self {
        Self::new(ChimeOptions::default())
    }
}

impl ChimePlugin {
    /// Build a plugin, shallow-merging `options` over the defaults.
    ///
    /// There are no error conditions: empty options leave the defaults
    /// untouched.
    pub fn new(options: ChimeOptions) -> Self {
        Self::with_player(options, Box::new(CommandPlayer::new()))
    }

    /// Build a plugin with a custom playback backend.
    pub fn with_player(options: ChimeOptions, player: Box<dyn SoundPlayer>) -> Self {
        let mut notifications = NotificationMap::defaults();
        notifications.merge(options.notifications);

        let mut sounds = SoundLibrary::defaults();
        sounds.merge(options.sounds);

        Self {
            inner: Arc::new(Inner {
                notifications,
                sounds,
                player_options: options.player_options,
                player,
                error_count: AtomicU32::new(0),
            }),
        }
    }

    /// Register one callback per configured hook event against the host.
    ///
    /// The registration strategy is probed once per call. `$`-prefixed alias
    /// keys are consumed internally and never registered as hooks.
    pub fn apply(&self, compiler: &mut dyn Compiler) {
        let strategy = RegistrationStrategy::probe(compiler);
        for (event, response) in self.inner.notifications.hook_events() {
            tracing::debug!(?strategy, hook = event, "registering notification hook");
            let plugin = self.clone();
            let response = response.clone();
            let callback: StatsCallback = Box::new(move |stats: &dyn BuildStats| {
                match &response {
                    Response::Handler(handler) => handler(&plugin, stats),
                    Response::Sound(sound) => plugin.play(sound),
                }
            });
            strategy.register(compiler, event, PLUGIN_LABEL, callback);
        }
    }

    /// Play a registered sound through the configured backend.
    ///
    /// An unknown identifier degrades to a log line; playback failures never
    /// reach the caller.
    pub fn play(&self, sound: &str) {
        match self.inner.sounds.resolve(sound) {
            Some(path) => self.inner.player.play(path, &self.inner.player_options),
            None => tracing::warn!(
                sound,
                "no such registered sound, register it when constructing the plugin"
            ),
        }
    }

    /// Play the sound an alias key resolves to, if any.
    pub fn play_alias(&self, alias: &str) {
        if let Some(sound) = self.inner.notifications.alias_sound(alias) {
            self.play(sound);
        }
    }

    /// Consecutive error builds observed by the built-in `done` handler.
    pub fn error_count(&self) -> u32 {
        self.inner.error_count.load(Ordering::SeqCst)
    }

    /// Overwrite the error counter. Exposed for custom handlers.
    pub fn set_error_count(&self, count: u32) {
        self.inner.error_count.store(count, Ordering::SeqCst);
    }

    /// Increment the error counter, returning the new value. Exposed for
    /// custom handlers.
    pub fn bump_error_count(&self) -> u32 {
        self.inner.error_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The merged notification map.
    pub fn notifications(&self) -> &NotificationMap {
        &self.inner.notifications
    }

    /// The merged sound library.
    pub fn sounds(&self) -> &SoundLibrary {
        &self.inner.sounds
    }

    /// Options forwarded to the player on every playback.
    pub fn player_options(&self) -> &PlayerOptions {
        &self.inner.player_options
    }
}

/// Built-in handler for the `done` hook.
///
/// Errors take absolute precedence over warnings; warnings are only
/// actionable when `$hasWarnings` is mapped to a sound. A clean build after
/// one or more error builds plays `$successAfterErrors`, a fresh clean build
/// plays `$success`; either way the counter resets to zero.
pub(crate) fn done_handler(plugin: &ChimePlugin, stats: &dyn BuildStats) {
    if stats.has_errors() {
        plugin.bump_error_count();
        plugin.play_alias(HAS_ERRORS);
    } else if stats.has_warnings() && plugin.notifications().alias_sound(HAS_WARNINGS).is_some() {
        plugin.play_alias(HAS_WARNINGS);
    } else {
        if plugin.error_count() > 0 {
            plugin.play_alias(SUCCESS_AFTER_ERRORS);
        } else {
            plugin.play_alias(SUCCESS);
        }
        plugin.set_error_count(0);
    }
}
