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

//! Sound notifications for build lifecycle events.
//!
//! Chime is a small notification plugin: point it at a host build tool's
//! hook registry and it plays a sound when a compilation ends with errors,
//! warnings, or a recovery after a string of failures. Playback is delegated
//! to an external player binary and is strictly fire-and-forget; a broken
//! sound setup never affects the build itself.
//!
//! # Architecture
//!
//! - [`ChimePlugin`] merges caller options over default mappings and
//!   registers one callback per configured hook event.
//! - [`Compiler`]/[`TapHooks`] abstract the host; two registration API
//!   shapes are supported, selected by a capability probe per
//!   [`apply`](ChimePlugin::apply) call.
//! - The built-in `done` handler tracks consecutive error builds so a clean
//!   build after failures plays a distinct recovery sound.
//!
//! # Example
//!
//! ```
//! use chime::{BuildReport, ChimeOptions, ChimePlugin, HookMap};
//!
//! let plugin = ChimePlugin::new(ChimeOptions::default());
//!
//! let mut host = HookMap::new();
//! plugin.apply(&mut host);
//!
//! // The host fires lifecycle hooks as builds complete.
//! host.fire("done", &BuildReport::success());
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod library;
pub mod notifications;
pub mod player;
pub mod plugin;

// Re-exports
pub use config::{ChimeConfig, ChimeOptions};
pub use error::{ChimeError, ChimeResult};
pub use events::{BuildReport, BuildStats};
pub use host::{Compiler, HookMap, RegistrationStrategy, StatsCallback, TapHooks};
pub use library::SoundLibrary;
pub use notifications::{
    NotificationMap, NotifyHandler, Response, HAS_ERRORS, HAS_WARNINGS, SUCCESS,
    SUCCESS_AFTER_ERRORS,
};
pub use player::{CommandPlayer, PlayerOptions, SoundPlayer};
pub use plugin::ChimePlugin;

/// Label under which tap-style hook registrations are made.
pub const PLUGIN_LABEL: &str = "ChimePlugin";

/// Prefix marking notification-map keys that are aliases consumed by the
/// built-in `done` handler rather than host hook names.
pub const ALIAS_PREFIX: char = '$';
