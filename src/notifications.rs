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

//! Event-to-response mapping.
//!
//! Keys are host hook names, except for `$`-prefixed alias keys which are
//! consumed by the built-in `done` handler and never registered as hooks.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::events::BuildStats;
use crate::plugin::{done_handler, ChimePlugin};
use crate::ALIAS_PREFIX;

/// Alias resolved when a build ends with errors.
pub const HAS_ERRORS: &str = "$hasErrors";

/// Alias resolved when a build ends with warnings only. No default entry
/// exists for it; the warning branch is silent unless the caller maps it.
pub const HAS_WARNINGS: &str = "$hasWarnings";

/// Alias resolved on a clean build with no prior errors. No default entry.
pub const SUCCESS: &str = "$success";

/// Alias resolved on a clean build after one or more error builds.
pub const SUCCESS_AFTER_ERRORS: &str = "$successAfterErrors";

/// Custom notification handler, invoked with the plugin and the build stats.
///
/// The handler has full control: it may read and mutate the plugin's error
/// counter and call [`ChimePlugin::play`] directly.
pub type NotifyHandler = Arc<dyn Fn(&ChimePlugin, &dyn BuildStats) + Send + Sync>;

/// Configured reaction to an event.
#[derive(Clone)]
pub enum Response {
    /// Play the sound registered under this identifier.
    Sound(String),
    /// Hand control to a custom handler.
    Handler(NotifyHandler),
}

impl Response {
    /// A sound-identifier response.
    pub fn sound(name: impl Into<String>) -> Self {
        Response::Sound(name.into())
    }

    /// A custom-handler response.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&ChimePlugin, &dyn BuildStats) + Send + Sync + 'static,
    {
        Response::Handler(Arc::new(f))
    }

    /// The sound identifier, if this response is a plain sound.
    pub fn as_sound(&self) -> Option<&str> {
        match self {
            Response::Sound(name) => Some(name),
            Response::Handler(_) => None,
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Sound(name) => f.debug_tuple("Sound").field(name).finish(),
            Response::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// Mapping from event name to configured response.
#[derive(Debug, Clone)]
pub struct NotificationMap {
    entries: HashMap<String, Response>,
}

impl Default for NotificationMap {
    fn default() -> Self {
        Self::defaults()
    }
}

impl NotificationMap {
    /// Map with the stock entries: `$hasErrors -> oof`,
    /// `$successAfterErrors -> levelUp` and the built-in `done` handler.
    pub fn defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert(HAS_ERRORS.to_string(), Response::sound("oof"));
        entries.insert(
            SUCCESS_AFTER_ERRORS.to_string(),
            Response::sound("levelUp"),
        );
        entries.insert("done".to_string(), Response::Handler(Arc::new(done_handler)));
        Self { entries }
    }

    /// A map with no entries at all.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Shallow-merge caller entries over this map.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, Response)>) {
        for (event, response) in entries {
            self.entries.insert(event, response);
        }
    }

    /// Configured response for an event.
    pub fn get(&self, event: &str) -> Option<&Response> {
        self.entries.get(event)
    }

    /// Resolve an alias to a sound identifier.
    ///
    /// Only `Sound` entries resolve; a handler stored under an alias key is
    /// treated as unset.
    pub fn alias_sound(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).and_then(Response::as_sound)
    }

    /// Entries whose keys are host hook names (everything not `$`-prefixed).
    pub fn hook_events(&self) -> impl Iterator<Item = (&str, &Response)> {
        self.entries
            .iter()
            .filter(|(event, _)| !event.starts_with(ALIAS_PREFIX))
            .map(|(event, response)| (event.as_str(), response))
    }

    /// Number of configured entries, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let map = NotificationMap::defaults();
        assert_eq!(map.len(), 3);
        assert_eq!(map.alias_sound(HAS_ERRORS), Some("oof"));
        assert_eq!(map.alias_sound(SUCCESS_AFTER_ERRORS), Some("levelUp"));
        assert!(matches!(map.get("done"), Some(Response::Handler(_))));
    }

    #[test]
    fn test_unset_aliases_do_not_resolve() {
        let map = NotificationMap::defaults();
        assert_eq!(map.alias_sound(HAS_WARNINGS), None);
        assert_eq!(map.alias_sound(SUCCESS), None);
    }

    #[test]
    fn test_handler_under_alias_does_not_resolve() {
        let mut map = NotificationMap::defaults();
        map.merge([(
            HAS_ERRORS.to_string(),
            Response::handler(|_, _| {}),
        )]);
        assert_eq!(map.alias_sound(HAS_ERRORS), None);
    }

    #[test]
    fn test_hook_events_exclude_aliases() {
        let mut map = NotificationMap::defaults();
        map.merge([
            ("failed".to_string(), Response::sound("xpError")),
            (SUCCESS.to_string(), Response::sound("levelUp")),
        ]);

        let mut hooks: Vec<_> = map.hook_events().map(|(event, _)| event).collect();
        hooks.sort_unstable();
        assert_eq!(hooks, vec!["done", "failed"]);
    }

    #[test]
    fn test_merge_overrides_default_entry() {
        let mut map = NotificationMap::defaults();
        map.merge([("done".to_string(), Response::sound("nope"))]);
        assert_eq!(map.get("done").and_then(Response::as_sound), Some("nope"));
        // Other defaults untouched.
        assert_eq!(map.alias_sound(HAS_ERRORS), Some("oof"));
    }

    #[test]
    fn test_response_debug() {
        assert_eq!(format!("{:?}", Response::sound("oof")), r#"Sound("oof")"#);
        assert_eq!(
            format!("{:?}", Response::handler(|_, _| {})),
            "Handler(..)"
        );
    }
}
