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

//! Host build-tool abstraction and hook registration strategies.
//!
//! Two host API shapes are supported: a tap-style registry of named hooks
//! (newer hosts) and a generic `plugin(hook, callback)` method (legacy
//! hosts). Which one is used is decided once per [`ChimePlugin::apply`]
//! call by a capability probe, not per registration.
//!
//! [`ChimePlugin::apply`]: crate::ChimePlugin::apply

use std::collections::HashMap;

use crate::events::BuildStats;

/// Callback registered against a host lifecycle hook.
pub type StatsCallback = Box<dyn Fn(&dyn BuildStats) + Send + Sync>;

/// New-style hook registry: named hooks supporting synchronous tap-style
/// subscription under a plugin label.
pub trait TapHooks {
    /// Subscribe `callback` to the named hook.
    fn tap(&mut self, hook: &str, label: &str, callback: StatsCallback);
}

/// Handle to a host compiler the plugin can register against.
///
/// [`tap_hooks`](Compiler::tap_hooks) doubles as the capability probe:
/// returning `None` routes all registrations through the legacy
/// [`plugin`](Compiler::plugin) path.
pub trait Compiler {
    /// The host's tap registry, if it exposes one.
    fn tap_hooks(&mut self) -> Option<&mut dyn TapHooks>;

    /// Legacy registration path.
    fn plugin(&mut self, hook: &str, callback: StatsCallback);
}

/// Registration strategy, selected once per `apply` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStrategy {
    /// Tap-style subscription on the host's hooks registry.
    Tap,
    /// Generic `plugin(hook, callback)` registration.
    Legacy,
}

impl RegistrationStrategy {
    /// Probe the host's capabilities, preferring the tap registry.
    pub fn probe(compiler: &mut dyn Compiler) -> Self {
        if compiler.tap_hooks().is_some() {
            RegistrationStrategy::Tap
        } else {
            tracing::debug!("host exposes no tap registry, falling back to legacy registration");
            RegistrationStrategy::Legacy
        }
    }

    /// Register a callback through this strategy.
    ///
    /// A `Tap` strategy whose registry is no longer reachable falls through
    /// to the legacy path rather than dropping the registration.
    pub fn register(
        &self,
        compiler: &mut dyn Compiler,
        hook: &str,
        label: &str,
        callback: StatsCallback,
    ) {
        if let RegistrationStrategy::Tap = self {
            if let Some(hooks) = compiler.tap_hooks() {
                hooks.tap(hook, label, callback);
                return;
            }
        }
        compiler.plugin(hook, callback);
    }
}

/// Minimal in-process hook registry for embedding hosts and tests.
///
/// Callbacks are dispatched in registration order.
#[derive(Default)]
pub struct HookMap {
    hooks: HashMap<String, Vec<(String, StatsCallback)>>,
}

impl HookMap {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the named hook, invoking every tapped callback with `stats`.
    pub fn fire(&self, hook: &str, stats: &dyn BuildStats) {
        if let Some(taps) = self.hooks.get(hook) {
            for (_, callback) in taps {
                callback(stats);
            }
        }
    }

    /// Number of callbacks tapped on the named hook.
    pub fn tap_count(&self, hook: &str) -> usize {
        self.hooks.get(hook).map_or(0, Vec::len)
    }

    /// Labels tapped on the named hook, in registration order.
    pub fn labels(&self, hook: &str) -> Vec<&str> {
        self.hooks
            .get(hook)
            .map(|taps| taps.iter().map(|(label, _)| label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Names of hooks with at least one tap.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.keys().map(String::as_str).collect()
    }
}

impl TapHooks for HookMap {
    fn tap(&mut self, hook: &str, label: &str, callback: StatsCallback) {
        self.hooks
            .entry(hook.to_string())
            .or_default()
            .push((label.to_string(), callback));
    }
}

impl Compiler for HookMap {
    fn tap_hooks(&mut self) -> Option<&mut dyn TapHooks> {
        Some(self)
    }

    fn plugin(&mut self, hook: &str, callback: StatsCallback) {
        self.tap(hook, "legacy", callback);
    }
}
