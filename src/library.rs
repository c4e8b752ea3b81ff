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

//! Sound library: identifier to resource-locator mapping.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolve a bundled default asset shipped in the crate's `sounds/`
/// directory.
fn bundled(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("sounds").join(file)
}

/// Mapping from caller-chosen sound identifiers to playable files.
///
/// Four defaults are pre-registered. Caller entries overwrite a default on
/// key collision and extend the library otherwise; a referenced identifier
/// that resolves to nothing is not an error here (playback degrades
/// gracefully at play time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundLibrary {
    sounds: HashMap<String, PathBuf>,
}

impl Default for SoundLibrary {
    fn default() -> Self {
        Self::defaults()
    }
}

impl SoundLibrary {
    /// Library containing only the bundled default sounds:
    /// `oof`, `xpError`, `nope` and `levelUp`.
    pub fn defaults() -> Self {
        let mut sounds = HashMap::new();
        sounds.insert("oof".to_string(), bundled("oof.wav"));
        sounds.insert("xpError".to_string(), bundled("xpError.wav"));
        sounds.insert("nope".to_string(), bundled("nope.wav"));
        sounds.insert("levelUp".to_string(), bundled("levelUp.wav"));
        Self { sounds }
    }

    /// An empty library with no registered sounds.
    pub fn empty() -> Self {
        Self {
            sounds: HashMap::new(),
        }
    }

    /// Shallow-merge caller entries over this library.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, PathBuf)>) {
        for (name, path) in entries {
            self.sounds.insert(name, path);
        }
    }

    /// Resolve an identifier to its resource locator.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.sounds.get(name).map(PathBuf::as_path)
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    /// Number of registered sounds.
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether the library has no sounds at all.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let library = SoundLibrary::defaults();
        assert_eq!(library.len(), 4);
        for name in ["oof", "xpError", "nope", "levelUp"] {
            assert!(library.contains(name), "missing default '{name}'");
        }
    }

    #[test]
    fn test_bundled_assets_exist() {
        let library = SoundLibrary::defaults();
        for name in ["oof", "xpError", "nope", "levelUp"] {
            let path = library.resolve(name).unwrap();
            assert!(path.exists(), "bundled asset missing: {}", path.display());
        }
    }

    #[test]
    fn test_merge_overrides_only_named_key() {
        let defaults = SoundLibrary::defaults();
        let mut library = SoundLibrary::defaults();
        library.merge([("oof".to_string(), PathBuf::from("/custom.mp3"))]);

        assert_eq!(library.resolve("oof").unwrap(), Path::new("/custom.mp3"));
        for name in ["xpError", "nope", "levelUp"] {
            assert_eq!(library.resolve(name), defaults.resolve(name));
        }
    }

    #[test]
    fn test_merge_extends_library() {
        let mut library = SoundLibrary::defaults();
        library.merge([("tada".to_string(), PathBuf::from("/tada.wav"))]);
        assert_eq!(library.len(), 5);
        assert!(library.contains("tada"));
    }

    #[test]
    fn test_merge_nothing_is_noop() {
        let mut library = SoundLibrary::defaults();
        library.merge(HashMap::new());
        assert_eq!(library, SoundLibrary::defaults());
    }

    #[test]
    fn test_unknown_identifier_resolves_to_none() {
        assert!(SoundLibrary::defaults().resolve("fanfare").is_none());
    }
}
