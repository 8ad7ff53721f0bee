//! How backends translate auto-repeated key presses.
//!
//! Platforms report a held key as `Press Press Press Release`. Listeners
//! never see a press that isn't answered by a release, so backends rewrite the
//! sequence according to the [`KeyRepeatMode`]:
//!
//! ```text
//! Suppress          Press                 Release
//! AddRelease        Press Release Press Release Press Release
//! AddReleaseCancel  Press Cancel  Press Cancel  Press Release
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum KeyRepeatMode {
    Suppress = 1,
    AddRelease = 2,
    AddReleaseCancel = 3,
}

impl KeyRepeatMode {
    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(KeyRepeatMode::Suppress),
            2 => Some(KeyRepeatMode::AddRelease),
            3 => Some(KeyRepeatMode::AddReleaseCancel),
            _ => None,
        }
    }
}

const UNSET: u8 = 0;

/// The key repeat mode shared by the backends.
///
/// The mode can be set once. Reading it while unset fixes it to
/// [`KeyRepeatMode::Suppress`], so it must be set before the first backend
/// is created.
#[derive(Debug)]
pub struct KeyRepeat {
    mode: AtomicU8,
}

static GLOBAL_KEY_REPEAT: KeyRepeat = KeyRepeat::new();

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyRepeat {
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(UNSET),
        }
    }

    /// The process wide policy.
    pub fn global() -> &'static KeyRepeat {
        &GLOBAL_KEY_REPEAT
    }

    /// Returns `false`, leaving the current mode, if a mode is already set.
    pub fn set_mode(&self, mode: KeyRepeatMode) -> bool {
        match self
            .mode
            .compare_exchange(UNSET, mode as u8, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                debug!(?mode, "key repeat mode set");
                true
            }
            Err(current) => {
                warn!(
                    requested = ?mode,
                    current = ?KeyRepeatMode::from_raw(current),
                    "key repeat mode already set"
                );
                false
            }
        }
    }

    /// The current mode. Fixes [`KeyRepeatMode::Suppress`] if none was set.
    pub fn mode(&self) -> KeyRepeatMode {
        let raw = match self.mode.compare_exchange(
            UNSET,
            KeyRepeatMode::Suppress as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => KeyRepeatMode::Suppress as u8,
            Err(current) => current,
        };
        KeyRepeatMode::from_raw(raw).unwrap_or(KeyRepeatMode::Suppress)
    }

    pub fn is_mode_set(&self) -> bool {
        self.mode.load(Ordering::Acquire) != UNSET
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn first_write_wins() {
        let repeat = KeyRepeat::new();
        assert!(!repeat.is_mode_set());
        assert!(repeat.set_mode(KeyRepeatMode::AddRelease));
        assert!(repeat.is_mode_set());
        assert!(!repeat.set_mode(KeyRepeatMode::AddReleaseCancel));
        assert_eq!(repeat.mode(), KeyRepeatMode::AddRelease);
    }

    #[test]
    fn reading_latches_the_default() {
        let repeat = KeyRepeat::new();
        assert_eq!(repeat.mode(), KeyRepeatMode::Suppress);
        assert!(repeat.is_mode_set());
        assert!(!repeat.set_mode(KeyRepeatMode::AddRelease));
        assert_eq!(repeat.mode(), KeyRepeatMode::Suppress);
    }

    #[test]
    fn is_mode_set_does_not_latch() {
        let repeat = KeyRepeat::new();
        assert!(!repeat.is_mode_set());
        assert!(!repeat.is_mode_set());
        assert!(repeat.set_mode(KeyRepeatMode::AddReleaseCancel));
    }

    #[test]
    fn one_winner_across_threads() {
        let repeat = Arc::new(KeyRepeat::new());
        let modes = [
            KeyRepeatMode::Suppress,
            KeyRepeatMode::AddRelease,
            KeyRepeatMode::AddReleaseCancel,
        ];
        let handles: Vec<_> = modes
            .into_iter()
            .map(|mode| {
                let repeat = repeat.clone();
                thread::spawn(move || (mode, repeat.set_mode(mode)))
            })
            .collect();
        let winners: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|(_, won)| *won)
            .collect();
        assert_eq!(winners.len(), 1);
        assert_eq!(repeat.mode(), winners[0].0);
    }

    #[test]
    fn modes_deserialize_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: KeyRepeatMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"add_release_cancel\"").unwrap();
        assert_eq!(parsed.mode, KeyRepeatMode::AddReleaseCancel);
    }
}
