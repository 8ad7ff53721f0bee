//! Canonical hardware key enumeration.
//!
//! Keys are numbered like the Linux input event codes (`<linux/input.h>`),
//! which makes the evdev conversion a plain offset. Codes without a name are
//! representable too: converters don't validate the upper bound.

use std::fmt;

macro_rules! define_hardware_keys {
    ($($name:ident = $value:expr),* $(,)?) => {
        impl HardwareKey {
            $(pub const $name: HardwareKey = HardwareKey($value);)*

            pub(super) const TABLE: &'static [(HardwareKey, &'static str)] = &[
                $((HardwareKey::$name, stringify!($name)),)*
            ];
        }
    };
}

mod codes;

/// A canonical hardware key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HardwareKey(pub u32);

impl HardwareKey {
    pub const fn code(self) -> u32 {
        self.0
    }

    /// All named keys in ascending order, [`HardwareKey::NULL`] excluded.
    pub fn all() -> impl ExactSizeIterator<Item = HardwareKey> {
        Self::TABLE[1..].iter().map(|(key, _)| *key)
    }

    /// Whether the key has a name. [`HardwareKey::NULL`] is not valid.
    pub fn is_valid(self) -> bool {
        self != Self::NULL && self.table_index().is_some()
    }

    pub fn name(self) -> Option<&'static str> {
        self.table_index().map(|index| Self::TABLE[index].1)
    }

    fn table_index(self) -> Option<usize> {
        Self::TABLE.binary_search_by_key(&self, |(key, _)| *key).ok()
    }
}

impl fmt::Display for HardwareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}
