//! Translation of platform key codes into [`HardwareKey`]s.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::hardware_key::HardwareKey;

/// A platform key record carrying a raw hardware key code.
pub trait RawKeyEvent {
    fn hardware_keycode(&self) -> u32;
}

pub trait KeyConverter: Send + Sync + fmt::Debug {
    /// `None` if the raw code has no canonical counterpart.
    fn convert_key_code(&self, raw: u32) -> Option<HardwareKey>;

    fn convert_key_event(&self, event: &dyn RawKeyEvent) -> Option<HardwareKey> {
        self.convert_key_code(event.hardware_keycode())
    }
}

/// Converter for X11/evdev style key codes, which are the Linux input codes
/// shifted by [`EvdevKeyConverter::OFFSET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EvdevKeyConverter;

impl EvdevKeyConverter {
    pub const OFFSET: u32 = 8;
}

impl KeyConverter for EvdevKeyConverter {
    fn convert_key_code(&self, raw: u32) -> Option<HardwareKey> {
        raw.checked_sub(Self::OFFSET).map(HardwareKey)
    }
}

/// Holds the converter shared by all backends.
///
/// A converter can be installed once, before anybody asked for one. Asking
/// first installs [`EvdevKeyConverter`].
#[derive(Default)]
pub struct KeyConverterRegistry {
    converter: OnceLock<Arc<dyn KeyConverter>>,
}

static GLOBAL_REGISTRY: KeyConverterRegistry = KeyConverterRegistry::new();

impl KeyConverterRegistry {
    pub const fn new() -> Self {
        Self {
            converter: OnceLock::new(),
        }
    }

    /// The process wide registry.
    pub fn global() -> &'static KeyConverterRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn converter(&self) -> Arc<dyn KeyConverter> {
        self.converter
            .get_or_init(|| {
                debug!("no key converter installed, using evdev");
                Arc::new(EvdevKeyConverter)
            })
            .clone()
    }

    /// Returns `false` if a converter is already in place.
    pub fn install_converter(&self, converter: Arc<dyn KeyConverter>) -> bool {
        let installed = self.converter.set(converter).is_ok();
        if !installed {
            warn!("key converter already installed, ignoring the new one");
        }
        installed
    }

    pub fn is_converter_installed(&self) -> bool {
        self.converter.get().is_some()
    }
}

impl fmt::Debug for KeyConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyConverterRegistry")
            .field("converter", &self.converter.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    struct GdkKey(u32);

    impl RawKeyEvent for GdkKey {
        fn hardware_keycode(&self) -> u32 {
            self.0
        }
    }

    #[derive(Debug)]
    struct Identity;

    impl KeyConverter for Identity {
        fn convert_key_code(&self, raw: u32) -> Option<HardwareKey> {
            Some(HardwareKey(raw))
        }
    }

    #[test]
    fn evdev_conversion() {
        let converter = EvdevKeyConverter;
        assert_eq!(converter.convert_key_code(9), Some(HardwareKey::ESC));
        assert_eq!(converter.convert_key_code(8), Some(HardwareKey::NULL));
        assert_eq!(converter.convert_key_code(7), None);
        assert_eq!(converter.convert_key_code(0), None);
        assert_eq!(converter.convert_key_event(&GdkKey(38)), Some(HardwareKey::A));
    }

    #[test]
    fn out_of_range_codes_pass_through() {
        let converted = EvdevKeyConverter.convert_key_code(0xffff).unwrap();
        assert_eq!(converted.code(), 0xffff - 8);
        assert!(!converted.is_valid());
    }

    #[test]
    fn registry_defaults_to_evdev() {
        let registry = KeyConverterRegistry::new();
        assert!(!registry.is_converter_installed());
        let converter = registry.converter();
        assert!(registry.is_converter_installed());
        assert_eq!(converter.convert_key_code(9), Some(HardwareKey::ESC));
        assert!(!registry.install_converter(Arc::new(Identity)));
        assert_eq!(registry.converter().convert_key_code(9), Some(HardwareKey::ESC));
    }

    #[test]
    fn registry_install_once() {
        let registry = KeyConverterRegistry::new();
        assert!(registry.install_converter(Arc::new(Identity)));
        assert!(registry.is_converter_installed());
        assert!(!registry.install_converter(Arc::new(EvdevKeyConverter)));
        assert_eq!(registry.converter().convert_key_code(9), Some(HardwareKey(9)));
    }

    #[test]
    fn global_registry_is_shared() {
        let first = KeyConverterRegistry::global().converter();
        let second = KeyConverterRegistry::global().converter();
        assert!(Arc::ptr_eq(&first, &second));
    }

    proptest! {
        #[test]
        fn conversion_law(raw in any::<u32>()) {
            let converted = EvdevKeyConverter.convert_key_code(raw);
            if raw < EvdevKeyConverter::OFFSET {
                prop_assert_eq!(converted, None);
            } else {
                prop_assert_eq!(converted, Some(HardwareKey(raw - EvdevKeyConverter::OFFSET)));
            }
        }

        #[test]
        fn event_and_code_agree(raw in 0u32..0x400) {
            prop_assert_eq!(
                EvdevKeyConverter.convert_key_event(&GdkKey(raw)),
                EvdevKeyConverter.convert_key_code(raw)
            );
        }
    }
}
