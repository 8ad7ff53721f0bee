//! Capability based input device management.
//!
//! A [`DeviceManager`] tracks the devices of a backend and notifies
//! registered listeners through [`Event`]s. Managers expose their optional
//! functionality as capabilities: the [`DeviceMgmtCapability`] every manager
//! owns resolves back to its manager (and to the root of a
//! [`ParentDeviceManager`] hierarchy) without keeping it alive.
//!
//! Key codes reported by the platform are translated into canonical
//! [`HardwareKey`]s by a [`KeyConverter`], and backends consult the
//! [`KeyRepeat`] policy on how to report held keys.

pub mod capability;
pub mod config;
pub mod device;
pub mod event;
pub mod fake;
pub mod hardware_key;
pub mod key_converter;
pub mod key_repeat;
pub mod manager;

pub use capability::{CapabilityClass, CapabilityId, DeviceMgmtCapability, ManagerCapability};
pub use device::{Device, DeviceId};
pub use event::{CallIf, DeviceMgmtEvent, DeviceMgmtType, Event, EventClass};
pub use hardware_key::HardwareKey;
pub use key_converter::{EvdevKeyConverter, KeyConverter, KeyConverterRegistry, RawKeyEvent};
pub use key_repeat::{KeyRepeat, KeyRepeatMode};
pub use manager::{
    DeviceManager, EventClassPolicy, EventListener, ManagerError, ManagerId, ParentDeviceManager,
    StdDeviceManager,
};
