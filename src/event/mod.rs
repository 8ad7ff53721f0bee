//! Event classes and the device management event.
//!
//! Events are delivered to listeners as `Arc<dyn Event>`. Each event carries
//! its [`EventClass`], the time it originated and the id of the capability
//! that generated it. Concrete event types beyond device management belong to
//! the backends that produce them.

use std::fmt;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

pub mod call_if;

pub use call_if::CallIf;

use crate::capability::{CapabilityClass, CapabilityId, DeviceMgmtCapability};
use crate::device::Device;

/// Registered event classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventClass {
    DeviceMgmt,
    Key,
    Pointer,
    PointerScroll,
    Touch,
    JoystickButton,
    JoystickHat,
    JoystickAxis,
}

impl EventClass {
    pub const ALL: &'static [EventClass] = &[
        EventClass::DeviceMgmt,
        EventClass::Key,
        EventClass::Pointer,
        EventClass::PointerScroll,
        EventClass::Touch,
        EventClass::JoystickButton,
        EventClass::JoystickHat,
        EventClass::JoystickAxis,
    ];

    /// Stable string id of the class.
    pub fn id(self) -> &'static str {
        match self {
            EventClass::DeviceMgmt => "input::DeviceMgmt:DeviceMgmtEvent",
            EventClass::Key => "input::Key:KeyEvent",
            EventClass::Pointer => "input::Pointer:PointerEvent",
            EventClass::PointerScroll => "input::Pointer:PointerScrollEvent",
            EventClass::Touch => "input::Touch:TouchEvent",
            EventClass::JoystickButton => "input::Joystick:JoystickButtonEvent",
            EventClass::JoystickHat => "input::Joystick:JoystickHatEvent",
            EventClass::JoystickAxis => "input::Joystick:JoystickAxisEvent",
        }
    }

    pub fn from_id(id: &str) -> Option<EventClass> {
        Self::ALL.iter().copied().find(|class| class.id() == id)
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An input event as seen by listeners.
pub trait Event: Send + Sync + fmt::Debug {
    fn class(&self) -> EventClass;

    /// Time the event originated, in microseconds.
    fn time_usec(&self) -> i64;

    fn capability_id(&self) -> CapabilityId;

    /// Class of the capability that generated the event.
    fn capability_class(&self) -> CapabilityClass;

    fn as_device_mgmt(&self) -> Option<&DeviceMgmtEvent> {
        None
    }
}

/// What happened to the device of a [`DeviceMgmtEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceMgmtType {
    Added = 1,
    Removed = 2,
    /// Meaning is device specific, for example a sub device was attached.
    Changed = 3,
}

/// Notifies that a device was added to, removed from or changed in a manager.
///
/// Device and capability are stored weakly so that a listener retaining the
/// event doesn't keep either alive.
pub struct DeviceMgmtEvent {
    time_usec: i64,
    capability_id: CapabilityId,
    capability: Weak<DeviceMgmtCapability>,
    mgmt_type: DeviceMgmtType,
    device: Weak<dyn Device>,
}

impl DeviceMgmtEvent {
    pub fn new(
        time_usec: i64,
        capability: &Arc<DeviceMgmtCapability>,
        mgmt_type: DeviceMgmtType,
        device: &Arc<dyn Device>,
    ) -> Self {
        Self {
            time_usec,
            capability_id: capability.id(),
            capability: Arc::downgrade(capability),
            mgmt_type,
            device: Arc::downgrade(device),
        }
    }

    pub fn mgmt_type(&self) -> DeviceMgmtType {
        self.mgmt_type
    }

    /// The capability that generated the event, `None` if it was dropped.
    pub fn device_mgmt_capability(&self) -> Option<Arc<DeviceMgmtCapability>> {
        self.capability.upgrade()
    }

    /// The involved device, `None` if it was dropped.
    ///
    /// A removed device is still reachable during the listener callback.
    pub fn device(&self) -> Option<Arc<dyn Device>> {
        self.device.upgrade()
    }
}

impl Event for DeviceMgmtEvent {
    fn class(&self) -> EventClass {
        EventClass::DeviceMgmt
    }

    fn time_usec(&self) -> i64 {
        self.time_usec
    }

    fn capability_id(&self) -> CapabilityId {
        self.capability_id
    }

    fn capability_class(&self) -> CapabilityClass {
        CapabilityClass::DeviceMgmt
    }

    fn as_device_mgmt(&self) -> Option<&DeviceMgmtEvent> {
        Some(self)
    }
}

impl fmt::Debug for DeviceMgmtEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceMgmtEvent")
            .field("time_usec", &self.time_usec)
            .field("capability_id", &self.capability_id)
            .field("mgmt_type", &self.mgmt_type)
            .field("device", &self.device().map(|device| device.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_class_ids_round_trip() {
        for class in EventClass::ALL {
            assert_eq!(EventClass::from_id(class.id()), Some(*class));
        }
        assert_eq!(EventClass::from_id(""), None);
    }

    #[test]
    fn mgmt_type_discriminants() {
        assert_eq!(DeviceMgmtType::Added as i32, 1);
        assert_eq!(DeviceMgmtType::Removed as i32, 2);
        assert_eq!(DeviceMgmtType::Changed as i32, 3);
    }
}
