//! Capability classes, ids and the device management capability.
//!
//! A capability is an optional facet of functionality. Device managers expose
//! manager capabilities (currently only [`CapabilityClass::DeviceMgmt`]),
//! devices expose device capabilities (keys, pointer, ...).

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use serde::{Deserialize, Serialize};

use crate::manager::DeviceManager;

/// Registered capability classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapabilityClass {
    /// Device manager capability that notifies added, removed and changed devices.
    DeviceMgmt,
    Key,
    Pointer,
    Touch,
    Joystick,
}

impl CapabilityClass {
    pub const ALL: &'static [CapabilityClass] = &[
        CapabilityClass::DeviceMgmt,
        CapabilityClass::Key,
        CapabilityClass::Pointer,
        CapabilityClass::Touch,
        CapabilityClass::Joystick,
    ];

    /// Stable string id of the class.
    pub fn id(self) -> &'static str {
        match self {
            CapabilityClass::DeviceMgmt => "input::DeviceMgmt",
            CapabilityClass::Key => "input::Key",
            CapabilityClass::Pointer => "input::Pointer",
            CapabilityClass::Touch => "input::Touch",
            CapabilityClass::Joystick => "input::Joystick",
        }
    }

    pub fn from_id(id: &str) -> Option<CapabilityClass> {
        Self::ALL.iter().copied().find(|class| class.id() == id)
    }

    /// Whether instances of this class belong to a device manager rather than a device.
    pub fn is_device_manager_capability(self) -> bool {
        matches!(self, CapabilityClass::DeviceMgmt)
    }
}

impl fmt::Display for CapabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Process unique id of a capability instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapabilityId(i32);

static NEXT_CAPABILITY_ID: AtomicI32 = AtomicI32::new(1);

impl CapabilityId {
    pub(crate) fn next() -> Self {
        CapabilityId(NEXT_CAPABILITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The "who owns me" capability of a device manager.
///
/// The back-reference to the owner is weak: holding a capability never keeps
/// its manager alive. A capability is created without a back-reference, the
/// owning manager injects it with [`DeviceMgmtCapability::set_device_manager`]
/// once it can hand out a reference to itself.
pub struct DeviceMgmtCapability {
    id: CapabilityId,
    owner: RwLock<Option<Weak<dyn DeviceManager>>>,
}

impl DeviceMgmtCapability {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            id: CapabilityId::next(),
            owner: RwLock::new(None),
        })
    }

    pub fn id(&self) -> CapabilityId {
        self.id
    }

    pub fn class(&self) -> CapabilityClass {
        CapabilityClass::DeviceMgmt
    }

    /// The manager owning this capability, `None` once it was dropped.
    pub fn device_manager(&self) -> Option<Arc<dyn DeviceManager>> {
        self.owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// The root of the hierarchy the owning manager belongs to.
    pub fn root_device_manager(&self) -> Option<Arc<dyn DeviceManager>> {
        self.device_manager()?.root()
    }

    /// Whether the back-reference currently resolves.
    pub fn is_bound(&self) -> bool {
        self.owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|owner| owner.strong_count() > 0)
    }

    /// Injects the back-reference if it doesn't resolve.
    ///
    /// Returns `true` if the reference was (re)established by this call.
    pub(crate) fn set_device_manager(&self, owner: &Weak<dyn DeviceManager>) -> bool {
        if self.is_bound() {
            return false;
        }
        // Upgrading fails while the owner is still under construction or already gone.
        if owner.strong_count() == 0 {
            return false;
        }
        let mut current = self.owner.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|bound| bound.strong_count() > 0) {
            return false;
        }
        *current = Some(owner.clone());
        tracing::trace!(capability = %self.id, "device mgmt capability bound to its manager");
        true
    }
}

impl fmt::Debug for DeviceMgmtCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceMgmtCapability")
            .field("id", &self.id)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// A capability returned by a device manager lookup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ManagerCapability {
    DeviceMgmt(Arc<DeviceMgmtCapability>),
}

impl ManagerCapability {
    pub fn class(&self) -> CapabilityClass {
        match self {
            ManagerCapability::DeviceMgmt(capability) => capability.class(),
        }
    }

    pub fn id(&self) -> CapabilityId {
        match self {
            ManagerCapability::DeviceMgmt(capability) => capability.id(),
        }
    }

    pub fn device_manager(&self) -> Option<Arc<dyn DeviceManager>> {
        match self {
            ManagerCapability::DeviceMgmt(capability) => capability.device_manager(),
        }
    }

    pub fn as_device_mgmt(&self) -> Option<&Arc<DeviceMgmtCapability>> {
        match self {
            ManagerCapability::DeviceMgmt(capability) => Some(capability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ids_round_trip() {
        for class in CapabilityClass::ALL {
            assert_eq!(CapabilityClass::from_id(class.id()), Some(*class));
        }
        assert_eq!(CapabilityClass::from_id("input::Unknown"), None);
    }

    #[test]
    fn only_device_mgmt_is_a_manager_capability() {
        assert!(CapabilityClass::DeviceMgmt.is_device_manager_capability());
        assert!(!CapabilityClass::Key.is_device_manager_capability());
        assert!(!CapabilityClass::Joystick.is_device_manager_capability());
    }

    #[test]
    fn capability_ids_are_unique() {
        let first = DeviceMgmtCapability::new();
        let second = DeviceMgmtCapability::new();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn new_capability_has_no_manager() {
        let capability = DeviceMgmtCapability::new();
        assert!(!capability.is_bound());
        assert!(capability.device_manager().is_none());
        assert!(capability.root_device_manager().is_none());
    }

    #[test]
    fn dropped_owner_is_not_injected() {
        let capability = DeviceMgmtCapability::new();
        let manager: Arc<dyn DeviceManager> = crate::manager::StdDeviceManager::new(
            vec![],
            vec![],
            crate::manager::EventClassPolicy::EnableAll,
        );
        let dangling = Arc::downgrade(&manager);
        drop(manager);
        assert!(!capability.set_device_manager(&dangling));
        assert!(!capability.is_bound());
        assert!(capability.device_manager().is_none());
    }

    #[test]
    fn owner_is_injected_once() {
        let capability = DeviceMgmtCapability::new();
        let first: Arc<dyn DeviceManager> = crate::manager::StdDeviceManager::new(
            vec![],
            vec![],
            crate::manager::EventClassPolicy::EnableAll,
        );
        let second: Arc<dyn DeviceManager> = crate::manager::StdDeviceManager::new(
            vec![],
            vec![],
            crate::manager::EventClassPolicy::EnableAll,
        );
        assert!(capability.set_device_manager(&Arc::downgrade(&first)));
        assert!(!capability.set_device_manager(&Arc::downgrade(&second)));
        let owner = ManagerCapability::DeviceMgmt(capability.clone())
            .device_manager()
            .unwrap();
        assert_eq!(owner.manager_id(), first.manager_id());
    }
}
