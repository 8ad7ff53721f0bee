use std::fmt;
use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use super::basic::{BasicDeviceManager, EventClassPolicy};
use super::listener::EventListener;
use super::{now_time_microseconds, start_clock, DeviceManager, HierarchyLink, ManagerId};
use crate::capability::{CapabilityClass, CapabilityId, DeviceMgmtCapability, ManagerCapability};
use crate::device::{Device, DeviceId};
use crate::event::{CallIf, DeviceMgmtEvent, DeviceMgmtType, Event, EventClass};

/// Device manager owning exactly one [`DeviceMgmtCapability`].
///
/// Backends build on it: they register their devices with
/// [`StdDeviceManager::add_device`] and friends, which take care of notifying
/// the listeners.
pub struct StdDeviceManager {
    id: ManagerId,
    link: HierarchyLink,
    base: BasicDeviceManager,
    capability: Arc<DeviceMgmtCapability>,
    device_mgmt_index: Option<usize>,
}

impl StdDeviceManager {
    /// `event_classes` always gets [`EventClass::DeviceMgmt`] added if missing.
    pub fn new(
        device_capability_classes: Vec<CapabilityClass>,
        event_classes: Vec<EventClass>,
        policy: EventClassPolicy,
    ) -> Arc<Self> {
        start_clock();
        let mut event_classes = event_classes;
        if !event_classes.contains(&EventClass::DeviceMgmt) {
            event_classes.insert(0, EventClass::DeviceMgmt);
        }
        let base = BasicDeviceManager::new(
            vec![CapabilityClass::DeviceMgmt],
            device_capability_classes,
            event_classes,
            &policy,
        );
        let device_mgmt_index = base.event_class_index(EventClass::DeviceMgmt);
        let manager = Arc::new_cyclic(|me: &Weak<StdDeviceManager>| {
            let me: Weak<dyn DeviceManager> = me.clone();
            Self {
                id: ManagerId::next(),
                link: HierarchyLink::new(me),
                base,
                capability: DeviceMgmtCapability::new(),
                device_mgmt_index,
            }
        });
        debug!(
            manager = %manager.id,
            capability = %manager.capability.id(),
            "device manager created"
        );
        manager
    }

    pub fn base(&self) -> &BasicDeviceManager {
        &self.base
    }

    /// The capability with its back-reference repaired.
    ///
    /// The reference can't be set during construction because no strong
    /// reference to the manager exists yet, so every accessor goes through
    /// here. Once set this is a read lock and a counter check.
    fn checked_capability(&self) -> &Arc<DeviceMgmtCapability> {
        self.capability.set_device_manager(self.link.me());
        &self.capability
    }

    /// Registers `device` and notifies [`DeviceMgmtType::Added`].
    ///
    /// Returns `false` without notifying if the device is already present.
    pub fn add_device(&self, device: Arc<dyn Device>) -> bool {
        if !self.base.add_device(device.clone()) {
            return false;
        }
        debug!(manager = %self.id, device = %device.id(), name = %device.name(), "device added");
        self.send_device_mgmt_to_listeners(DeviceMgmtType::Added, &device);
        true
    }

    /// Unregisters a device and notifies [`DeviceMgmtType::Removed`].
    ///
    /// The device stays alive at least until the listeners were called.
    pub fn remove_device(&self, id: DeviceId) -> Option<Arc<dyn Device>> {
        let device = self.base.remove_device(id)?;
        debug!(manager = %self.id, device = %id, "device removed");
        self.send_device_mgmt_to_listeners(DeviceMgmtType::Removed, &device);
        Some(device)
    }

    /// Notifies [`DeviceMgmtType::Changed`] for a registered device.
    pub fn device_changed(&self, id: DeviceId) -> bool {
        let Some(device) = self.base.device(id) else {
            return false;
        };
        self.send_device_mgmt_to_listeners(DeviceMgmtType::Changed, &device);
        true
    }

    /// Delivers one device management event to every listener, in
    /// registration order.
    ///
    /// Does nothing if the device management event class is disabled. The
    /// event carries the capability of the root manager, which is this
    /// manager unless it is the child of a [`super::ParentDeviceManager`].
    pub fn send_device_mgmt_to_listeners(&self, mgmt_type: DeviceMgmtType, device: &Arc<dyn Device>) {
        let Some(class_index) = self.device_mgmt_index else {
            return;
        };
        if !self.base.is_event_class_index_enabled(class_index) {
            return;
        }
        let capability = self
            .root()
            .and_then(|root| root.device_mgmt_capability());
        debug_assert!(capability.is_some(), "device mgmt capability not retrievable");
        let Some(capability) = capability else {
            return;
        };
        let event: Arc<dyn Event> = Arc::new(DeviceMgmtEvent::new(
            now_time_microseconds(),
            &capability,
            mgmt_type,
            device,
        ));
        let listeners = self.base.listeners();
        trace!(
            manager = %self.id,
            ?mgmt_type,
            device = %device.id(),
            listeners = listeners.len(),
            "dispatching device mgmt event"
        );
        for entry in listeners.iter() {
            entry.handle_event_call_if(class_index, &event);
        }
    }
}

impl DeviceManager for StdDeviceManager {
    fn manager_id(&self) -> ManagerId {
        self.id
    }

    fn hierarchy(&self) -> &HierarchyLink {
        &self.link
    }

    fn device(&self, id: DeviceId) -> Option<Arc<dyn Device>> {
        self.base.device(id)
    }

    fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.base.devices()
    }

    fn devices_with_capability_class(&self, class: CapabilityClass) -> Vec<Arc<dyn Device>> {
        self.base.devices_with_capability_class(class)
    }

    fn capability_classes(&self) -> Vec<CapabilityClass> {
        self.base.capability_classes().to_vec()
    }

    fn device_capability_classes(&self) -> Vec<CapabilityClass> {
        self.base.device_capability_classes().to_vec()
    }

    fn capability(&self, class: CapabilityClass) -> Option<ManagerCapability> {
        if class != CapabilityClass::DeviceMgmt {
            return None;
        }
        Some(ManagerCapability::DeviceMgmt(self.checked_capability().clone()))
    }

    fn capability_by_id(&self, id: CapabilityId) -> Option<ManagerCapability> {
        if id != self.capability.id() {
            return None;
        }
        Some(ManagerCapability::DeviceMgmt(self.checked_capability().clone()))
    }

    fn event_classes(&self) -> Vec<EventClass> {
        self.base.event_classes().to_vec()
    }

    fn is_event_class_enabled(&self, class: EventClass) -> bool {
        self.base.is_event_class_enabled(class)
    }

    fn enable_event_class(&self, class: EventClass) {
        self.base.enable_event_class(class);
    }

    fn add_event_listener(&self, listener: &Arc<EventListener>, call_if: Option<CallIf>) -> bool {
        self.base.add_event_listener(listener, call_if)
    }

    fn remove_event_listener(&self, listener: &Arc<EventListener>) -> bool {
        self.base.remove_event_listener(listener)
    }
}

impl fmt::Debug for StdDeviceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdDeviceManager")
            .field("id", &self.id)
            .field("capability", &self.capability)
            .field("event_classes", &self.base.event_classes())
            .finish()
    }
}
