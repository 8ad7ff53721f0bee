//! In-memory backend whose devices come and go on request.
//!
//! Useful to exercise listeners without real hardware.

use std::ops::Deref;
use std::sync::{Arc, Weak};

use tracing::info;

use crate::capability::CapabilityClass;
use crate::device::{Device, DeviceId};
use crate::event::EventClass;
use crate::manager::{DeviceManager, EventClassPolicy, StdDeviceManager};

#[derive(Debug)]
pub struct FakeDevice {
    id: DeviceId,
    name: String,
    capability_classes: Vec<CapabilityClass>,
    manager: Weak<dyn DeviceManager>,
}

impl Device for FakeDevice {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn device_manager(&self) -> Option<Arc<dyn DeviceManager>> {
        self.manager.upgrade()
    }

    fn capability_classes(&self) -> Vec<CapabilityClass> {
        self.capability_classes.clone()
    }
}

pub struct FakeDeviceManager {
    manager: Arc<StdDeviceManager>,
}

impl FakeDeviceManager {
    const DEVICE_CAPABILITY_CLASSES: &'static [CapabilityClass] = &[
        CapabilityClass::Key,
        CapabilityClass::Pointer,
        CapabilityClass::Touch,
        CapabilityClass::Joystick,
    ];

    pub fn new(event_classes: Vec<EventClass>, policy: EventClassPolicy) -> Self {
        Self {
            manager: StdDeviceManager::new(
                Self::DEVICE_CAPABILITY_CLASSES.to_vec(),
                event_classes,
                policy,
            ),
        }
    }

    pub fn manager(&self) -> &Arc<StdDeviceManager> {
        &self.manager
    }

    pub fn as_device_manager(&self) -> Arc<dyn DeviceManager> {
        self.manager.clone()
    }

    /// Plugs in a new device. Manager capability classes are dropped from
    /// `classes`.
    pub fn simulate_new_device(
        &self,
        name: impl Into<String>,
        classes: impl IntoIterator<Item = CapabilityClass>,
    ) -> DeviceId {
        let mut capability_classes = Vec::new();
        for class in classes {
            if class.is_device_manager_capability() || capability_classes.contains(&class) {
                continue;
            }
            capability_classes.push(class);
        }
        let manager: Arc<dyn DeviceManager> = self.manager.clone();
        let device = Arc::new(FakeDevice {
            id: DeviceId::next(),
            name: name.into(),
            capability_classes,
            manager: Arc::downgrade(&manager),
        });
        let id = device.id;
        info!(device = %id, name = %device.name, "simulating new device");
        self.manager.add_device(device);
        id
    }

    pub fn simulate_remove_device(&self, id: DeviceId) -> bool {
        info!(device = %id, "simulating device removal");
        self.manager.remove_device(id).is_some()
    }

    pub fn simulate_device_changed(&self, id: DeviceId) -> bool {
        self.manager.device_changed(id)
    }
}

impl Deref for FakeDeviceManager {
    type Target = StdDeviceManager;

    fn deref(&self) -> &StdDeviceManager {
        &self.manager
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::event::{DeviceMgmtType, Event};
    use crate::manager::{EventListener, ParentDeviceManager};

    fn fake() -> FakeDeviceManager {
        FakeDeviceManager::new(EventClass::ALL.to_vec(), EventClassPolicy::EnableAll)
    }

    fn recorder() -> (Arc<EventListener>, Arc<Mutex<Vec<(DeviceMgmtType, String)>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let listener: Arc<EventListener> = {
            let received = received.clone();
            Arc::new(move |event: &Arc<dyn Event>| {
                let mgmt = event.as_device_mgmt().unwrap();
                let name = mgmt.device().map(|device| device.name()).unwrap_or_default();
                received.lock().unwrap().push((mgmt.mgmt_type(), name));
            })
        };
        (listener, received)
    }

    #[test]
    fn device_lifecycle_is_notified() {
        let fake = fake();
        let (listener, received) = recorder();
        fake.add_event_listener(&listener, None);

        let id = fake.simulate_new_device("pad", [CapabilityClass::Joystick]);
        assert!(fake.simulate_device_changed(id));
        assert!(fake.simulate_remove_device(id));
        assert!(!fake.simulate_remove_device(id));
        assert!(!fake.simulate_device_changed(id));

        assert_eq!(
            *received.lock().unwrap(),
            vec![
                (DeviceMgmtType::Added, "pad".to_string()),
                (DeviceMgmtType::Changed, "pad".to_string()),
                (DeviceMgmtType::Removed, "pad".to_string()),
            ]
        );
    }

    #[test]
    fn devices_point_back_to_their_manager() {
        let fake = fake();
        let id = fake.simulate_new_device(
            "keyboard",
            [CapabilityClass::DeviceMgmt, CapabilityClass::Key, CapabilityClass::Key],
        );
        let device = fake.device(id).unwrap();
        assert_eq!(device.capability_classes(), vec![CapabilityClass::Key]);
        assert_eq!(
            device.device_manager().unwrap().manager_id(),
            fake.manager_id()
        );
        assert_eq!(fake.devices_with_capability_class(CapabilityClass::Key).len(), 1);
        assert!(fake
            .devices_with_capability_class(CapabilityClass::Touch)
            .is_empty());
    }

    #[test]
    fn works_under_a_parent() {
        let first = fake();
        let second = fake();
        let parent =
            ParentDeviceManager::create(vec![first.as_device_manager(), second.as_device_manager()])
                .unwrap();
        let (listener, received) = recorder();
        parent.add_event_listener(&listener, Some(crate::event::CallIf::DeviceManagerCapability));

        first.simulate_new_device("mouse", [CapabilityClass::Pointer]);
        second.simulate_new_device("touchpad", [CapabilityClass::Touch, CapabilityClass::Pointer]);
        assert_eq!(parent.devices().len(), 2);
        assert_eq!(received.lock().unwrap().len(), 2);
    }
}
