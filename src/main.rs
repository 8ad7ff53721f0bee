use std::sync::Arc;

use anyhow::Context;
use input_mgmt::config::Config;
use input_mgmt::fake::FakeDeviceManager;
use input_mgmt::{
    CapabilityClass, DeviceManager, Event, EventClass, EventListener, KeyConverterRegistry,
    KeyRepeat, ParentDeviceManager,
};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

fn main() -> anyhow::Result<()> {
    // Installed before the configuration is read, so that problems with the
    // file get logged. `log_filter` replaces the fallback once it is known.
    let from_env = tracing_subscriber::EnvFilter::try_from_default_env();
    let filter_from_env = from_env.is_ok();
    let (filter, filter_handle) = reload::Layer::new(
        from_env.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
    if !filter_from_env {
        let log_filter = Config::with(|config| config.log_filter.clone());
        if let Err(err) = filter_handle.reload(tracing_subscriber::EnvFilter::new(&log_filter)) {
            warn!("Failed to apply log_filter {log_filter:?}: {err}");
        }
    }

    // Must happen before any backend reads the mode.
    Config::with(|config| config.apply_key_repeat_mode(KeyRepeat::global()));
    info!(mode = ?KeyRepeat::global().mode(), "key repeat");

    let policy = Config::with(|config| config.event_class_policy())
        .context("invalid enabled_event_classes")?;
    let keyboards = FakeDeviceManager::new(vec![EventClass::Key], policy.clone());
    let pointers = FakeDeviceManager::new(vec![EventClass::Pointer], policy);
    let root = ParentDeviceManager::create(vec![
        keyboards.as_device_manager(),
        pointers.as_device_manager(),
    ])?;

    let listener: Arc<EventListener> = Arc::new(|event: &Arc<dyn Event>| {
        let Some(mgmt) = event.as_device_mgmt() else {
            return;
        };
        let device = mgmt.device();
        info!(
            time_usec = event.time_usec(),
            capability = %event.capability_id(),
            kind = ?mgmt.mgmt_type(),
            device = ?device.as_ref().map(|device| device.name()),
            "device mgmt event"
        );
    });
    if !root.add_event_listener(&listener, None) {
        warn!("listener was already registered");
    }

    let keyboard = keyboards.simulate_new_device("AT keyboard", [CapabilityClass::Key]);
    let mouse = pointers.simulate_new_device("USB mouse", [CapabilityClass::Pointer]);
    pointers.simulate_device_changed(mouse);
    info!(devices = root.devices().len(), "devices connected");
    keyboards.simulate_remove_device(keyboard);

    let converter = KeyConverterRegistry::global().converter();
    for raw in [9, 38, 65, 3] {
        match converter.convert_key_code(raw) {
            Some(key) => info!(raw, %key, "converted key code"),
            None => warn!(raw, "key code has no hardware key"),
        }
    }

    Ok(())
}
