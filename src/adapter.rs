//! Adapters: legacy devices behind a modern interface.
//!
//! Two shapes of the same idea live here.
//!
//! | Scene | Target interface | Adaptees |
//! |---|---|---|
//! | Security | [`SecuritySystem`] | [`LegacySecuritySystem`], [`LegacySecuritySystem2`] |
//! | Music | [`MediaAdapter::play`] | [`CassettePlayer`], [`CdPlayer`] |
//!
//! For the security scene there are two ways to adapt: one hand-written
//! adapter per legacy type ([`LegacySecurityAdapter`],
//! [`LegacySecurityAdapter2`]), or a single [`MethodAdapter`] that is told at
//! construction which legacy function backs each operation:
//!
//! ```rust
//! use motif::adapter::{LegacySecuritySystem2, MethodAdapter, SmartHomeController};
//!
//! let adapter = MethodAdapter::new(
//!     LegacySecuritySystem2,
//!     LegacySecuritySystem2::arm_legacy2,
//!     LegacySecuritySystem2::disarm_legacy2,
//!     LegacySecuritySystem2::trigger_alarm_legacy2,
//! );
//!
//! let mut controller = SmartHomeController::new();
//! controller.integrate_security_system(adapter);
//!
//! let mut out = Vec::new();
//! controller.activate_security(&mut out).unwrap();
//! assert_eq!(out, b"Activating Security System...\nLegacy Security System Armed 2\n");
//! ```

use std::io::Write;

use crate::error::{Error, Result};

// ── Target interface ──────────────────────────────────────────────────────────

/// What the smart-home controller expects from any alarm.
pub trait SecuritySystem {
    fn arm(&self, out: &mut dyn Write) -> Result<()>;
    fn disarm(&self, out: &mut dyn Write) -> Result<()>;
    fn trigger_alarm(&self, out: &mut dyn Write) -> Result<()>;
}

// ── Legacy systems ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct LegacySecuritySystem;

impl LegacySecuritySystem {
    pub fn arm_legacy(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security System Armed 1")?;
        Ok(())
    }

    pub fn disarm_legacy(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security System Disarmed 1")?;
        Ok(())
    }

    pub fn trigger_alarm_legacy(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security Alarm Triggered! 1")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LegacySecuritySystem2;

impl LegacySecuritySystem2 {
    pub fn arm_legacy2(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security System Armed 2")?;
        Ok(())
    }

    pub fn disarm_legacy2(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security System Disarmed 2")?;
        Ok(())
    }

    pub fn trigger_alarm_legacy2(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Legacy Security Alarm Triggered! 2")?;
        Ok(())
    }
}

// ── Dedicated adapters ────────────────────────────────────────────────────────

/// Hand-written adapter for [`LegacySecuritySystem`].
#[derive(Debug)]
pub struct LegacySecurityAdapter {
    legacy: LegacySecuritySystem,
}

impl LegacySecurityAdapter {
    pub fn new(legacy: LegacySecuritySystem) -> Self {
        Self { legacy }
    }
}

impl SecuritySystem for LegacySecurityAdapter {
    fn arm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.arm_legacy(out) }
    fn disarm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.disarm_legacy(out) }
    fn trigger_alarm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.trigger_alarm_legacy(out) }
}

/// Hand-written adapter for [`LegacySecuritySystem2`].
#[derive(Debug)]
pub struct LegacySecurityAdapter2 {
    legacy: LegacySecuritySystem2,
}

impl LegacySecurityAdapter2 {
    pub fn new(legacy: LegacySecuritySystem2) -> Self {
        Self { legacy }
    }
}

impl SecuritySystem for LegacySecurityAdapter2 {
    fn arm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.arm_legacy2(out) }
    fn disarm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.disarm_legacy2(out) }
    fn trigger_alarm(&self, out: &mut dyn Write) -> Result<()> { self.legacy.trigger_alarm_legacy2(out) }
}

// ── Generic adapter ───────────────────────────────────────────────────────────

/// A legacy operation: a method-shaped function on `T`.
pub type LegacyOp<T> = fn(&T, &mut dyn Write) -> Result<()>;

/// One adapter for any legacy system.
///
/// The three operations are plain function pointers fixed at construction.
/// Passing a method path such as `LegacySecuritySystem::arm_legacy` is enough;
/// the compiler checks the signature, so a misspelt operation is a build
/// error rather than a runtime lookup failure.
pub struct MethodAdapter<T> {
    legacy: T,
    arm: LegacyOp<T>,
    disarm: LegacyOp<T>,
    trigger_alarm: LegacyOp<T>,
}

impl<T> MethodAdapter<T> {
    pub fn new(legacy: T, arm: LegacyOp<T>, disarm: LegacyOp<T>, trigger_alarm: LegacyOp<T>) -> Self {
        Self { legacy, arm, disarm, trigger_alarm }
    }
}

impl<T> SecuritySystem for MethodAdapter<T> {
    fn arm(&self, out: &mut dyn Write) -> Result<()> { (self.arm)(&self.legacy, out) }
    fn disarm(&self, out: &mut dyn Write) -> Result<()> { (self.disarm)(&self.legacy, out) }
    fn trigger_alarm(&self, out: &mut dyn Write) -> Result<()> { (self.trigger_alarm)(&self.legacy, out) }
}

// ── Controller ────────────────────────────────────────────────────────────────

/// The client: knows only [`SecuritySystem`].
#[derive(Default)]
pub struct SmartHomeController {
    security: Option<Box<dyn SecuritySystem>>,
}

impl SmartHomeController {
    pub fn new() -> Self {
        Self { security: None }
    }

    /// Replaces whatever system was integrated before.
    pub fn integrate_security_system(&mut self, system: impl SecuritySystem + 'static) {
        self.security = Some(Box::new(system));
    }

    pub fn activate_security(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Activating Security System...")?;
        self.system()?.arm(out)
    }

    pub fn deactivate_security(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Deactivating Security System...")?;
        self.system()?.disarm(out)
    }

    pub fn alert_security_breach(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Security Breach Detected!")?;
        self.system()?.trigger_alarm(out)
    }

    fn system(&self) -> Result<&dyn SecuritySystem> {
        self.security.as_deref().ok_or(Error::NoSecuritySystem)
    }
}

// ── Music scene ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct CassettePlayer;

impl CassettePlayer {
    pub fn play_cassette(&self) -> String {
        "Playing music from Cassette Player".to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CdPlayer;

impl CdPlayer {
    pub fn play_cd(&self) -> String {
        "Playing music from CD Player".to_owned()
    }
}

/// Every device the music adapter knows how to drive, plus the ones it does not.
#[derive(Clone, Debug)]
pub enum MediaDevice {
    Cassette(CassettePlayer),
    Cd(CdPlayer),
    /// Anything else, by description.
    Unsupported(String),
}

/// Gives any [`MediaDevice`] a single `play`.
#[derive(Clone, Debug)]
pub struct MediaAdapter {
    device: MediaDevice,
}

impl MediaAdapter {
    pub fn new(device: MediaDevice) -> Self {
        Self { device }
    }

    pub fn play(&self) -> String {
        match &self.device {
            MediaDevice::Cassette(player) => player.play_cassette(),
            MediaDevice::Cd(player)       => player.play_cd(),
            MediaDevice::Unsupported(_)   => "Unsupported media format".to_owned(),
        }
    }
}

/// A modern system that only accepts adapters.
#[derive(Debug, Default)]
pub struct BluetoothMusicSystem {
    connected: Option<MediaAdapter>,
}

impl BluetoothMusicSystem {
    pub fn new() -> Self {
        Self { connected: None }
    }

    pub fn connect_device(&mut self, adapter: MediaAdapter) {
        self.connected = Some(adapter);
    }

    pub fn play_music(&self, out: &mut dyn Write) -> Result<()> {
        match &self.connected {
            Some(adapter) => writeln!(out, "Music System Output: {}", adapter.play())?,
            None => writeln!(out, "No device connected.")?,
        }
        Ok(())
    }
}
