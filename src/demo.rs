//! The walk-throughs: one short scene per pattern.
//!
//! Each scene builds its objects, exercises them, and writes what happened to
//! `out`. The binary points `out` at stdout; the tests point it at a buffer.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use serde_json::json;
use tracing::info;

use crate::adapter::{
    BluetoothMusicSystem, CassettePlayer, CdPlayer, LegacySecurityAdapter, LegacySecurityAdapter2,
    LegacySecuritySystem, LegacySecuritySystem2, MediaAdapter, MediaDevice, MethodAdapter,
    SecuritySystem, SmartHomeController,
};
use crate::config::{SharedConfig, SmartDevice};
use crate::decorator::{BasicNotifier, EmailNotifier, Notifier, SmsNotifier};
use crate::error::Result;
use crate::facade::SmartHomeFacade;
use crate::factory::VehicleFactory;
use crate::middleware::{Authentication, Chain, Logging, Validation};
use crate::observer::{NewsPublisher, Reader};
use crate::prototype::{Circle, Rectangle, ShapeRegistry};
use crate::proxy::VideoProxy;
use crate::request::Request;
use crate::strategy::{BitcoinPayment, CreditCardPayment, PayPalPayment, PaymentContext};

/// Every scene the binary can play.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ValueEnum)]
pub enum Pattern {
    Adapter,
    MediaAdapter,
    MethodAdapter,
    Decorator,
    Facade,
    Factory,
    Middleware,
    Observer,
    Prototype,
    Proxy,
    Singleton,
    Strategy,
}

impl Pattern {
    pub const ALL: [Pattern; 12] = [
        Self::Adapter,
        Self::MediaAdapter,
        Self::MethodAdapter,
        Self::Decorator,
        Self::Facade,
        Self::Factory,
        Self::Middleware,
        Self::Observer,
        Self::Prototype,
        Self::Proxy,
        Self::Singleton,
        Self::Strategy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adapter       => "adapter",
            Self::MediaAdapter  => "media-adapter",
            Self::MethodAdapter => "method-adapter",
            Self::Decorator     => "decorator",
            Self::Facade        => "facade",
            Self::Factory       => "factory",
            Self::Middleware    => "middleware",
            Self::Observer      => "observer",
            Self::Prototype     => "prototype",
            Self::Proxy         => "proxy",
            Self::Singleton     => "singleton",
            Self::Strategy      => "strategy",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plays one scene. `config` is the home's settings, used by the singleton
/// scene; it is seeded with the classic defaults if empty.
pub fn run(pattern: Pattern, out: &mut dyn Write, config: &SharedConfig) -> Result<()> {
    info!(%pattern, "running demo");
    match pattern {
        Pattern::Adapter       => adapter(out),
        Pattern::MediaAdapter  => media_adapter(out),
        Pattern::MethodAdapter => method_adapter(out),
        Pattern::Decorator     => decorator(out),
        Pattern::Facade        => facade(out),
        Pattern::Factory       => factory(out),
        Pattern::Middleware    => middleware(out),
        Pattern::Observer      => observer(out),
        Pattern::Prototype     => prototype(out),
        Pattern::Proxy         => proxy(out),
        Pattern::Singleton     => singleton(out, config),
        Pattern::Strategy      => strategy(out),
    }
}

/// Plays each of `patterns` under a `=== name ===` banner, a blank line
/// between scenes.
pub fn run_many(patterns: &[Pattern], out: &mut dyn Write, config: &SharedConfig) -> Result<()> {
    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {pattern} ===")?;
        run(*pattern, out, config)?;
    }
    Ok(())
}

// ── Scenes ────────────────────────────────────────────────────────────────────

fn security_drill(system: impl SecuritySystem + 'static, out: &mut dyn Write) -> Result<()> {
    let mut controller = SmartHomeController::new();
    controller.integrate_security_system(system);
    controller.activate_security(out)?;
    controller.alert_security_breach(out)?;
    controller.deactivate_security(out)
}

fn adapter(out: &mut dyn Write) -> Result<()> {
    security_drill(LegacySecurityAdapter::new(LegacySecuritySystem), out)?;
    security_drill(LegacySecurityAdapter2::new(LegacySecuritySystem2), out)
}

fn method_adapter(out: &mut dyn Write) -> Result<()> {
    security_drill(
        MethodAdapter::new(
            LegacySecuritySystem,
            LegacySecuritySystem::arm_legacy,
            LegacySecuritySystem::disarm_legacy,
            LegacySecuritySystem::trigger_alarm_legacy,
        ),
        out,
    )?;
    security_drill(
        MethodAdapter::new(
            LegacySecuritySystem2,
            LegacySecuritySystem2::arm_legacy2,
            LegacySecuritySystem2::disarm_legacy2,
            LegacySecuritySystem2::trigger_alarm_legacy2,
        ),
        out,
    )
}

fn media_adapter(out: &mut dyn Write) -> Result<()> {
    let mut music = BluetoothMusicSystem::new();

    writeln!(out, "Connecting Cassette Player to Bluetooth System...")?;
    music.connect_device(MediaAdapter::new(MediaDevice::Cassette(CassettePlayer)));
    music.play_music(out)?;

    writeln!(out, "\nConnecting CD Player to Bluetooth System...")?;
    music.connect_device(MediaAdapter::new(MediaDevice::Cd(CdPlayer)));
    music.play_music(out)
}

fn decorator(out: &mut dyn Write) -> Result<()> {
    SmsNotifier::new(EmailNotifier::new(BasicNotifier)).send("Hello, World!", out)
}

fn facade(out: &mut dyn Write) -> Result<()> {
    let home = SmartHomeFacade::new();
    home.start_movie_night(out)?;
    home.shutdown(out)
}

fn factory(out: &mut dyn Write) -> Result<()> {
    let factory = VehicleFactory;
    for name in ["car", "bike", "truck"] {
        factory.get_vehicle(name)?.drive(out)?;
    }
    Ok(())
}

fn middleware(out: &mut dyn Write) -> Result<()> {
    let chain = Chain::new()
        .with(Authentication::new())
        .with(Logging::new())
        .with(Validation::new());

    let request = Request::try_from(json!({ "user": "Alice", "data": "Sample data" }))?;
    chain.process_into(&request, out)?;
    chain.process_into(&Request::new(), out)
}

fn observer(out: &mut dyn Write) -> Result<()> {
    let mut publisher = NewsPublisher::new();
    let alice = publisher.subscribe(Reader::new("Alice"));
    publisher.subscribe(Reader::new("Bob"));

    publisher.notify_subscribers("Breaking News: Observer Pattern Explained!", out)?;
    publisher.unsubscribe(alice)?;
    publisher.notify_subscribers("Latest Update: Design Patterns Made Easy!", out)
}

fn prototype(out: &mut dyn Write) -> Result<()> {
    let mut registry = ShapeRegistry::new();
    registry.register_shape("small_circle", Circle::new("red", 5));
    registry.register_shape("large_rectangle", Rectangle::new("blue", 20, 15));

    registry.get_shape("small_circle")?.draw(out)?;
    registry.get_shape("large_rectangle")?.draw(out)?;

    let mut recoloured = registry.get_shape("small_circle")?;
    recoloured.set_color("green".to_owned());
    recoloured.draw(out)
}

fn proxy(out: &mut dyn Write) -> Result<()> {
    let mut video = VideoProxy::new("video123");
    video.play(out)?;
    video.play(out)
}

fn singleton(out: &mut dyn Write, config: &SharedConfig) -> Result<()> {
    {
        let mut settings = config.borrow_mut();
        if settings.settings().is_empty() {
            settings.set_setting("temperature", 22);
            settings.set_setting("lights", "dim");
        }
    }

    let thermostat = SmartDevice::new("Thermostat", config);
    let lights = SmartDevice::new("Living Room Lights", config);

    thermostat.display_settings(out)?;
    lights.display_settings(out)?;

    thermostat.update_setting("temperature", 24, out)?;

    thermostat.display_settings(out)?;
    lights.display_settings(out)
}

fn strategy(out: &mut dyn Write) -> Result<()> {
    let mut context = PaymentContext::new(CreditCardPayment);
    context.execute_payment(100, out)?;

    context.set_strategy(PayPalPayment);
    context.execute_payment(200, out)?;

    context.set_strategy(BitcoinPayment);
    context.execute_payment(300, out)
}
