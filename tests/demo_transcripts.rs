//! Every scene's full transcript, as the binary prints it.

use motif::config::SmartHomeConfig;
use motif::demo::{self, Pattern};

fn transcript(pattern: Pattern) -> String {
    let config = SmartHomeConfig::new().shared();
    let mut out = Vec::new();
    demo::run(pattern, &mut out, &config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn middleware() {
    assert_eq!(
        transcript(Pattern::Middleware),
        "Authentication successful.\n\
         Logging request: {\"user\":\"Alice\",\"data\":\"Sample data\"}\n\
         Request data validated.\n\
         Authentication failed.\n\
         Logging request: {}\n\
         Invalid request data.\n",
    );
}

#[test]
fn adapter() {
    assert_eq!(
        transcript(Pattern::Adapter),
        "Activating Security System...\n\
         Legacy Security System Armed 1\n\
         Security Breach Detected!\n\
         Legacy Security Alarm Triggered! 1\n\
         Deactivating Security System...\n\
         Legacy Security System Disarmed 1\n\
         Activating Security System...\n\
         Legacy Security System Armed 2\n\
         Security Breach Detected!\n\
         Legacy Security Alarm Triggered! 2\n\
         Deactivating Security System...\n\
         Legacy Security System Disarmed 2\n",
    );
}

#[test]
fn method_adapter_matches_dedicated_adapters() {
    assert_eq!(transcript(Pattern::MethodAdapter), transcript(Pattern::Adapter));
}

#[test]
fn media_adapter() {
    assert_eq!(
        transcript(Pattern::MediaAdapter),
        "Connecting Cassette Player to Bluetooth System...\n\
         Music System Output: Playing music from Cassette Player\n\
         \n\
         Connecting CD Player to Bluetooth System...\n\
         Music System Output: Playing music from CD Player\n",
    );
}

#[test]
fn decorator() {
    assert_eq!(
        transcript(Pattern::Decorator),
        "Sending basic notification: Hello, World!\n\
         Sending email notification: Hello, World!\n\
         Sending SMS notification: Hello, World!\n",
    );
}

#[test]
fn facade() {
    assert_eq!(
        transcript(Pattern::Facade),
        "\nStarting Movie Night Mode...\n\
         TV is now ON\n\
         TV is set to channel Netflix\n\
         Sound System is now ON\n\
         set_volume to 20\n\
         Lights is now Dim\n\
         AirConditioner is now ON\n\
         AirConditioner is set to temperature 22\n\
         Enjoy your movie! 🍿🎬\n\
         \n\
         \n\
         Shutting down all systems...\n\
         TV is now OFF\n\
         Sound System is now Off\n\
         Lights is now bright\n\
         AirConditioner is now OFF\n\
         All devices are turned off. Goodbye!\n\
         \n",
    );
}

#[test]
fn factory() {
    assert_eq!(
        transcript(Pattern::Factory),
        "Driving a car.\nRiding a bike.\nDriving a truck.\n",
    );
}

#[test]
fn observer() {
    assert_eq!(
        transcript(Pattern::Observer),
        "Alice received news: Breaking News: Observer Pattern Explained!\n\
         Bob received news: Breaking News: Observer Pattern Explained!\n\
         Bob received news: Latest Update: Design Patterns Made Easy!\n",
    );
}

#[test]
fn prototype() {
    assert_eq!(
        transcript(Pattern::Prototype),
        "Drawing a red circle with radius 5.\n\
         Drawing a blue rectangle with width 20 and height 15.\n\
         Drawing a green circle with radius 5.\n",
    );
}

#[test]
fn proxy() {
    assert_eq!(
        transcript(Pattern::Proxy),
        "Initializing proxy for video video123.\n\
         Loading video video123 from the server...\n\
         Playing video video123.\n\
         Playing video video123.\n",
    );
}

#[test]
fn singleton() {
    assert_eq!(
        transcript(Pattern::Singleton),
        "[Thermostat] Current Settings: {\"temperature\":22,\"lights\":\"dim\"}\n\
         [Living Room Lights] Current Settings: {\"temperature\":22,\"lights\":\"dim\"}\n\
         [Thermostat] Updating temperature to 24\n\
         [Thermostat] Current Settings: {\"temperature\":24,\"lights\":\"dim\"}\n\
         [Living Room Lights] Current Settings: {\"temperature\":24,\"lights\":\"dim\"}\n",
    );
}

#[test]
fn singleton_uses_injected_settings() {
    let config = SmartHomeConfig::from_toml_str("mode = \"away\"\n").unwrap().shared();
    let mut out = Vec::new();
    demo::run(Pattern::Singleton, &mut out, &config).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[Thermostat] Current Settings: {\"mode\":\"away\"}\n"));
    assert_eq!(
        config.borrow().get_setting("temperature"),
        Some(&serde_json::Value::from(24)),
    );
}

#[test]
fn strategy() {
    assert_eq!(
        transcript(Pattern::Strategy),
        "Paid 100 using Credit Card.\nPaid 200 using PayPal.\nPaid 300 using Bitcoin.\n",
    );
}

#[test]
fn run_many_separates_scenes_with_banners() {
    let config = SmartHomeConfig::new().shared();
    let mut out = Vec::new();
    demo::run_many(&[Pattern::Factory, Pattern::Strategy], &mut out, &config).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("=== factory ===\nDriving a car.\n"));
    assert!(text.contains("Driving a truck.\n\n=== strategy ===\nPaid 100"));
}

#[test]
fn every_scene_runs() {
    let config = SmartHomeConfig::new().shared();
    let mut out = Vec::new();
    demo::run_many(&Pattern::ALL, &mut out, &config).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("=== ").count(), Pattern::ALL.len());
}
