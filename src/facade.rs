//! Facade: one call per scene instead of one call per device.

use std::io::Write;

use crate::error::Result;

// ── Devices ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct Tv;

impl Tv {
    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV is now ON")?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV is now OFF")?;
        Ok(())
    }

    pub fn set_channel(&self, channel: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV is set to channel {channel}")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SoundSystem;

impl SoundSystem {
    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sound System is now ON")?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sound System is now Off")?;
        Ok(())
    }

    pub fn set_volume(&self, volume: u8, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "set_volume to {volume}")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Lights;

impl Lights {
    pub fn dim(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Lights is now Dim")?;
        Ok(())
    }

    pub fn bright(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Lights is now bright")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AirConditioner;

impl AirConditioner {
    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "AirConditioner is now ON")?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "AirConditioner is now OFF")?;
        Ok(())
    }

    pub fn set_temperature(&self, celsius: i8, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "AirConditioner is set to temperature {celsius}")?;
        Ok(())
    }
}

// ── Facade ────────────────────────────────────────────────────────────────────

/// The knobs a movie night turns.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieNight {
    pub channel: String,
    pub volume: u8,
    pub temperature: i8,
}

impl Default for MovieNight {
    fn default() -> Self {
        Self { channel: "Netflix".to_owned(), volume: 20, temperature: 22 }
    }
}

/// Owns every device and exposes two scenes.
#[derive(Debug, Default)]
pub struct SmartHomeFacade {
    tv: Tv,
    sound: SoundSystem,
    lights: Lights,
    ac: AirConditioner,
    movie_night: MovieNight,
}

impl SmartHomeFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie_night(movie_night: MovieNight) -> Self {
        Self { movie_night, ..Self::default() }
    }

    pub fn start_movie_night(&self, out: &mut dyn Write) -> Result<()> {
        let scene = &self.movie_night;
        writeln!(out, "\nStarting Movie Night Mode...")?;
        self.tv.on(out)?;
        self.tv.set_channel(&scene.channel, out)?;
        self.sound.on(out)?;
        self.sound.set_volume(scene.volume, out)?;
        self.lights.dim(out)?;
        self.ac.on(out)?;
        self.ac.set_temperature(scene.temperature, out)?;
        writeln!(out, "Enjoy your movie! 🍿🎬\n")?;
        Ok(())
    }

    pub fn shutdown(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\nShutting down all systems...")?;
        self.tv.off(out)?;
        self.sound.off(out)?;
        self.lights.bright(out)?;
        self.ac.off(out)?;
        writeln!(out, "All devices are turned off. Goodbye!\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_night_drives_every_device_in_order() {
        let facade = SmartHomeFacade::with_movie_night(MovieNight {
            channel: "HBO".to_owned(),
            volume: 35,
            temperature: 19,
        });
        let mut out = Vec::new();
        facade.start_movie_night(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Starting Movie Night Mode...");
        assert_eq!(lines[2], "TV is set to channel HBO");
        assert_eq!(lines[4], "set_volume to 35");
        assert_eq!(lines[7], "AirConditioner is set to temperature 19");
    }

    #[test]
    fn shutdown_brightens_the_lights() {
        let mut out = Vec::new();
        SmartHomeFacade::new().shutdown(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Lights is now bright\n"));
        assert!(text.ends_with("All devices are turned off. Goodbye!\n\n"));
    }
}
