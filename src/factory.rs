//! Factory: vehicles by name.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};

pub trait Vehicle {
    fn drive(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Car;

impl Vehicle for Car {
    fn drive(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Driving a car.")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Bike;

impl Vehicle for Bike {
    fn drive(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Riding a bike.")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Truck;

impl Vehicle for Truck {
    fn drive(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Driving a truck.")?;
        Ok(())
    }
}

/// The vehicles the factory can build.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VehicleKind {
    Car,
    Bike,
    Truck,
}

impl VehicleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car   => "car",
            Self::Bike  => "bike",
            Self::Truck => "truck",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    /// Exact, lowercase names only.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "car"   => Ok(Self::Car),
            "bike"  => Ok(Self::Bike),
            "truck" => Ok(Self::Truck),
            other   => Err(Error::UnknownVehicle(other.to_owned())),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a vehicle name into a vehicle.
#[derive(Clone, Copy, Debug, Default)]
pub struct VehicleFactory;

impl VehicleFactory {
    pub fn get_vehicle(&self, name: &str) -> Result<Box<dyn Vehicle>> {
        Ok(Self::build(name.parse()?))
    }

    pub fn build(kind: VehicleKind) -> Box<dyn Vehicle> {
        match kind {
            VehicleKind::Car   => Box::new(Car),
            VehicleKind::Bike  => Box::new(Bike),
            VehicleKind::Truck => Box::new(Truck),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_known_vehicle() {
        let factory = VehicleFactory;
        let mut out = Vec::new();
        for name in ["car", "bike", "truck"] {
            factory.get_vehicle(name).unwrap().drive(&mut out).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Driving a car.\nRiding a bike.\nDriving a truck.\n",
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = VehicleFactory.get_vehicle("boat").err().unwrap();
        assert!(matches!(err, Error::UnknownVehicle(ref name) if name == "boat"));
        assert_eq!(err.to_string(), "unknown vehicle type `boat`");
        assert!("Car".parse::<VehicleKind>().is_err());
    }
}
