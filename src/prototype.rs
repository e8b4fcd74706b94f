//! Prototype: a registry that hands out copies of registered shapes.
//!
//! Each shape copies itself field by field through [`Shape::clone_shape`].
//! What the registry returns is independent of what it holds: recolouring a
//! copy leaves the prototype alone.

use std::collections::HashMap;
use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> Result<()>;
    fn color(&self) -> &str;
    fn set_color(&mut self, color: String);

    /// A structural copy of this shape, boxed.
    fn clone_shape(&self) -> Box<dyn Shape>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub color: String,
    pub radius: u32,
}

impl Circle {
    pub fn new(color: impl Into<String>, radius: u32) -> Self {
        Self { color: color.into(), radius }
    }
}

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a {} circle with radius {}.", self.color, self.radius)?;
        Ok(())
    }

    fn color(&self) -> &str { &self.color }
    fn set_color(&mut self, color: String) { self.color = color; }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub color: String,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(color: impl Into<String>, width: u32, height: u32) -> Self {
        Self { color: color.into(), width, height }
    }
}

impl Shape for Rectangle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Drawing a {} rectangle with width {} and height {}.",
            self.color, self.width, self.height,
        )?;
        Ok(())
    }

    fn color(&self) -> &str { &self.color }
    fn set_color(&mut self, color: String) { self.color = color; }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

#[derive(Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `shape` under `name`, replacing any earlier prototype.
    pub fn register_shape(&mut self, name: impl Into<String>, shape: impl Shape + 'static) {
        let name = name.into();
        debug!(%name, "prototype registered");
        self.shapes.insert(name, Box::new(shape));
    }

    /// A fresh copy of the prototype registered under `name`.
    pub fn get_shape(&self, name: &str) -> Result<Box<dyn Shape>> {
        self.shapes
            .get(name)
            .map(|shape| shape.clone_shape())
            .ok_or_else(|| Error::UnknownShape(name.to_owned()))
    }

    pub fn len(&self) -> usize { self.shapes.len() }
    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }
}
