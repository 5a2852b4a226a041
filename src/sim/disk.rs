//! Rigid disk entity
//!
//! Mass is derived from the radius (unit density, 2D area) and never changes
//! after construction.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::Vec2;

/// Stable index of a disk inside its [`Simulation`](super::Simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiskId(pub usize);

impl DiskId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Cosmetic color tag (packed 0xRRGGBBAA), no physical effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xff)
    }

    pub const fn from_gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }
}

/// A moving disk
#[derive(Debug, Clone, Serialize)]
pub struct Disk {
    pub id: DiskId,
    /// Center, moved only by integration
    pub position: Vec2,
    /// Changed only by collision resolution
    pub velocity: Vec2,
    radius: f64,
    mass: f64,
    pub color: Color,
}

impl Disk {
    pub fn new(id: DiskId, position: Vec2, velocity: Vec2, radius: f64, color: Color) -> Self {
        debug_assert!(radius > 0.0, "disk radius must be positive");
        Self {
            id,
            position,
            velocity,
            radius,
            mass: PI * radius * radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area-proportional mass: pi * r^2
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Where the center will be after `t` seconds of free flight
    #[inline]
    pub fn position_at(&self, t: f64) -> Vec2 {
        self.position + self.velocity * t
    }

    /// Free-flight integration
    #[inline]
    pub fn advance(&mut self, t: f64) {
        self.position += self.velocity * t;
    }

    /// Edge-to-edge distance (negative when overlapping)
    pub fn gap(&self, other: &Disk) -> f64 {
        (self.position - other.position).length() - (self.radius + other.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_from_radius() {
        let d = Disk::new(DiskId(0), Vec2::ZERO, Vec2::ZERO, 2.0, Color::default());
        assert!((d.mass() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_kinetic_energy_and_momentum() {
        let d = Disk::new(DiskId(1), Vec2::ZERO, Vec2::new(3.0, 4.0), 1.0, Color::default());
        assert!((d.kinetic_energy() - 0.5 * PI * 25.0).abs() < 1e-9);
        assert!((d.momentum() - Vec2::new(3.0 * PI, 4.0 * PI)).length() < 1e-9);
    }

    #[test]
    fn test_advance() {
        let mut d = Disk::new(DiskId(0), Vec2::new(1.0, 1.0), Vec2::new(2.0, -1.0), 1.0, Color::default());
        assert_eq!(d.position_at(0.5), Vec2::new(2.0, 0.5));
        d.advance(0.5);
        assert_eq!(d.position, Vec2::new(2.0, 0.5));
        assert_eq!(d.velocity, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_gap() {
        let a = Disk::new(DiskId(0), Vec2::new(0.0, 0.0), Vec2::ZERO, 20.0, Color::default());
        let b = Disk::new(DiskId(1), Vec2::new(100.0, 0.0), Vec2::ZERO, 20.0, Color::default());
        assert!((a.gap(&b) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_color_packing() {
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56), Color(0x123456ff));
        assert_eq!(Color::from_gray(0), Color(0x000000ff));
    }
}
