//! Solid shapes with volume and surface area.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { width: f64, length: f64, depth: f64 },
    Sphere { radius: f64 },
}

impl Shape {
    pub fn volume(&self) -> f64 {
        match *self {
            Shape::Box { width, length, depth } => width * length * depth,
            Shape::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
        }
    }

    pub fn surface_area(&self) -> f64 {
        match *self {
            Shape::Box { width, length, depth } => {
                2.0 * (width * length + width * depth + length * depth)
            }
            Shape::Sphere { radius } => 4.0 * PI * radius.powi(2),
        }
    }
}
