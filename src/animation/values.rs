use glam::{Quat, Vec2, Vec3};

use crate::source::PropertyValue;

/// Linear interpolation between two keyframe values.
pub trait Interpolate: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolate for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolate for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

/// A value type a property track can be built over.
///
/// One generic sampling routine covers all arities; the declared property
/// kind selects the concrete type once per property. Conversion returns
/// `None` when the evaluated value's variant does not match.
pub trait TrackValue: Interpolate + PartialEq + std::fmt::Debug {
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl TrackValue for f32 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
            PropertyValue::Integer(v) => Some(v as f32),
            PropertyValue::Float(v) => Some(v),
            PropertyValue::Double(v) => Some(v as f32),
            _ => None,
        }
    }
}

impl TrackValue for Vec2 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Double2([x, y]) => Some(Vec2::new(x as f32, y as f32)),
            _ => None,
        }
    }
}

impl TrackValue for Vec3 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Double3([x, y, z]) => {
                Some(Vec3::new(x as f32, y as f32, z as f32))
            }
            _ => None,
        }
    }
}
