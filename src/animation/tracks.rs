use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::values::{Interpolate, TrackValue};

/// How a keyframe blends toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Value is held constant until the next key.
    Step,
    Linear,
}

/// One key of a property track.
///
/// `ratio` is the key's position normalized to `[0,1]` over the clip
/// duration. Joint tracks use local seconds instead; the asymmetry is
/// intentional and both consumers rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyKey<T> {
    pub interpolation: Interpolation,
    pub ratio: f32,
    pub value: T,
}

/// Keyframe sequence over a single scalar or vector property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTrack<T: TrackValue> {
    /// "node:property" as requested by the caller.
    pub name: String,
    pub keys: Vec<PropertyKey<T>>,
}

impl<T: TrackValue> PropertyTrack<T> {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Structural post-condition: at least one key, ratios strictly
    /// increasing and within `[0,1]`.
    #[must_use]
    pub fn validate(&self) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        let mut previous = f32::NEG_INFINITY;
        for key in &self.keys {
            if key.ratio < 0.0 || key.ratio > 1.0 || key.ratio <= previous {
                return false;
            }
            previous = key.ratio;
        }
        true
    }

    /// Samples the track at a normalized ratio, honoring each key's
    /// interpolation mode. Clamps outside the keyed range.
    #[must_use]
    pub fn sample(&self, ratio: f32) -> T {
        assert!(!self.keys.is_empty(), "Track is empty");

        // partition_point finds the first key with ratio > sample point
        let next = self.keys.partition_point(|k| k.ratio <= ratio);
        if next == 0 {
            return self.keys[0].value;
        }
        let key = &self.keys[next - 1];
        if next >= self.keys.len() {
            return key.value;
        }

        match key.interpolation {
            Interpolation::Step => key.value,
            Interpolation::Linear => {
                let next_key = &self.keys[next];
                let dt = next_key.ratio - key.ratio;
                let t = if dt > 1e-6 { (ratio - key.ratio) / dt } else { 0.0 };
                T::interpolate_linear(key.value, next_key.value, t.clamp(0.0, 1.0))
            }
        }
    }
}

/// Closed union over the supported property track arities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackData {
    Scalar(PropertyTrack<f32>),
    Vector2(PropertyTrack<Vec2>),
    Vector3(PropertyTrack<Vec3>),
}

impl TrackData {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(track) => &track.name,
            Self::Vector2(track) => &track.name,
            Self::Vector3(track) => &track.name,
        }
    }

    #[must_use]
    pub fn key_count(&self) -> usize {
        match self {
            Self::Scalar(track) => track.keys.len(),
            Self::Vector2(track) => track.keys.len(),
            Self::Vector3(track) => track.keys.len(),
        }
    }

    #[must_use]
    pub fn validate(&self) -> bool {
        match self {
            Self::Scalar(track) => track.validate(),
            Self::Vector2(track) => track.validate(),
            Self::Vector3(track) => track.validate(),
        }
    }
}
