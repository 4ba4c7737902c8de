use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolate;
use crate::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslationKey {
    /// Clip-local time in seconds.
    pub time: f32,
    pub value: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationKey {
    pub time: f32,
    pub value: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleKey {
    pub time: f32,
    pub value: Vec3,
}

/// Baked keyframes for one skeleton joint.
///
/// The three sequences are independent but are filled in lockstep by the
/// sampler: either a single bind-pose key each (no matching scene node) or
/// one key per sampling step. Times are clip-local, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JointTrack {
    pub translations: Vec<TranslationKey>,
    pub rotations: Vec<RotationKey>,
    pub scales: Vec<ScaleKey>,
}

impl JointTrack {
    /// Single-key track holding a fixed pose.
    #[must_use]
    pub fn from_pose(pose: &Transform) -> Self {
        Self {
            translations: vec![TranslationKey {
                time: 0.0,
                value: pose.position,
            }],
            rotations: vec![RotationKey {
                time: 0.0,
                value: pose.rotation,
            }],
            scales: vec![ScaleKey {
                time: 0.0,
                value: pose.scale,
            }],
        }
    }

    #[must_use]
    pub fn validate(&self, duration: f32) -> bool {
        keys_valid(&self.translations, duration, |k| k.time)
            && keys_valid(&self.rotations, duration, |k| k.time)
            && keys_valid(&self.scales, duration, |k| k.time)
    }

    /// Interpolated pose at a clip-local time, clamped to the keyed range.
    #[must_use]
    pub fn sample(&self, time: f32) -> Transform {
        Transform {
            position: sample_keys(&self.translations, time, |k| (k.time, k.value)),
            rotation: sample_keys(&self.rotations, time, |k| (k.time, k.value)),
            scale: sample_keys(&self.scales, time, |k| (k.time, k.value)),
        }
    }
}

/// Baked animation for a whole skeleton: one [`JointTrack`] per joint, in
/// skeleton joint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Authored clip name.
    pub name: String,
    /// Clip duration in seconds, always positive.
    pub duration: f32,
    pub tracks: Vec<JointTrack>,
}

impl AnimationClip {
    /// Structural post-condition over every track. A failure here means a
    /// builder bug, not bad input.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.duration > 0.0 && self.tracks.iter().all(|t| t.validate(self.duration))
    }
}

fn keys_valid<K>(keys: &[K], duration: f32, time: impl Fn(&K) -> f32) -> bool {
    if keys.is_empty() || time(&keys[0]) != 0.0 {
        return false;
    }
    let mut previous = f32::NEG_INFINITY;
    for key in keys {
        let t = time(key);
        if t <= previous || t > duration {
            return false;
        }
        previous = t;
    }
    true
}

fn sample_keys<K, V: Interpolate>(
    keys: &[K],
    time: f32,
    get: impl Fn(&K) -> (f32, V),
) -> V {
    assert!(!keys.is_empty(), "Track is empty");

    let next = keys.partition_point(|k| get(k).0 <= time);
    if next == 0 {
        return get(&keys[0]).1;
    }
    let (t0, v0) = get(&keys[next - 1]);
    if next >= keys.len() {
        return v0;
    }
    let (t1, v1) = get(&keys[next]);

    let dt = t1 - t0;
    let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
    V::interpolate_linear(v0, v1, t.clamp(0.0, 1.0))
}
