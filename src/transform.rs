//! Engine transform value and the authoring-side matrix converter.
//!
//! Authoring tools hand out 4x4 matrices in their own axis/unit system. A
//! [`TransformConverter`] maps one of those matrices into the engine's
//! position/rotation/scale representation and may refuse matrices that have
//! no such representation.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::errors::{BakeError, Result};

/// A decomposed TRS transform in engine space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Decomposes a matrix without any axis/unit adjustment.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Maps an authoring-format 4x4 matrix into an engine [`Transform`].
///
/// Implementations own the axis and unit conventions of the source format.
/// Conversion is allowed to fail: not every matrix decomposes into TRS.
pub trait TransformConverter {
    fn convert(&self, matrix: Mat4) -> Result<Transform>;
}

/// Stock converter: uniform unit scaling followed by SRT decomposition.
///
/// Rejects matrices that cannot represent a TRS transform (non-finite
/// components or a singular upper 3x3 block).
#[derive(Debug, Clone, Copy)]
pub struct DecomposeConverter {
    /// Multiplier applied to translations, e.g. centimeters to meters.
    pub unit_scale: f32,
}

impl Default for DecomposeConverter {
    fn default() -> Self {
        Self { unit_scale: 1.0 }
    }
}

impl TransformConverter for DecomposeConverter {
    fn convert(&self, matrix: Mat4) -> Result<Transform> {
        if !matrix.is_finite() || matrix.determinant().abs() <= f32::EPSILON {
            return Err(BakeError::UndecomposableMatrix);
        }

        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Ok(Transform {
            position: position * self.unit_scale,
            rotation,
            scale,
        })
    }
}
