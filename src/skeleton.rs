//! Joint hierarchy consumed by the joint track builder.
//!
//! The skeleton is built and validated elsewhere (typically by the skeleton
//! importer); extraction only reads joint names, parent links and bind
//! poses. Joint order here fixes the track order of every extracted clip.

use serde::{Deserialize, Serialize};

use crate::transform::Transform;

/// One joint of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub name: String,
    /// Index of the parent joint; `None` marks a root.
    pub parent: Option<usize>,
    /// Local bind pose, used as the fallback when a clip animates no node
    /// with this joint's name.
    pub bind_pose: Transform,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    joints: Vec<Joint>,
}

impl Skeleton {
    #[must_use]
    pub fn new(joints: Vec<Joint>) -> Self {
        Self { joints }
    }

    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    #[must_use]
    pub fn joint_name(&self, index: usize) -> &str {
        &self.joints[index].name
    }

    #[must_use]
    pub fn joint_parent(&self, index: usize) -> Option<usize> {
        self.joints[index].parent
    }

    #[must_use]
    pub fn bind_pose(&self, index: usize) -> &Transform {
        &self.joints[index].bind_pose
    }

    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }
}
