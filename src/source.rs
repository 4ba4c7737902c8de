//! Scene source capabilities.
//!
//! Extraction never touches an authoring file format directly. It consumes a
//! loaded document through [`SceneSource`]: name-based node and property
//! lookup, clip enumeration, timeline metadata, and a time-parametrized
//! evaluator for transforms and property values. Implementations wrap
//! whatever object model the authoring SDK exposes; extraction assumes
//! nothing beyond these operations.

use std::fmt;
use std::ops::Deref;

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// An absolute time range on the document timeline, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: f32,
    pub end: f32,
}

impl TimeSpan {
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

/// The document's timeline rate setting.
///
/// Fixed modes carry their own frame rate; `Custom` defers to the scene's
/// custom rate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeMode {
    Fps24,
    Fps25,
    Fps30,
    Fps48,
    Fps50,
    Fps60,
    Fps120,
    Custom,
}

impl TimeMode {
    /// Frame rate of a fixed mode; `None` for [`TimeMode::Custom`].
    #[must_use]
    pub fn frame_rate(self) -> Option<f32> {
        match self {
            Self::Fps24 => Some(24.0),
            Self::Fps25 => Some(25.0),
            Self::Fps30 => Some(30.0),
            Self::Fps48 => Some(48.0),
            Self::Fps50 => Some(50.0),
            Self::Fps60 => Some(60.0),
            Self::Fps120 => Some(120.0),
            Self::Custom => None,
        }
    }
}

/// Declared data type of a scene property.
///
/// Only the scalar kinds and the 2/3-component double vectors have a
/// keyframe encoding; everything else is reported as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    Bool,
    Integer,
    Float,
    Double,
    Double2,
    Double3,
    Double4,
    Matrix4x4,
    Enum,
    String,
    Time,
    Reference,
    Blob,
    Distance,
    DateTime,
    Undefined,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Bool => "boolean",
            Self::Integer => "32-bit signed integer",
            Self::Float => "floating point value",
            Self::Double => "double width floating point value",
            Self::Double2 => "vector of two double values",
            Self::Double3 => "vector of three double values",
            Self::Double4 => "vector of four double values",
            Self::Matrix4x4 => "4x4 matrix",
            Self::Enum => "enumeration",
            Self::String => "string",
            Self::Time => "time value",
            Self::Reference => "object reference",
            Self::Blob => "binary data block",
            Self::Distance => "distance",
            Self::DateTime => "date and time",
            Self::Undefined => "undefined",
        };
        f.write_str(text)
    }
}

/// A typed property value returned by the evaluator.
///
/// The variant is expected to match the property's declared
/// [`PropertyKind`]; a mismatch surfaces as a read failure during encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i32),
    Float(f32),
    Double(f64),
    Double2([f64; 2]),
    Double3([f64; 3]),
}

/// A loaded authoring document with its animation evaluator.
///
/// The evaluator operates against one clip at a time through the shared
/// "current clip" selector, which makes the whole source non-reentrant:
/// two clips must never interleave evaluator calls. [`ClipScope`] wraps
/// the selector in a scoped acquisition.
pub trait SceneSource {
    /// Opaque node handle.
    type Node: Copy;
    /// Opaque property handle.
    type Property;

    fn find_node_by_name(&self, name: &str) -> Option<Self::Node>;
    fn find_property(&self, node: Self::Node, name: &str) -> Option<Self::Property>;

    /// Number of animation clips in the document.
    fn clip_count(&self) -> usize;
    /// Authored name of a clip, by enumeration index.
    fn clip_name(&self, clip: usize) -> String;
    /// The clip's authored local time span, if it carries one.
    fn clip_time_span(&self, clip: usize) -> Option<TimeSpan>;
    /// The document's default timeline span.
    fn default_time_span(&self) -> TimeSpan;

    /// The document's timeline rate setting.
    fn time_mode(&self) -> TimeMode;
    /// Custom frame rate, consulted when [`SceneSource::time_mode`] is
    /// [`TimeMode::Custom`]. Must be positive.
    fn custom_frame_rate(&self) -> f32;

    /// The clip the evaluator is currently bound to.
    fn current_clip(&self) -> Option<usize>;
    /// Rebinds the evaluator to a clip, or unbinds it with `None`.
    fn select_clip(&mut self, clip: Option<usize>);

    /// World-space transform of a node at an absolute time.
    fn global_transform(&self, node: Self::Node, time: f32) -> Mat4;
    /// Parent-relative transform of a node at an absolute time.
    fn local_transform(&self, node: Self::Node, time: f32) -> Mat4;

    /// Declared data type of a property.
    fn property_kind(&self, property: &Self::Property) -> PropertyKind;
    /// Whether the property carries animation curves at all.
    fn property_is_animated(&self, property: &Self::Property) -> bool;
    /// Typed value of a property at an absolute time.
    fn property_value(&self, property: &Self::Property, time: f32) -> PropertyValue;
}

/// Scoped acquisition of the scene's current-clip selector.
///
/// Selects the clip on construction and restores the previous selection on
/// drop. Holding the scope borrows the source mutably, so evaluator calls
/// from two clips cannot interleave.
pub struct ClipScope<'a, S: SceneSource> {
    scene: &'a mut S,
    previous: Option<usize>,
}

impl<'a, S: SceneSource> ClipScope<'a, S> {
    pub fn new(scene: &'a mut S, clip: usize) -> Self {
        let previous = scene.current_clip();
        scene.select_clip(Some(clip));
        Self { scene, previous }
    }
}

impl<S: SceneSource> Deref for ClipScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.scene
    }
}

impl<S: SceneSource> Drop for ClipScope<'_, S> {
    fn drop(&mut self) {
        self.scene.select_clip(self.previous);
    }
}
