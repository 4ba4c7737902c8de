//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`BakeError`] covers all failure modes including:
//! - Node and property lookup failures
//! - Transform conversion failures
//! - Unsupported property encodings
//! - Structural keyframe validation failures
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, BakeError>`.

use thiserror::Error;

use crate::source::PropertyKind;

/// The main error type for animation extraction.
///
/// Each variant provides specific context about what went wrong. Batch
/// extraction treats every variant as fatal for the whole batch; property
/// track extraction is independent per call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BakeError {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// The named scene node was not found (property track path only; the
    /// joint track path falls back to the bind pose instead).
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The named property was not found on its node.
    #[error("Property not found: {node}:{property}")]
    PropertyNotFound {
        /// Name of the node the lookup ran on
        node: String,
        /// The missing property name
        property: String,
    },

    // ========================================================================
    // Conversion Errors
    // ========================================================================
    /// A matrix could not be decomposed into a TRS transform.
    #[error("Matrix cannot be decomposed into a translation/rotation/scale transform")]
    UndecomposableMatrix,

    /// The transform converter rejected a sampled joint matrix. Aborts the
    /// whole clip; a partially converted clip is never emitted.
    #[error("Failed to convert transform for joint \"{joint}\" at t = {time}s")]
    TransformConversion {
        /// Joint whose sample failed to convert
        joint: String,
        /// Absolute sample time in seconds
        time: f32,
    },

    // ========================================================================
    // Property Encoding Errors
    // ========================================================================
    /// The property's declared kind has no keyframe encoding.
    #[error("Unsupported track type: {0}")]
    UnsupportedKind(PropertyKind),

    /// A typed property read did not match the declared kind.
    #[error("Failed to read {kind} property value at t = {time}s")]
    PropertyRead {
        /// Declared kind the read was validated against
        kind: PropertyKind,
        /// Absolute sample time in seconds
        time: f32,
    },

    // ========================================================================
    // Batch Errors
    // ========================================================================
    /// The scene contains no animation clips at all.
    #[error("No animation found")]
    NoAnimation,

    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// A built clip failed its keyframe post-condition check. This indicates
    /// an upstream bug and is never silently repaired.
    #[error("Animation \"{0}\" failed keyframe validation")]
    InvalidClip(String),

    /// A built property track failed its keyframe post-condition check.
    #[error("Track \"{0}\" failed keyframe validation")]
    InvalidTrack(String),
}

/// Alias for `Result<T, BakeError>`.
pub type Result<T> = std::result::Result<T, BakeError>;
