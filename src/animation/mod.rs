pub mod clip;
pub mod tracks;
pub mod values;

pub use clip::{AnimationClip, JointTrack, RotationKey, ScaleKey, TranslationKey};
pub use tracks::{Interpolation, PropertyKey, PropertyTrack, TrackData};
pub use values::{Interpolate, TrackValue};
