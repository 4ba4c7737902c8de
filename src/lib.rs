#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod extract;
pub mod sampling;
pub mod skeleton;
pub mod source;
pub mod transform;

pub use animation::{AnimationClip, Interpolation, JointTrack, PropertyTrack, TrackData};
pub use errors::{BakeError, Result};
pub use extract::{extract_animations, extract_track};
pub use sampling::{SampleTimes, SamplingInfo};
pub use skeleton::{Joint, Skeleton};
pub use source::{ClipScope, PropertyKind, PropertyValue, SceneSource, TimeMode, TimeSpan};
pub use transform::{DecomposeConverter, Transform, TransformConverter};
