pub mod clips;
pub mod properties;

pub use clips::extract_animations;
pub use properties::extract_track;
