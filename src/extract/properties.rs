//! Property track builder: one named scalar/vector property, step- or
//! linear-encoded.

use glam::{Vec2, Vec3};

use crate::animation::tracks::{Interpolation, PropertyKey, PropertyTrack, TrackData};
use crate::animation::values::TrackValue;
use crate::errors::{BakeError, Result};
use crate::sampling::SamplingInfo;
use crate::source::{ClipScope, PropertyKind, SceneSource};

/// Extracts one `node:property` pair as a keyframe track, sampled against
/// the given clip.
///
/// Unlike the joint path, a missing node or property here is a hard lookup
/// failure. The property's declared kind selects the track arity; kinds
/// without a keyframe encoding are rejected outright.
pub fn extract_track<S: SceneSource>(
    scene: &mut S,
    clip: usize,
    sampling_rate: f32,
    node_name: &str,
    property_name: &str,
) -> Result<TrackData> {
    log::info!("Extracting animation track \"{node_name}:{property_name}\".");

    let info = SamplingInfo::from_scene(scene, clip, sampling_rate);
    let scope = ClipScope::new(scene, clip);

    let Some(node) = scope.find_node_by_name(node_name) else {
        log::error!("Invalid node name \"{node_name}\".");
        return Err(BakeError::NodeNotFound(node_name.to_string()));
    };

    let Some(property) = scope.find_property(node, property_name) else {
        log::error!("Invalid property name \"{property_name}\".");
        return Err(BakeError::PropertyNotFound {
            node: node_name.to_string(),
            property: property_name.to_string(),
        });
    };

    extract_property(&*scope, &info, &property, format!("{node_name}:{property_name}"))
}

fn extract_property<S: SceneSource>(
    scene: &S,
    info: &SamplingInfo,
    property: &S::Property,
    name: String,
) -> Result<TrackData> {
    let kind = scene.property_kind(property);
    match kind {
        PropertyKind::Bool | PropertyKind::Integer | PropertyKind::Float | PropertyKind::Double => {
            extract_curve::<f32, S>(scene, info, property, name, kind).map(TrackData::Scalar)
        }
        PropertyKind::Double2 => {
            extract_curve::<Vec2, S>(scene, info, property, name, kind).map(TrackData::Vector2)
        }
        PropertyKind::Double3 => {
            extract_curve::<Vec3, S>(scene, info, property, name, kind).map(TrackData::Vector3)
        }
        _ => {
            log::error!("Unsupported track type: {kind}.");
            Err(BakeError::UnsupportedKind(kind))
        }
    }
}

fn extract_curve<T: TrackValue, S: SceneSource>(
    scene: &S,
    info: &SamplingInfo,
    property: &S::Property,
    name: String,
    kind: PropertyKind,
) -> Result<PropertyTrack<T>> {
    let mut track = PropertyTrack::new(name);

    if scene.property_is_animated(property) {
        track.keys.reserve(info.max_keys());

        for time in info.sample_times() {
            // The kind was validated by the dispatch above, so a mismatch
            // here is an evaluator defect; it still fails the whole track.
            let raw = scene.property_value(property, time);
            let Some(value) = T::from_property(&raw) else {
                log::error!("Failed to read property value at t = {time}s.");
                return Err(BakeError::PropertyRead { kind, time });
            };

            track.keys.push(PropertyKey {
                interpolation: Interpolation::Linear,
                ratio: info.ratio(time),
                value,
            });
        }
    } else {
        // Constant property: a single held key carries the whole track.
        let raw = scene.property_value(property, 0.0);
        let Some(value) = T::from_property(&raw) else {
            log::error!("Failed to read property value at t = 0s.");
            return Err(BakeError::PropertyRead { kind, time: 0.0 });
        };

        track.keys.push(PropertyKey {
            interpolation: Interpolation::Step,
            ratio: 0.0,
            value,
        });
    }

    if !track.validate() {
        log::error!("Track \"{}\" failed keyframe validation.", track.name);
        return Err(BakeError::InvalidTrack(track.name));
    }

    Ok(track)
}
