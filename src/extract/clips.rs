//! Joint track builder and the all-or-nothing clip batch extractor.

use crate::animation::clip::{AnimationClip, JointTrack, RotationKey, ScaleKey, TranslationKey};
use crate::errors::{BakeError, Result};
use crate::sampling::SamplingInfo;
use crate::skeleton::Skeleton;
use crate::source::{ClipScope, SceneSource};
use crate::transform::TransformConverter;

/// Extracts every animation clip in the scene against the given skeleton.
///
/// Clips are processed sequentially in scene enumeration order; each one
/// holds the scene's current-clip selector for the whole of its extraction.
/// The batch commits all-or-nothing: the first failing clip discards all
/// staged output and the error propagates to the caller. A scene with no
/// clips is a failure, never an empty success.
pub fn extract_animations<S, C>(
    scene: &mut S,
    skeleton: &Skeleton,
    converter: &C,
    sampling_rate: f32,
) -> Result<Vec<AnimationClip>>
where
    S: SceneSource,
    C: TransformConverter + ?Sized,
{
    let clip_count = scene.clip_count();
    if clip_count == 0 {
        log::error!("No animation found.");
        return Err(BakeError::NoAnimation);
    }

    // Stage locally; the caller only ever sees a complete batch.
    let mut clips = Vec::with_capacity(clip_count);
    for clip in 0..clip_count {
        let info = SamplingInfo::from_scene(scene, clip, sampling_rate);
        let scope = ClipScope::new(scene, clip);
        clips.push(extract_clip(&*scope, clip, &info, skeleton, converter)?);
    }

    Ok(clips)
}

fn extract_clip<S, C>(
    scene: &S,
    clip: usize,
    info: &SamplingInfo,
    skeleton: &Skeleton,
    converter: &C,
) -> Result<AnimationClip>
where
    S: SceneSource,
    C: TransformConverter + ?Sized,
{
    let name = scene.clip_name(clip);
    log::info!("Extracting animation \"{name}\".");

    let mut tracks = Vec::with_capacity(skeleton.num_joints());
    for joint in 0..skeleton.num_joints() {
        tracks.push(extract_joint_track(scene, info, skeleton, joint, converter)?);
    }

    let animation = AnimationClip {
        name,
        duration: info.duration,
        tracks,
    };

    // Post-condition, not a recoverable step: a violation means the sampler
    // itself produced malformed keys.
    if !animation.validate() {
        log::error!("Animation \"{}\" failed keyframe validation.", animation.name);
        return Err(BakeError::InvalidClip(animation.name));
    }

    Ok(animation)
}

fn extract_joint_track<S, C>(
    scene: &S,
    info: &SamplingInfo,
    skeleton: &Skeleton,
    joint: usize,
    converter: &C,
) -> Result<JointTrack>
where
    S: SceneSource,
    C: TransformConverter + ?Sized,
{
    let joint_name = skeleton.joint_name(joint);

    // A joint without a matching scene node is not an error: it holds its
    // bind pose for the whole clip.
    let Some(node) = scene.find_node_by_name(joint_name) else {
        log::debug!(
            "No animation track found for joint \"{joint_name}\". \
             Using skeleton bind pose instead."
        );
        return Ok(JointTrack::from_pose(skeleton.bind_pose(joint)));
    };

    let mut track = JointTrack::default();
    let max_keys = info.max_keys();
    track.translations.reserve(max_keys);
    track.rotations.reserve(max_keys);
    track.scales.reserve(max_keys);

    // Root joints are expressed in world space, children relative to their
    // parent, matching the skeleton's own convention.
    let is_root = skeleton.joint_parent(joint).is_none();

    for time in info.sample_times() {
        let matrix = if is_root {
            scene.global_transform(node, time)
        } else {
            scene.local_transform(node, time)
        };

        let Ok(transform) = converter.convert(matrix) else {
            log::error!(
                "Failed to extract animation transform for joint \
                 \"{joint_name}\" at t = {time}s."
            );
            return Err(BakeError::TransformConversion {
                joint: joint_name.to_string(),
                time,
            });
        };

        let local_time = info.local_time(time);
        track.translations.push(TranslationKey {
            time: local_time,
            value: transform.position,
        });
        track.rotations.push(RotationKey {
            time: local_time,
            value: transform.rotation,
        });
        track.scales.push(ScaleKey {
            time: local_time,
            value: transform.scale,
        });
    }

    Ok(track)
}
