//! Feedback domain: requests for camera and music feedback.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraShakeEvent {
    pub intensity: f32,
    pub duration: f32,
}

impl Message for CameraShakeEvent {}

/// Crossfade to a music cue
#[derive(Debug, Clone, PartialEq)]
pub struct MusicCueEvent {
    pub cue: String,
    pub transition_ms: u32,
}

impl Message for MusicCueEvent {}
