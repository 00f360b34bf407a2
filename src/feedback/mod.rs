//! Feedback domain: camera shake and music cues requested by gameplay.

mod camera;
mod events;
mod music;

pub use camera::CameraShake;
pub use events::{CameraShakeEvent, MusicCueEvent};
pub use music::MusicDirector;

use bevy::prelude::*;

use crate::feedback::camera::{apply_camera_shake, receive_camera_shake};
use crate::feedback::music::receive_music_cues;

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>()
            .init_resource::<MusicDirector>()
            .add_message::<CameraShakeEvent>()
            .add_message::<MusicCueEvent>()
            .add_systems(
                Update,
                (
                    (receive_camera_shake, apply_camera_shake).chain(),
                    receive_music_cues,
                ),
            );
    }
}
