//! Feedback domain: screen shake applied to the 2D camera.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::feedback::events::CameraShakeEvent;

/// Pixels of offset per unit of shake intensity
const SHAKE_AMPLITUDE: f32 = 12.0;

#[derive(Resource, Debug, Default)]
pub struct CameraShake {
    pub intensity: f32,
    pub remaining: f32,
    pub duration: f32,
    elapsed: f32,
}

impl CameraShake {
    /// A stronger or longer request replaces the weaker parts of the current shake.
    pub fn add(&mut self, intensity: f32, duration: f32) {
        if self.remaining <= 0.0 {
            self.intensity = 0.0;
        }
        self.intensity = self.intensity.max(intensity);
        if duration > self.remaining {
            self.remaining = duration;
            self.duration = duration;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance the shake and return this frame's camera offset.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.elapsed += dt;

        let falloff = if self.duration > 0.0 {
            self.remaining / self.duration
        } else {
            0.0
        };
        let magnitude = self.intensity * falloff * SHAKE_AMPLITUDE;
        Vec2::new(
            (self.elapsed * 73.0).sin() * magnitude,
            (self.elapsed * 91.0).cos() * magnitude,
        )
    }
}

pub(crate) fn receive_camera_shake(
    mut events: MessageReader<CameraShakeEvent>,
    mut shake: ResMut<CameraShake>,
) {
    for event in events.read() {
        debug!(
            "Camera shake {:.2} for {:.2}s",
            event.intensity, event.duration
        );
        shake.add(event.intensity, event.duration);
    }
}

pub(crate) fn apply_camera_shake(
    time: Res<Time>,
    mut shake: ResMut<CameraShake>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let offset = shake.step(time.delta_secs());
    for mut transform in &mut cameras {
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}
