//! Boss domain: telegraph scheduling and warning markers.
//!
//! A telegraph has two halves. The resolution (unlocking the boss and
//! starting its charge or burst) is queued on the encounter clock and drained
//! by the fixed-step orchestrator. The marker is purely cosmetic and animates
//! on frame time, fading out for a short while after the nominal duration.

use bevy::prelude::*;

use crate::content::TelegraphShape;

/// What happens when a telegraph completes
#[derive(Debug, Clone, PartialEq)]
pub enum TelegraphResolution {
    /// Unlock and dash along the direction frozen at invocation
    Charge { direction: Vec2 },
    /// Unlock and fire from the boss's position at resolution time
    Burst {
        ability_id: String,
        count: u32,
        damage: f32,
    },
    /// Unlock only; marker abilities that deal no damage
    Unlock { ability_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingTelegraph {
    pub resolve_at: f64,
    pub boss: Entity,
    pub resolution: TelegraphResolution,
}

/// Deferred telegraph completions, keyed on the encounter clock
#[derive(Resource, Debug, Default)]
pub struct TelegraphQueue {
    pending: Vec<PendingTelegraph>,
}

impl TelegraphQueue {
    pub fn schedule(&mut self, resolve_at: f64, boss: Entity, resolution: TelegraphResolution) {
        self.pending.push(PendingTelegraph {
            resolve_at,
            boss,
            resolution,
        });
    }

    /// Remove and return every entry due at `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<PendingTelegraph> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|entry| entry.resolve_at <= now);
        self.pending = waiting;
        due.sort_by(|a, b| a.resolve_at.total_cmp(&b.resolve_at));
        due
    }

    /// Drop every entry belonging to `boss`. Returns how many were dropped.
    pub fn forget(&mut self, boss: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.boss != boss);
        before - self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Visual warning indicator
#[derive(Component, Debug)]
pub struct TelegraphMarker {
    pub shape: TelegraphShape,
    pub duration: f32,
    pub fade: f32,
    pub elapsed: f32,
}

/// Scale and alpha of a marker at a point in its life
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelegraphVisual {
    pub scale: Vec2,
    pub alpha: f32,
}

/// Growth/pulse curve for each shape. Returns `None` once the fade is over.
pub fn telegraph_visual(
    shape: TelegraphShape,
    elapsed: f32,
    duration: f32,
    fade: f32,
) -> Option<TelegraphVisual> {
    if shape == TelegraphShape::None || elapsed >= duration + fade {
        return None;
    }

    let progress = if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let (scale, alpha) = match shape {
        TelegraphShape::Circle => (Vec2::splat(0.2 + 0.8 * progress), 0.25 + 0.35 * progress),
        TelegraphShape::Cone => {
            let eased = 1.0 - (1.0 - progress).powi(2);
            (Vec2::new(eased, 1.0), 0.4)
        }
        TelegraphShape::Line => (Vec2::new(progress.max(0.05), 1.0), 0.3 + 0.3 * progress),
        TelegraphShape::Ring => (Vec2::splat(1.6 - 0.6 * progress), 0.6 * progress),
        TelegraphShape::Pulse => {
            let beat = (elapsed * 12.0).sin();
            (Vec2::splat(1.0 + 0.1 * beat), 0.3 + 0.2 * beat.abs())
        }
        TelegraphShape::GroundMarker => {
            // Blinks faster as the strike approaches
            let blink = (elapsed * (6.0 + 18.0 * progress)).sin().abs();
            (Vec2::ONE, 0.2 + 0.4 * blink)
        }
        TelegraphShape::ScreenFlash => (Vec2::ONE, 0.5 * progress),
        TelegraphShape::None => return None,
    };

    let fade_factor = if elapsed > duration && fade > 0.0 {
        (1.0 - (elapsed - duration) / fade).clamp(0.0, 1.0)
    } else {
        1.0
    };

    Some(TelegraphVisual {
        scale,
        alpha: alpha * fade_factor,
    })
}

/// Base sprite size of a marker before its curve scale applies.
pub fn marker_size(shape: TelegraphShape, radius: f32) -> Vec2 {
    match shape {
        TelegraphShape::Cone => Vec2::new(radius * 2.0, radius * 1.2),
        TelegraphShape::Line => Vec2::new(radius * 4.0, radius * 0.5),
        TelegraphShape::ScreenFlash => Vec2::new(4000.0, 4000.0),
        _ => Vec2::splat(radius * 2.0),
    }
}

pub fn spawn_telegraph_marker(
    commands: &mut Commands,
    position: Vec2,
    radius: f32,
    duration: f32,
    shape: TelegraphShape,
    angle: f32,
    fade: f32,
) -> Option<Entity> {
    if shape == TelegraphShape::None {
        return None;
    }

    let size = marker_size(shape, radius);
    let z = if shape == TelegraphShape::ScreenFlash { 50.0 } else { 0.5 };
    let mut transform = Transform::from_xyz(position.x, position.y, z);
    if matches!(shape, TelegraphShape::Cone | TelegraphShape::Line) {
        transform.rotation = Quat::from_rotation_z(angle);
    }

    let entity = commands
        .spawn((
            TelegraphMarker {
                shape,
                duration,
                fade,
                elapsed: 0.0,
            },
            Sprite {
                color: Color::srgba(1.0, 0.2, 0.1, 0.0),
                custom_size: Some(size),
                ..default()
            },
            transform,
        ))
        .id();

    Some(entity)
}

/// Advance marker curves on frame time and tear them down after the fade.
pub(crate) fn animate_telegraph_markers(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut TelegraphMarker, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut marker, mut transform, mut sprite) in &mut query {
        marker.elapsed += dt;
        match telegraph_visual(marker.shape, marker.elapsed, marker.duration, marker.fade) {
            Some(visual) => {
                transform.scale = visual.scale.extend(1.0);
                sprite.color = Color::srgba(1.0, 0.2, 0.1, visual.alpha);
            }
            None => {
                commands.entity(entity).despawn();
            }
        }
    }
}
