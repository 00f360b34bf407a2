//! Feedback domain: music cue bookkeeping. Audio playback lives elsewhere.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::feedback::events::MusicCueEvent;

#[derive(Resource, Debug, Default)]
pub struct MusicDirector {
    pub current_cue: Option<String>,
    pub last_transition_ms: u32,
    pub crossfades: u32,
}

impl MusicDirector {
    /// Switch to `cue`. Requesting the cue already playing is ignored.
    /// Returns true when a crossfade started.
    pub fn crossfade_to(&mut self, cue: &str, transition_ms: u32) -> bool {
        if self.current_cue.as_deref() == Some(cue) {
            return false;
        }
        self.current_cue = Some(cue.to_string());
        self.last_transition_ms = transition_ms;
        self.crossfades += 1;
        true
    }
}

pub(crate) fn receive_music_cues(
    mut events: MessageReader<MusicCueEvent>,
    mut director: ResMut<MusicDirector>,
) {
    for event in events.read() {
        if director.crossfade_to(&event.cue, event.transition_ms) {
            info!(
                "Music crossfade to '{}' over {}ms",
                event.cue, event.transition_ms
            );
        }
    }
}
