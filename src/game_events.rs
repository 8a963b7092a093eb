//! Maps [`GameEvent`]s to presentation state and audio cues.
//!
//! This is a binary-only module (not part of `lib.rs`): it holds the bits of
//! display state that are not game state, such as whether the warning flash
//! is lit or the flap sprite is showing.

use skyward::core::GameEvent;
use std::time::{Duration, Instant};

/// How long the "Faster!" banner stays up after a difficulty increase.
const LEVEL_UP_BANNER: Duration = Duration::from_millis(1500);

/// Sounds the game would play. There is no audio backend; cues are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Point,
    Die,
}

#[derive(Debug, Default)]
pub struct Presentation {
    /// Warning flash is lit.
    pub flash: bool,
    /// Ascend is held: show the flap sprite.
    pub flapping: bool,
    /// The current or last run beat the previous best.
    pub new_high_score: bool,
    pub level_up_at: Option<Instant>,
    pub last_cue: Option<AudioCue>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level_up_visible(&self) -> bool {
        self.level_up_at
            .is_some_and(|at| at.elapsed() < LEVEL_UP_BANNER)
    }

    fn play(&mut self, cue: AudioCue) {
        tracing::debug!(?cue, "audio cue");
        self.last_cue = Some(cue);
    }
}

pub fn apply_game_events(presentation: &mut Presentation, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Started { .. } => {
                *presentation = Presentation::new();
            }
            GameEvent::Ascended => presentation.flapping = true,
            GameEvent::AscendReleased => presentation.flapping = false,
            GameEvent::ScoreChanged { new_high_score, .. } => {
                if *new_high_score {
                    presentation.new_high_score = true;
                }
                presentation.play(AudioCue::Point);
            }
            GameEvent::DifficultyRaised { .. } => {
                presentation.level_up_at = Some(Instant::now());
            }
            GameEvent::Warning { on } => presentation.flash = *on,
            GameEvent::GameOver { .. } => {
                presentation.flash = false;
                presentation.flapping = false;
                presentation.level_up_at = None;
                presentation.play(AudioCue::Die);
            }
            // Positions are read straight from the session when drawing
            GameEvent::BirdMoved { .. }
            | GameEvent::ObstacleSpawned { .. }
            | GameEvent::ObstacleMoved { .. }
            | GameEvent::ObstacleRemoved { .. } => {}
        }
    }
}
