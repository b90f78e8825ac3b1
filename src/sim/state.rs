//! Game state and session lifecycle
//!
//! [`GameState`] owns everything that changes while the game runs. A play
//! session's entities live in [`Session`], which is rebuilt from scratch on
//! every start.

use super::cloud::Cloud;
use super::fish::Fish;
use super::pipe::Pipe;
use super::random::{GameRng, seeded};
use super::spawner::Spawner;
use super::water::WaterSurface;
use crate::canvas::{Canvas, colors};
use crate::tuning::Tuning;
use crate::ui::Overlay;

/// Screen-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, nothing has been played yet
    Idle,
    /// Frames are running
    Active,
    /// Game-over screen, the session is frozen
    Ended,
}

/// What a flap/start input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Flapped,
    /// A new session began; the host must start scheduling frames
    Started,
}

/// Entities and counters of one play session
#[derive(Debug, Clone)]
pub struct Session {
    pub fish: Fish,
    /// Ordered by spawn time
    pub pipes: Vec<Pipe>,
    pub clouds: Vec<Cloud>,
    pub water: WaterSurface,
    pub score: u32,
    pub pipe_spawner: Spawner,
    pub cloud_spawner: Spawner,
    /// Frames simulated this session
    pub frames: u64,
}

impl Session {
    pub fn new(rng: &mut GameRng, tuning: &Tuning) -> Self {
        let clouds = (0..tuning.initial_clouds)
            .map(|_| Cloud::new(rng, tuning))
            .collect();

        Self {
            fish: Fish::new(tuning),
            pipes: Vec::new(),
            clouds,
            water: WaterSurface::new(tuning),
            score: 0,
            pipe_spawner: Spawner::new(tuning.pipe_interval_ms),
            cloud_spawner: Spawner::new(tuning.cloud_interval_ms),
            frames: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub session: Session,
    /// Score of the last finished session
    pub final_score: Option<u32>,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create an idle game; nothing moves until [`GameState::start`]
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = seeded(seed);
        let session = Session::new(&mut rng, &tuning);
        Self {
            tuning,
            phase: GamePhase::Idle,
            session,
            final_score: None,
            seed,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    /// Start or restart: fresh session, overlays hidden
    pub fn start(&mut self, ui: &mut impl Overlay) {
        self.session = Session::new(&mut self.rng, &self.tuning);
        self.phase = GamePhase::Active;

        ui.set_score_text(0);
        ui.hide_overlays();

        log::info!("Session started");
    }

    /// Flap the fish; ignored unless a session is running
    pub fn flap(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.session.fish.flap(&self.tuning);
        true
    }

    /// The single input: flap while playing, otherwise start a session
    pub fn trigger(&mut self, ui: &mut impl Overlay) -> Trigger {
        if self.flap() {
            Trigger::Flapped
        } else {
            self.start(ui);
            Trigger::Started
        }
    }

    /// Freeze the session and show the game-over screen
    pub(crate) fn end(&mut self, ui: &mut impl Overlay) {
        if !self.is_active() {
            return;
        }
        let score = self.session.score;
        self.phase = GamePhase::Ended;
        self.final_score = Some(score);
        ui.show_game_over_overlay(score);

        log::info!(
            "Game over: score {} after {} frames",
            score,
            self.session.frames
        );
    }

    /// Start screen: sky and water only
    pub fn present_idle(&self, canvas: &mut impl Canvas, ui: &mut impl Overlay) {
        canvas.fill_rect(
            0.0,
            0.0,
            self.tuning.field_width,
            self.tuning.field_height,
            colors::SKY_BLUE,
        );
        self.session.water.draw(canvas);
        ui.show_start_overlay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::ui::{OverlayEvent, RecordingOverlay};

    #[test]
    fn test_new_is_idle() {
        let state = GameState::new(Tuning::default(), 12345);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score(), 0);
        assert!(state.final_score.is_none());
    }

    #[test]
    fn test_start_resets_session() {
        let mut state = GameState::new(Tuning::default(), 12345);
        let mut ui = RecordingOverlay::default();

        state.start(&mut ui);
        state.session.score = 9;
        state.session.pipes.push(Pipe::with_gap_top(200.0, 150.0, &state.tuning));
        state.session.clouds.clear();
        state.session.fish.y = 12.0;
        state.session.fish.velocity = 4.0;

        state.start(&mut ui);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score(), 0);
        assert!(state.session.pipes.is_empty());
        assert_eq!(state.session.clouds.len(), 3);
        assert_eq!(state.session.fish.y, 300.0);
        assert_eq!(state.session.fish.velocity, 0.0);
        assert_eq!(state.session.pipe_spawner.last_fire_ms, 0.0);
        assert_eq!(state.session.cloud_spawner.last_fire_ms, 0.0);
        assert_eq!(
            ui.events,
            vec![
                OverlayEvent::Score(0),
                OverlayEvent::Hide,
                OverlayEvent::Score(0),
                OverlayEvent::Hide,
            ]
        );
    }

    #[test]
    fn test_trigger_dispatch() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut ui = RecordingOverlay::default();

        assert!(!state.flap());
        assert_eq!(state.trigger(&mut ui), Trigger::Started);
        assert_eq!(state.trigger(&mut ui), Trigger::Flapped);
        assert_eq!(state.session.fish.velocity, -7.0);

        state.end(&mut ui);
        assert_eq!(state.phase, GamePhase::Ended);
        assert!(!state.flap());
        assert_eq!(state.trigger(&mut ui), Trigger::Started);
        assert!(state.is_active());
    }

    #[test]
    fn test_end_only_once() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut ui = RecordingOverlay::default();
        state.start(&mut ui);
        state.session.score = 4;

        state.end(&mut ui);
        state.end(&mut ui);
        assert_eq!(state.final_score, Some(4));
        let shown = ui
            .events
            .iter()
            .filter(|e| matches!(e, OverlayEvent::ShowGameOver(_)))
            .count();
        assert_eq!(shown, 1);
    }

    #[test]
    fn test_present_idle() {
        let state = GameState::new(Tuning::default(), 1);
        let mut list = DrawList::new();
        let mut ui = RecordingOverlay::default();
        state.present_idle(&mut list, &mut ui);

        assert_eq!(list.commands()[0].color(), colors::SKY_BLUE);
        assert!(list.len() > 1);
        assert_eq!(ui.events, vec![OverlayEvent::ShowStart]);
    }

    #[test]
    fn test_sessions_draw_different_clouds() {
        let mut state = GameState::new(Tuning::default(), 77);
        let mut ui = RecordingOverlay::default();
        state.start(&mut ui);
        let first = state.session.clouds.clone();
        state.start(&mut ui);
        assert_ne!(first, state.session.clouds);
    }
}
