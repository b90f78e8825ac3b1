//! Hands-off player for headless runs

use super::pipe::Pipe;
use super::state::GameState;

/// How far above the lower lip of the gap the fish should stay
const LIP_MARGIN: f32 = 20.0;

/// The first pipe the fish has not cleared yet
pub fn next_pipe(state: &GameState) -> Option<&Pipe> {
    let fish_x = state.session.fish.x;
    state.session.pipes.iter().find(|p| p.right() >= fish_x)
}

/// Flap when the fish is sinking below the line it should hold
pub fn wants_flap(state: &GameState) -> bool {
    if !state.is_active() {
        return false;
    }

    let fish = &state.session.fish;
    let hold_line = match next_pipe(state) {
        Some(pipe) => pipe.gap_bottom() - LIP_MARGIN,
        None => state.tuning.field_height / 2.0 + fish.height,
    };

    fish.velocity >= 0.0 && fish.bounds().bottom() > hold_line
}
