//! Per-frame game loop
//!
//! One call to [`tick`] advances an active session by exactly one frame and
//! paints it. The host keeps calling it while it returns
//! [`FrameOutcome::Continue`].

use super::cloud::Cloud;
use super::pipe::Pipe;
use super::random::chance;
use super::state::GameState;
use crate::canvas::{Canvas, colors};
use crate::ui::Overlay;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// Advance the game by one frame at host time `now_ms`
pub fn tick(
    state: &mut GameState,
    now_ms: f64,
    canvas: &mut impl Canvas,
    ui: &mut impl Overlay,
) -> FrameOutcome {
    if !state.is_active() {
        return FrameOutcome::Stop;
    }

    let tuning = &state.tuning;
    canvas.fill_rect(
        0.0,
        0.0,
        tuning.field_width,
        tuning.field_height,
        colors::SKY_BLUE,
    );

    state.session.frames += 1;
    state.session.fish.update(&state.tuning);
    state.session.water.update(&state.tuning);

    generate_pipes(state, now_ms);
    generate_clouds(state, now_ms);

    let GameState {
        tuning, session, ..
    } = state;

    // Clouds: move, draw, keep the ones still on screen
    let mut clouds = Vec::with_capacity(session.clouds.len());
    for mut cloud in session.clouds.drain(..) {
        cloud.update();
        cloud.draw(canvas);
        if !cloud.is_off_screen() {
            clouds.push(cloud);
        }
    }
    session.clouds = clouds;

    // Pipes: move, draw, collide, score, keep the ones still on screen
    let mut crashed = false;
    let mut pipes = Vec::with_capacity(session.pipes.len());
    for mut pipe in session.pipes.drain(..) {
        pipe.update(tuning);
        pipe.draw(canvas, tuning);

        if pipe.collides(&session.fish) {
            crashed = true;
        }

        if pipe.try_pass(session.fish.x) {
            session.score += 1;
            ui.set_score_text(session.score);
        }

        if !pipe.is_off_screen() {
            pipes.push(pipe);
        }
    }
    session.pipes = pipes;

    if session.water.touches(&session.fish) {
        crashed = true;
    }

    session.water.draw(canvas);
    session.fish.draw(canvas);

    if crashed {
        state.end(ui);
        return FrameOutcome::Stop;
    }
    FrameOutcome::Continue
}

fn generate_pipes(state: &mut GameState, now_ms: f64) {
    if !state.session.pipe_spawner.poll(now_ms) {
        return;
    }
    let pipe = Pipe::new(&mut state.rng, &state.tuning);
    log::debug!("Spawned pipe with gap at {:.0}", pipe.gap_top());
    state.session.pipes.push(pipe);
}

fn generate_clouds(state: &mut GameState, now_ms: f64) {
    if !state.session.cloud_spawner.poll(now_ms) {
        return;
    }
    if chance(&mut state.rng, state.tuning.cloud_chance) {
        let cloud = Cloud::new(&mut state.rng, &state.tuning);
        state.session.clouds.push(cloud);
    }
}
