//! Overlay collaborators
//!
//! The simulation never touches the DOM. It reports score changes and
//! screen transitions through [`Overlay`]; the browser host implements it
//! over HTML elements, headless runs use [`NullOverlay`].

/// Score text and start / game-over panels
pub trait Overlay {
    fn set_score_text(&mut self, score: u32);
    fn show_start_overlay(&mut self);
    fn show_game_over_overlay(&mut self, score: u32);
    fn hide_overlays(&mut self);
}

/// Discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOverlay;

impl Overlay for NullOverlay {
    fn set_score_text(&mut self, _score: u32) {}
    fn show_start_overlay(&mut self) {}
    fn show_game_over_overlay(&mut self, _score: u32) {}
    fn hide_overlays(&mut self) {}
}

/// Records overlay calls for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingOverlay {
    pub events: Vec<OverlayEvent>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayEvent {
    Score(u32),
    ShowStart,
    ShowGameOver(u32),
    Hide,
}

#[cfg(test)]
impl Overlay for RecordingOverlay {
    fn set_score_text(&mut self, score: u32) {
        self.events.push(OverlayEvent::Score(score));
    }

    fn show_start_overlay(&mut self) {
        self.events.push(OverlayEvent::ShowStart);
    }

    fn show_game_over_overlay(&mut self, score: u32) {
        self.events.push(OverlayEvent::ShowGameOver(score));
    }

    fn hide_overlays(&mut self) {
        self.events.push(OverlayEvent::Hide);
    }
}
