//! DOM-backed overlays
//!
//! Expects the page to provide `#score`, `#final-score`, `#start-screen` and
//! `#game-over-screen`. Panels are shown and hidden with the `hidden` class.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::tuning::Tuning;
use crate::ui::Overlay;

const HIDDEN_CLASS: &str = "hidden";
/// Optional `<script type="application/json">` element with tuning overrides
const TUNING_ELEMENT_ID: &str = "tuning";

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

/// Overlay that writes straight into the page
pub struct DomOverlay {
    score: Element,
    final_score: Element,
    start_screen: Element,
    game_over_screen: Element,
}

impl DomOverlay {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            score: element(document, "score")?,
            final_score: element(document, "final-score")?,
            start_screen: element(document, "start-screen")?,
            game_over_screen: element(document, "game-over-screen")?,
        })
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let classes = el.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle overlay: {:?}", e);
        }
    }
}

impl Overlay for DomOverlay {
    fn set_score_text(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn show_start_overlay(&mut self) {
        Self::set_hidden(&self.start_screen, false);
        Self::set_hidden(&self.game_over_screen, true);
    }

    fn show_game_over_overlay(&mut self, score: u32) {
        self.final_score
            .set_text_content(Some(&format!("Score: {score}")));
        Self::set_hidden(&self.game_over_screen, false);
    }

    fn hide_overlays(&mut self) {
        Self::set_hidden(&self.start_screen, true);
        Self::set_hidden(&self.game_over_screen, true);
    }
}

/// Tuning from the page, sized to the canvas unless the page overrides it
pub fn read_tuning(document: &Document, canvas_width: u32, canvas_height: u32) -> Tuning {
    let (width, height) = (canvas_width as f32, canvas_height as f32);
    match document
        .get_element_by_id(TUNING_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => Tuning::from_json_for_field(&json, width, height),
        None => Tuning::default().with_field_size(width, height),
    }
}
