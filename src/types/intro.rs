use crate::constants::{INTRO_TIMESTAMPS_VERSION, URI_COMPONENT_ENCODE_SET};
use percent_encoding::utf8_percent_encode;
use serde::{Deserialize, Serialize};

/// Time bounds of an item's introduction and of the window during which the
/// skip affordance is offered. Field names follow the server's wire format.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct IntroTimestamps {
    /// Whether a detected intro exists for the item at all.
    pub valid: bool,
    /// Seconds; start of the introduction.
    pub intro_start: f64,
    /// Seconds; seek target when the intro is skipped.
    pub intro_end: f64,
    /// Seconds; inclusive lower bound of the visibility window.
    pub show_skip_prompt_at: f64,
    /// Seconds; exclusive upper bound of the visibility window.
    pub hide_skip_prompt_at: f64,
}

impl IntroTimestamps {
    /// `true` when `time` falls inside the half-open visibility window
    /// `[show_skip_prompt_at, hide_skip_prompt_at)`.
    pub fn prompt_window_contains(&self, time: f64) -> bool {
        self.show_skip_prompt_at <= time && time < self.hide_skip_prompt_at
    }
}

/// An issued intro timestamps lookup: the item it targets and the sequence
/// number it was issued with.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IntroTimestampsRequest {
    pub item_id: String,
    pub seq: u64,
}

impl IntroTimestampsRequest {
    pub fn path(&self) -> String {
        format!(
            "Episode/{}/IntroTimestamps/{}",
            utf8_percent_encode(&self.item_id, URI_COMPONENT_ENCODE_SET),
            INTRO_TIMESTAMPS_VERSION
        )
    }
}
