use serde::Serialize;

use crate::runtime::EnvError;

///
/// Those messages are meant to be dispatched by the `introskip-core` crate
/// and handled by the users of the `introskip-core` crate.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    /// The video playback view became active. The shell must (re)bind its
    /// position listener against a freshly queried media element, since the
    /// element may have been replaced between views.
    PlayerViewEntered,
    /// The playback view was torn down; the shell must unsubscribe its
    /// position listener.
    PlayerViewLeft,
    #[serde(rename_all = "camelCase")]
    IntroTimestampsFetched {
        item_id: String,
    },
    UiConfigFetched,
    /// The user skipped the intro; the shell must seek the player to `to`
    /// seconds.
    #[serde(rename_all = "camelCase")]
    IntroSkipped {
        item_id: String,
        to: f64,
    },
    ServerUpdated,
    Error {
        error: EnvError,
        source: Box<Event>,
    },
}
