use serde::Deserialize;

use crate::types::server::ServerConfig;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    UpdateServer(ServerConfig),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionView {
    /// The host page navigated; carries the new location indicator.
    ViewChanged { location: String },
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionPlayer {
    /// The page requested playback info for an item, i.e. a new item is
    /// about to play. Dispatched by the fetch interceptor.
    #[serde(rename_all = "camelCase")]
    PlaybackInfoObserved { item_id: String },
    /// High-frequency playback position update, in seconds.
    TimeChanged { time: f64 },
    /// The user activated the skip affordance.
    SkipIntro,
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `introskip-core` crate and handled by the `introskip-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    View(ActionView),
    Player(ActionPlayer),
    Unload,
}
