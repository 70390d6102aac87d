use crate::constants::{UI_CONFIG_PATH, VIDEO_PLAYBACK_LOCATION};
use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionPlayer, ActionView, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx};
use crate::types::api::fetch_server_api;
use crate::types::intro::{IntroTimestamps, IntroTimestampsRequest};
use crate::types::server::ServerConfig;
use crate::types::ui::UserInterfaceConfig;
use chrono::{DateTime, Utc};
use derivative::Derivative;
use enclose::enclose;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

/// Affordance visibility, mirrored by the shell into the skip button's
/// show/hide class.
#[derive(Clone, Copy, Derivative, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[derivative(Default)]
    Hidden,
    Visible,
}

/// Per-item playback context, replaced wholesale whenever the page requests
/// playback info for an item.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSession {
    pub item_id: String,
    /// Sequence number the intro lookup for this session was issued with.
    pub request_seq: u64,
    pub matched_at: DateTime<Utc>,
    pub intro: Loadable<IntroTimestamps, EnvError>,
}

#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SkipIntro {
    /// Whether the one-time affordance install for the playback view ran
    /// already.
    pub installed: bool,
    pub ui_config: Option<Loadable<UserInterfaceConfig, EnvError>>,
    pub session: Option<PlaybackSession>,
    pub visibility: Visibility,
    /// Sequence number of the most recently issued intro lookup. Results
    /// carrying a lower number lost the race and are discarded.
    #[serde(skip_serializing)]
    pub request_seq: u64,
}

impl<E: Env + 'static> UpdateWithCtx<E> for SkipIntro {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::View(ActionView::ViewChanged { location })) => {
                if location != VIDEO_PLAYBACK_LOCATION {
                    return Effects::none().unchanged();
                }
                let install_effects = if !self.installed {
                    self.installed = true;
                    Effects::none()
                } else {
                    Effects::none().unchanged()
                };
                // The affordance is created at most once; a failed config
                // fetch leaves it absent, so the next view entry retries.
                let ui_config_effects = match &self.ui_config {
                    None | Some(Loadable::Err(_)) => {
                        let ui_config_effects =
                            eq_update(&mut self.ui_config, Some(Loadable::Loading));
                        Effects::one(fetch_ui_config::<E>(&ctx.server))
                            .unchanged()
                            .join(ui_config_effects)
                    }
                    _ => Effects::none().unchanged(),
                };
                install_effects
                    .join(ui_config_effects)
                    .join(Effects::msg(Msg::Event(Event::PlayerViewEntered)).unchanged())
            }
            Msg::Action(Action::Player(ActionPlayer::PlaybackInfoObserved { item_id })) => {
                self.request_seq += 1;
                let request = IntroTimestampsRequest {
                    item_id: item_id.to_owned(),
                    seq: self.request_seq,
                };
                let session_effects = eq_update(
                    &mut self.session,
                    Some(PlaybackSession {
                        item_id: item_id.to_owned(),
                        request_seq: request.seq,
                        matched_at: E::now(),
                        intro: Loadable::Loading,
                    }),
                );
                // A new item is about to play; the previous window no longer
                // applies.
                let visibility_effects = eq_update(&mut self.visibility, Visibility::Hidden);
                Effects::one(fetch_intro_timestamps::<E>(&ctx.server, &request))
                    .unchanged()
                    .join(session_effects)
                    .join(visibility_effects)
            }
            Msg::Action(Action::Player(ActionPlayer::TimeChanged { time })) => {
                visibility_update(&mut self.visibility, &self.ui_config, &self.session, *time)
            }
            Msg::Action(Action::Player(ActionPlayer::SkipIntro)) => match &self.session {
                Some(PlaybackSession {
                    item_id,
                    intro: Loadable::Ready(intro),
                    ..
                }) if intro.valid => {
                    tracing::debug!(
                        item_id = item_id.as_str(),
                        to = intro.intro_end,
                        "Skipping intro"
                    );
                    Effects::msg(Msg::Event(Event::IntroSkipped {
                        item_id: item_id.to_owned(),
                        to: intro.intro_end,
                    }))
                    .unchanged()
                }
                _ => Effects::none().unchanged(),
            },
            Msg::Action(Action::Unload) => {
                let session_effects = eq_update(&mut self.session, None);
                let visibility_effects = eq_update(&mut self.visibility, Visibility::Hidden);
                Effects::msg(Msg::Event(Event::PlayerViewLeft))
                    .unchanged()
                    .join(session_effects)
                    .join(visibility_effects)
            }
            Msg::Internal(Internal::IntroTimestampsResult(request, result)) => {
                match &mut self.session {
                    Some(session) if request.seq >= session.request_seq => match result {
                        Ok(intro) => {
                            let intro_effects =
                                eq_update(&mut session.intro, Loadable::Ready(intro.to_owned()));
                            Effects::msg(Msg::Event(Event::IntroTimestampsFetched {
                                item_id: request.item_id.to_owned(),
                            }))
                            .unchanged()
                            .join(intro_effects)
                        }
                        Err(error) => {
                            tracing::error!(
                                item_id = request.item_id.as_str(),
                                error = error.message().as_str(),
                                "Failed to fetch intro timestamps"
                            );
                            let intro_effects =
                                eq_update(&mut session.intro, Loadable::Err(error.to_owned()));
                            Effects::msg(Msg::Event(Event::Error {
                                error: error.to_owned(),
                                source: Box::new(Event::IntroTimestampsFetched {
                                    item_id: request.item_id.to_owned(),
                                }),
                            }))
                            .unchanged()
                            .join(intro_effects)
                        }
                    },
                    Some(session) => {
                        tracing::debug!(
                            item_id = request.item_id.as_str(),
                            seq = request.seq,
                            current_seq = session.request_seq,
                            "Discarding stale intro timestamps result"
                        );
                        Effects::none().unchanged()
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Internal(Internal::UiConfigResult(result))
                if self
                    .ui_config
                    .as_ref()
                    .map(|ui_config| ui_config.is_loading())
                    .unwrap_or_default() =>
            {
                match result {
                    Ok(ui_config) => eq_update(
                        &mut self.ui_config,
                        Some(Loadable::Ready(ui_config.to_owned())),
                    ),
                    Err(error) => {
                        tracing::error!(
                            error = error.message().as_str(),
                            "Failed to fetch the skip button configuration"
                        );
                        let ui_config_effects =
                            eq_update(&mut self.ui_config, Some(Loadable::Err(error.to_owned())));
                        Effects::msg(Msg::Event(Event::Error {
                            error: error.to_owned(),
                            source: Box::new(Event::UiConfigFetched),
                        }))
                        .unchanged()
                        .join(ui_config_effects)
                    }
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

/// Level-triggered visibility decision, evaluated fresh on every position
/// tick. Without a Ready, valid descriptor and a present affordance it is a
/// no-op; otherwise the visibility is forced from the window check alone, so
/// repeated calls with equal inputs change nothing.
fn visibility_update(
    visibility: &mut Visibility,
    ui_config: &Option<Loadable<UserInterfaceConfig, EnvError>>,
    session: &Option<PlaybackSession>,
    time: f64,
) -> Effects {
    let intro = match session {
        Some(PlaybackSession {
            intro: Loadable::Ready(intro),
            ..
        }) if intro.valid => intro,
        _ => return Effects::none().unchanged(),
    };
    let affordance_present = matches!(
        ui_config,
        Some(Loadable::Ready(ui_config)) if ui_config.skip_button_visible
    );
    if !affordance_present {
        return Effects::none().unchanged();
    }
    let next_visibility = if intro.prompt_window_contains(time) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    eq_update(visibility, next_visibility)
}

fn fetch_intro_timestamps<E: Env + 'static>(
    server: &ServerConfig,
    request: &IntroTimestampsRequest,
) -> Effect {
    EffectFuture::Concurrent(
        fetch_server_api::<E, IntroTimestamps>(server, &request.path())
            .map(enclose!((request.to_owned() => request) move |result| {
                Msg::Internal(Internal::IntroTimestampsResult(request, result))
            }))
            .boxed_env(),
    )
    .into()
}

fn fetch_ui_config<E: Env + 'static>(server: &ServerConfig) -> Effect {
    EffectFuture::Concurrent(
        fetch_server_api::<E, UserInterfaceConfig>(server, UI_CONFIG_PATH)
            .map(|result| Msg::Internal(Internal::UiConfigResult(result)))
            .boxed_env(),
    )
    .into()
}
