use crate::constants::{PLAYBACK_INFO_ITEM_MARKER_SEGMENT, PLAYBACK_INFO_PATH_MARKER};
use crate::runtime::msg::{Action, ActionPlayer};
use crate::runtime::{ActionSink, Env, TryEnvFuture};
use http::Request;
use serde_json::Value;
use std::marker::PhantomData;

/// The page's single outbound network function. Requests and responses are
/// opaque JSON documents; the core never interprets them.
pub trait PageTransport {
    fn fetch(&self, request: Request<Value>) -> TryEnvFuture<Value>;
}

/// Production transport delegating straight to the environment.
pub struct PageHTTPTransport<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env> PageHTTPTransport<E> {
    pub fn new() -> Self {
        PageHTTPTransport { env: PhantomData }
    }
}

impl<E: Env> Default for PageHTTPTransport<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Env> PageTransport for PageHTTPTransport<E> {
    fn fetch(&self, request: Request<Value>) -> TryEnvFuture<Value> {
        E::fetch(request)
    }
}

/// Decorator around the page transport. Every call is forwarded to the inner
/// transport and its result is returned unmodified; requests whose path
/// references playback info additionally dispatch
/// [`ActionPlayer::PlaybackInfoObserved`] into the sink. The decision is made
/// from the request alone, before the response resolves.
pub struct FetchInterceptor<T: PageTransport, S: ActionSink> {
    transport: T,
    sink: S,
}

impl<T: PageTransport, S: ActionSink> FetchInterceptor<T, S> {
    pub fn new(transport: T, sink: S) -> Self {
        FetchInterceptor { transport, sink }
    }
    pub fn fetch(&self, request: Request<Value>) -> TryEnvFuture<Value> {
        let path = request.uri().path().to_owned();
        let response = self.transport.fetch(request);
        if let Some(item_id) = playback_info_item_id(&path) {
            tracing::debug!(
                path = path.as_str(),
                item_id,
                "Playback info request observed"
            );
            self.sink
                .dispatch_action(Action::Player(ActionPlayer::PlaybackInfoObserved {
                    item_id: item_id.to_owned(),
                }));
        }
        response
    }
}

/// Extract the item identifier from a playback info request path: the
/// segment immediately following the `Items` segment, on paths containing
/// the playback info marker.
pub fn playback_info_item_id(path: &str) -> Option<&str> {
    if !path.contains(PLAYBACK_INFO_PATH_MARKER) {
        return None;
    }
    path.split('/')
        .skip_while(|segment| *segment != PLAYBACK_INFO_ITEM_MARKER_SEGMENT)
        .nth(1)
        .filter(|item_id| !item_id.is_empty())
}
