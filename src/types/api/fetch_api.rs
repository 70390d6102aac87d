use crate::runtime::{ConditionalSend, Env, TryEnvFuture};
use crate::types::server::ServerConfig;
use http::Request;
use serde::Deserialize;

/// Issue an authenticated GET against the media server and parse the JSON
/// response body.
pub fn fetch_server_api<
    E: Env,
    RESP: for<'de> Deserialize<'de> + ConditionalSend + 'static,
>(
    server: &ServerConfig,
    path: &str,
) -> TryEnvFuture<RESP> {
    let url = server.address.join(path).expect("url builder failed");
    let request = Request::get(url.as_str())
        .header(
            http::header::AUTHORIZATION,
            format!("MediaBrowser Token={}", server.access_token),
        )
        .body(())
        .expect("request builder failed");
    E::fetch::<_, _>(request)
}
