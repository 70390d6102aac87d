use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Location hash of the host page's video playback view.
pub const VIDEO_PLAYBACK_LOCATION: &str = "#!/video";
/// Marker identifying playback info requests among the page's outbound calls.
pub const PLAYBACK_INFO_PATH_MARKER: &str = "/PlaybackInfo";
/// Path segment immediately preceding the item identifier in playback info
/// request paths.
pub const PLAYBACK_INFO_ITEM_MARKER_SEGMENT: &str = "Items";
pub const INTRO_TIMESTAMPS_VERSION: &str = "v1";
pub const UI_CONFIG_PATH: &str = "Intros/UserInterfaceConfiguration";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref DEFAULT_SERVER_ADDRESS: Url =
        Url::parse("http://127.0.0.1:8096").expect("DEFAULT_SERVER_ADDRESS parse failed");
}
