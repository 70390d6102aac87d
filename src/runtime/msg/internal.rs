use crate::runtime::EnvError;
use crate::types::intro::{IntroTimestamps, IntroTimestampsRequest};
use crate::types::ui::UserInterfaceConfig;

//
// Those messages are meant to be dispatched and handled only inside the
// introskip-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result for fetching the intro timestamps of an item.
    IntroTimestampsResult(IntroTimestampsRequest, Result<IntroTimestamps, EnvError>),
    /// Result for fetching the skip button configuration.
    UiConfigResult(Result<UserInterfaceConfig, EnvError>),
}
