use crate::constants::DEFAULT_SERVER_ADDRESS;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use url::Url;

pub type AccessToken = String;

/// Address and credentials of the media server the host page is connected to.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[derivative(Default(value = "DEFAULT_SERVER_ADDRESS.to_owned()"))]
    pub address: Url,
    pub access_token: AccessToken,
}
