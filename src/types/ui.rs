use serde::{Deserialize, Serialize};

/// Server-side configuration of the skip affordance. Field names follow the
/// server's wire format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct UserInterfaceConfig {
    pub skip_button_visible: bool,
    pub skip_button_text: String,
}
