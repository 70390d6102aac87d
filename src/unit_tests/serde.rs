use crate::types::intro::IntroTimestamps;
use crate::types::ui::UserInterfaceConfig;

#[test]
fn intro_timestamps_wire_format() {
    let json = r#"{"Valid":true,"IntroStart":5.5,"IntroEnd":18.25,"ShowSkipPromptAt":5.0,"HideSkipPromptAt":20.0}"#;
    let timestamps = serde_json::from_str::<IntroTimestamps>(json).unwrap();
    assert_eq!(
        timestamps,
        IntroTimestamps {
            valid: true,
            intro_start: 5.5,
            intro_end: 18.25,
            show_skip_prompt_at: 5.0,
            hide_skip_prompt_at: 20.0,
        },
        "wire fields mapped"
    );
    assert_eq!(
        serde_json::to_value(&timestamps).unwrap(),
        serde_json::from_str::<serde_json::Value>(json).unwrap(),
        "round trip preserves the wire names"
    );
}

#[test]
fn user_interface_config_wire_format() {
    let json = r#"{"SkipButtonVisible":true,"SkipButtonText":"Skip Intro"}"#;
    let ui_config = serde_json::from_str::<UserInterfaceConfig>(json).unwrap();
    assert_eq!(
        ui_config,
        UserInterfaceConfig {
            skip_button_visible: true,
            skip_button_text: "Skip Intro".to_owned(),
        },
        "wire fields mapped"
    );
    assert_eq!(
        serde_json::to_value(&ui_config).unwrap(),
        serde_json::from_str::<serde_json::Value>(json).unwrap(),
        "round trip preserves the wire names"
    );
}
