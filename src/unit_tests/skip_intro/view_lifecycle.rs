use crate::models::common::Loadable;
use crate::models::ctx::Ctx;
use crate::models::skip_intro::{PlaybackSession, SkipIntro, Visibility};
use crate::runtime::msg::{Action, ActionView, Event};
use crate::runtime::{EnvFutureExt, Runtime, TryEnvFuture};
use crate::types::intro::IntroTimestamps;
use crate::types::ui::UserInterfaceConfig;
use crate::unit_tests::{core_events, default_fetch_handler, Request, TestEnv, FETCH_HANDLER, NOW};
use futures::future;
use introskip_derive::Model;
use std::any::Any;

#[derive(Model, Clone, Default)]
#[model(TestEnv)]
struct TestModel {
    ctx: Ctx,
    skip_intro: SkipIntro,
}

fn ui_config_fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    match request {
        Request { url, .. } if url == "http://127.0.0.1:8096/Intros/UserInterfaceConfiguration" => {
            future::ok(Box::new(UserInterfaceConfig {
                skip_button_visible: true,
                skip_button_text: "Skip Intro".to_owned(),
            }) as Box<dyn Any + Send>)
            .boxed_env()
        }
        _ => default_fetch_handler(request),
    }
}

#[test]
fn every_view_entry_rebinds_the_position_listener() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(ui_config_fetch_handler);
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::View(ActionView::ViewChanged {
            location: "#!/video".to_owned(),
        }));
        runtime.dispatch(Action::View(ActionView::ViewChanged {
            location: "#!/video".to_owned(),
        }));
    });
    let entries = core_events(&mut rx)
        .into_iter()
        .filter(|event| matches!(event, Event::PlayerViewEntered))
        .count();
    assert_eq!(entries, 2, "the listener is rebound on every entry");
}

#[test]
fn unload_tears_the_session_down() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let model = TestModel {
        ctx: Ctx::default(),
        skip_intro: SkipIntro {
            installed: true,
            ui_config: Some(Loadable::Ready(UserInterfaceConfig {
                skip_button_visible: true,
                skip_button_text: "Skip Intro".to_owned(),
            })),
            session: Some(PlaybackSession {
                item_id: "7".to_owned(),
                request_seq: 1,
                matched_at: *NOW.read().unwrap(),
                intro: Loadable::Ready(IntroTimestamps {
                    valid: true,
                    intro_start: 5.0,
                    intro_end: 18.0,
                    show_skip_prompt_at: 5.0,
                    hide_skip_prompt_at: 20.0,
                }),
            }),
            visibility: Visibility::Visible,
            request_seq: 1,
        },
    };
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(model, vec![], 1000);
    TestEnv::run(|| runtime.dispatch(Action::Unload));
    assert_eq!(
        runtime.model().unwrap().skip_intro.session,
        None,
        "session cleared"
    );
    assert_eq!(
        runtime.model().unwrap().skip_intro.visibility,
        Visibility::Hidden,
        "affordance hidden"
    );
    assert!(
        runtime.model().unwrap().skip_intro.installed,
        "the affordance itself survives the view"
    );
    assert_eq!(
        core_events(&mut rx),
        vec![Event::PlayerViewLeft],
        "the shell is told to unsubscribe"
    );
}
