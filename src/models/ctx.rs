use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionCtx, Event, Msg};
use crate::runtime::{Effects, Env, Update};
use crate::types::server::ServerConfig;
use serde::Serialize;

/// Host connection context shared by every model.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct Ctx {
    pub server: ServerConfig,
}

impl Ctx {
    pub fn new(server: ServerConfig) -> Self {
        Self { server }
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::UpdateServer(server))) => {
                let server_effects = eq_update(&mut self.server, server.to_owned());
                if server_effects.has_changed {
                    Effects::msg(Msg::Event(Event::ServerUpdated))
                        .unchanged()
                        .join(server_effects)
                } else {
                    server_effects
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}
