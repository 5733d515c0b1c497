//! Source manager: root module wiring the Yew `Component` implementation with
//! submodules for session state, async workflows, view models and rendering.
//!
//! Responsibilities
//! - Own one `Controller` per mounted component, so independent panels never
//!   share a validation slot.
//! - Delegate message handling to `update::update` and rendering to `view::view`.
//! - Load the source list on first render.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::HttpSourcesApi;

pub mod controller;
mod helpers;
mod messages;
pub mod notices;
mod props;
pub mod state;
mod update;
mod view;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test_support;

use controller::Controller;
pub use messages::Msg;
use notices::BrowserNotifier;
pub use props::SourceManagerProps;

pub type WebController = Controller<HttpSourcesApi, BrowserNotifier>;

pub struct SourceManagerComponent {
    pub controller: Rc<WebController>,
}

impl Component for SourceManagerComponent {
    type Message = Msg;
    type Properties = SourceManagerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let redraw = ctx.link().callback(|()| Msg::Redraw);
        let api = HttpSourcesApi::new(ctx.props().api_base.as_str());
        Self {
            controller: Rc::new(Controller::new(api, BrowserNotifier, move || {
                redraw.emit(())
            })),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && ctx.props().load_on_mount {
            ctx.link().send_message(Msg::Reload);
        }
    }
}
