//! Update function of the source manager component.
//!
//! Input messages mutate the session synchronously. Workflow messages spawn the
//! matching controller future on the browser event loop and return `false`: the
//! controller requests redraws itself through `Msg::Redraw` as the workflow
//! progresses. Mutations pass their `Refresh` on to `Controller::refresh`.

use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::SourceManagerComponent;

pub fn update(
    component: &mut SourceManagerComponent,
    _ctx: &Context<SourceManagerComponent>,
    msg: Msg,
) -> bool {
    let controller = Rc::clone(&component.controller);
    match msg {
        Msg::UrlChanged(url) => {
            controller.set_url(url);
            true
        }
        Msg::NameChanged(name) => {
            controller.set_name(name);
            true
        }
        Msg::Validate => {
            spawn_local(async move { controller.validate().await });
            false
        }
        Msg::Add => {
            spawn_local(async move {
                let refresh = controller.add().await;
                controller.refresh(refresh).await;
            });
            false
        }
        Msg::Reload => {
            spawn_local(async move { controller.load_sources().await });
            false
        }
        Msg::Toggle(id) => {
            spawn_local(async move {
                let refresh = controller.toggle(id).await;
                controller.refresh(refresh).await;
            });
            false
        }
        Msg::Delete { id, name } => {
            spawn_local(async move {
                let refresh = controller.delete(id, &name).await;
                controller.refresh(refresh).await;
            });
            false
        }
        Msg::Redraw => true,
    }
}
