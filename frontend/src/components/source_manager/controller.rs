//! Async workflows of the source manager.
//!
//! A `Controller` owns one `Session` together with the API client and the
//! notifier it needs. Each workflow applies the `begin_*` transition, awaits
//! the request, applies the `finish_*` transition and asks for a redraw. The
//! session is never borrowed across an await and never borrowed while the
//! redraw hook runs, since the hook may render synchronously.
//!
//! Mutations report whether the source list should be reloaded; callers pass
//! that on to [`Controller::refresh`].

use std::cell::{Ref, RefCell};

use log::{debug, info, warn};

use crate::api::SourcesApi;

use super::notices::{delete_question, Notifier};
use super::state::{delete_outcome, toggle_outcome, Refresh, Session};

pub struct Controller<A, N> {
    api: A,
    notifier: N,
    session: RefCell<Session>,
    on_change: Box<dyn Fn()>,
}

impl<A: SourcesApi, N: Notifier> Controller<A, N> {
    pub fn new(api: A, notifier: N, on_change: impl Fn() + 'static) -> Self {
        Self {
            api,
            notifier,
            session: RefCell::new(Session::new()),
            on_change: Box::new(on_change),
        }
    }

    pub fn session(&self) -> Ref<'_, Session> {
        self.session.borrow()
    }

    fn changed(&self) {
        (self.on_change)();
    }

    pub fn set_url(&self, url: String) {
        self.session.borrow_mut().url_input = url;
    }

    pub fn set_name(&self, name: String) {
        self.session.borrow_mut().name_input = name;
    }

    pub async fn validate(&self) {
        let begun = self.session.borrow_mut().begin_validation();
        let request = match begun {
            Ok(request) => request,
            Err(notice) => {
                self.notifier.notify(notice);
                return;
            }
        };
        self.changed();

        debug!("validating source {}", request.url);
        let outcome = self.api.validate(&request).await;
        match &outcome {
            Ok(result) => info!(
                "validated {} with score {}",
                request.url, result.validation_score
            ),
            Err(err) => warn!("validation of {} failed: {}", request.url, err),
        }
        self.session.borrow_mut().finish_validation(outcome);
        self.changed();
    }

    pub async fn add(&self) -> Refresh {
        let begun = self.session.borrow_mut().begin_add();
        let request = match begun {
            Ok(request) => request,
            Err(notice) => {
                self.notifier.notify(notice);
                return Refresh::None;
            }
        };
        self.changed();

        debug!("registering source {}", request.url);
        let outcome = self.api.add(&request).await;
        if let Err(err) = &outcome {
            warn!("registering {} failed: {}", request.url, err);
        }
        let (notice, refresh) = self.session.borrow_mut().finish_add(outcome);
        self.changed();
        self.notifier.notify(notice);
        refresh
    }

    pub async fn load_sources(&self) {
        self.session.borrow_mut().begin_load();
        self.changed();

        let outcome = self.api.list().await;
        match &outcome {
            Ok(sources) => debug!("loaded {} sources", sources.len()),
            Err(err) => warn!("loading sources failed: {}", err),
        }
        self.session.borrow_mut().finish_load(outcome);
        self.changed();
    }

    pub async fn toggle(&self, id: i64) -> Refresh {
        debug!("toggling source {}", id);
        let outcome = self.api.toggle(id).await;
        if let Ok(ack) = &outcome {
            info!("source {} is now active={:?}", id, ack.active);
        }
        let (notice, refresh) = toggle_outcome(outcome);
        if let Some(notice) = notice {
            warn!("toggling source {} failed: {}", id, notice);
            self.notifier.notify(notice);
        }
        refresh
    }

    /// Deletes after the user confirmed; `name` is what the question shows.
    pub async fn delete(&self, id: i64, name: &str) -> Refresh {
        if !self.notifier.confirm(&delete_question(name)) {
            debug!("deletion of source {} cancelled", id);
            return Refresh::None;
        }

        let outcome = self.api.delete(id).await;
        if let Err(err) = &outcome {
            warn!("deleting source {} failed: {}", id, err);
        }
        let (notice, refresh) = delete_outcome(outcome);
        self.notifier.notify(notice);
        refresh
    }

    pub async fn refresh(&self, refresh: Refresh) {
        if refresh == Refresh::List {
            self.load_sources().await;
        }
    }
}
