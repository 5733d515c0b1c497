//! State machine of the source manager.
//!
//! `Session` holds everything the panel shows: the form inputs, the single
//! validation slot, the state of both action buttons and of the source list.
//! Each workflow is split into a `begin_*` transition (run before the request,
//! may refuse locally) and a `finish_*` transition (run with the outcome). No
//! transition touches the network or the DOM, which keeps the whole state
//! machine testable without a browser.

use common::model::source::Source;
use common::model::validation::ValidationResult;
use common::requests::SourceRequest;
use common::responses::MutationAck;

use crate::api::ApiError;

use super::notices::Notice;

/// Whether a finished action wants the source list reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    List,
}

/// Content of the validation panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationPanel {
    Hidden,
    Result(ValidationResult),
    Failed(String),
}

/// Content of the source list region.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing to show: before the first load and while a load is running.
    Cleared,
    Loaded(Vec<Source>),
    /// `Some` for transport failures, `None` when the server reported `success: false`.
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub url_input: String,
    pub name_input: String,
    /// Last successful validation. Only this slot unlocks registration.
    pub validation: Option<ValidationResult>,
    pub panel: ValidationPanel,
    pub validating: bool,
    pub add_enabled: bool,
    pub adding: bool,
    pub list: ListState,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            url_input: String::new(),
            name_input: String::new(),
            validation: None,
            panel: ValidationPanel::Hidden,
            validating: false,
            add_enabled: false,
            adding: false,
            list: ListState::Cleared,
            loading: false,
        }
    }

    pub fn begin_validation(&mut self) -> Result<SourceRequest, Notice> {
        let request =
            SourceRequest::from_form(&self.url_input, &self.name_input).ok_or(Notice::MissingUrl)?;
        self.validating = true;
        self.panel = ValidationPanel::Hidden;
        Ok(request)
    }

    pub fn finish_validation(&mut self, outcome: Result<ValidationResult, ApiError>) {
        self.validating = false;
        match outcome {
            Ok(result) => {
                self.panel = ValidationPanel::Result(result.clone());
                self.validation = Some(result);
                self.add_enabled = true;
            }
            Err(err) => {
                self.panel = ValidationPanel::Failed(err.to_string());
                self.validation = None;
                self.add_enabled = false;
            }
        }
    }

    /// Registration needs a stored validation with a nonzero score. The payload
    /// is read from the inputs, not from the stored validation.
    pub fn begin_add(&mut self) -> Result<SourceRequest, Notice> {
        if !self
            .validation
            .as_ref()
            .is_some_and(ValidationResult::allows_registration)
        {
            return Err(Notice::NotValidated);
        }
        let request =
            SourceRequest::from_form(&self.url_input, &self.name_input).ok_or(Notice::MissingUrl)?;
        self.adding = true;
        self.add_enabled = false;
        Ok(request)
    }

    pub fn finish_add(&mut self, outcome: Result<MutationAck, ApiError>) -> (Notice, Refresh) {
        self.adding = false;
        match outcome {
            Ok(_) => {
                self.url_input.clear();
                self.name_input.clear();
                self.validation = None;
                self.panel = ValidationPanel::Hidden;
                self.add_enabled = false;
                (Notice::SourceAdded, Refresh::List)
            }
            Err(err) => (Notice::AddFailed(err.to_string()), Refresh::None),
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.list = ListState::Cleared;
    }

    pub fn finish_load(&mut self, outcome: Result<Vec<Source>, ApiError>) {
        self.loading = false;
        self.list = match outcome {
            Ok(sources) => ListState::Loaded(sources),
            Err(ApiError::Transport(message)) => ListState::Failed(Some(message)),
            Err(ApiError::Server(_)) => ListState::Failed(None),
        };
    }

    pub fn sources(&self) -> &[Source] {
        match &self.list {
            ListState::Loaded(sources) => sources,
            _ => &[],
        }
    }
}

/// Outcome of a toggle. The list is never patched locally.
pub fn toggle_outcome(outcome: Result<MutationAck, ApiError>) -> (Option<Notice>, Refresh) {
    match outcome {
        Ok(_) => (None, Refresh::List),
        Err(ApiError::Server(_)) => (Some(Notice::ToggleFailed), Refresh::None),
        Err(ApiError::Transport(message)) => (Some(Notice::RequestFailed(message)), Refresh::None),
    }
}

pub fn delete_outcome(outcome: Result<MutationAck, ApiError>) -> (Notice, Refresh) {
    match outcome {
        Ok(_) => (Notice::SourceDeleted, Refresh::List),
        Err(ApiError::Server(_)) => (Notice::DeleteFailed, Refresh::None),
        Err(ApiError::Transport(message)) => (Notice::RequestFailed(message), Refresh::None),
    }
}
