use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use common::model::source::{Source, SourceKind};
use common::model::validation::{DiscoveredFeed, SampleNews, ValidationResult};
use common::requests::SourceRequest;
use common::responses::MutationAck;

use crate::api::{ApiError, SourcesApi};

use super::notices::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Validate(String),
    Add(String, String),
    List,
    Toggle(i64),
    Delete(i64),
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    validation: Option<Result<ValidationResult, ApiError>>,
    add: Option<Result<MutationAck, ApiError>>,
    list: Option<Result<Vec<Source>, ApiError>>,
    toggle: Option<Result<MutationAck, ApiError>>,
    delete: Option<Result<MutationAck, ApiError>>,
}

/// Scripted API: records every call and answers with the configured outcome.
/// Unscripted calls fail as transport errors.
#[derive(Clone, Default)]
pub struct FakeApi {
    script: Rc<RefCell<Script>>,
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("unscripted call".into()))
}

impl FakeApi {
    pub fn with_validation(self, outcome: Result<ValidationResult, ApiError>) -> Self {
        self.script.borrow_mut().validation = Some(outcome);
        self
    }

    pub fn with_add(self, outcome: Result<MutationAck, ApiError>) -> Self {
        self.script.borrow_mut().add = Some(outcome);
        self
    }

    pub fn with_list(self, outcome: Result<Vec<Source>, ApiError>) -> Self {
        self.script.borrow_mut().list = Some(outcome);
        self
    }

    pub fn with_toggle(self, outcome: Result<MutationAck, ApiError>) -> Self {
        self.set_toggle(outcome);
        self
    }

    pub fn set_toggle(&self, outcome: Result<MutationAck, ApiError>) {
        self.script.borrow_mut().toggle = Some(outcome);
    }

    pub fn with_delete(self, outcome: Result<MutationAck, ApiError>) -> Self {
        self.script.borrow_mut().delete = Some(outcome);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }
}

#[async_trait(?Send)]
impl SourcesApi for FakeApi {
    async fn validate(&self, request: &SourceRequest) -> Result<ValidationResult, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::Validate(request.url.clone()));
        script.validation.clone().unwrap_or_else(unscripted)
    }

    async fn add(&self, request: &SourceRequest) -> Result<MutationAck, ApiError> {
        let mut script = self.script.borrow_mut();
        script
            .calls
            .push(Call::Add(request.url.clone(), request.name.clone()));
        script.add.clone().unwrap_or_else(unscripted)
    }

    async fn list(&self) -> Result<Vec<Source>, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::List);
        script.list.clone().unwrap_or_else(unscripted)
    }

    async fn toggle(&self, id: i64) -> Result<MutationAck, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::Toggle(id));
        script.toggle.clone().unwrap_or_else(unscripted)
    }

    async fn delete(&self, id: i64) -> Result<MutationAck, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::Delete(id));
        script.delete.clone().unwrap_or_else(unscripted)
    }
}

/// Records notices and answers every confirmation the same way.
#[derive(Clone)]
pub struct FakeNotifier {
    answer: bool,
    notices: Rc<RefCell<Vec<Notice>>>,
    questions: Rc<RefCell<Vec<String>>>,
}

impl FakeNotifier {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            notices: Rc::default(),
            questions: Rc::default(),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn confirm(&self, question: &str) -> bool {
        self.questions.borrow_mut().push(question.to_string());
        self.answer
    }
}

pub fn validation_with_score(score: u8, with_feed: bool) -> ValidationResult {
    ValidationResult {
        validation_score: score,
        rss_found: if with_feed {
            vec![DiscoveredFeed::Url("https://blog.example.com/feed".into())]
        } else {
            vec![]
        },
        recommended_url: if score > 0 {
            "https://blog.example.com/feed".into()
        } else {
            String::new()
        },
        recommended_name: None,
        can_scrape_html: !with_feed && score > 0,
        sample_news: vec![SampleNews {
            title: "Primeira".into(),
            summary: "Resumo".into(),
            pub_date: Some("2025-02-01T08:00:00+00:00".into()),
            url: None,
            source: None,
        }],
        url: None,
        method: None,
        status: None,
        source_type: None,
    }
}

pub fn sample_source(id: i64, active: bool) -> Source {
    Source {
        id,
        name: Some(format!("Fonte {}", id)),
        url: format!("https://site{}.example/feed", id),
        kind: SourceKind::Rss,
        active,
        validation_score: Some(9),
        created_at: "2025-03-01T10:00:00.123456".into(),
        validated_at: None,
    }
}
