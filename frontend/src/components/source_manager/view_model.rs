//! Pure view models of the source manager.
//!
//! These functions turn the session into plain data (labels, CSS classes,
//! formatted dates) so that `view.rs` only has to lay them out. Nothing here
//! depends on a live document.

use common::dates::format_short_date;
use common::model::score::{score_label, ScoreGrade};
use common::model::source::Source;
use common::model::validation::{SampleNews, ValidationResult};

use super::state::{ListState, Session, ValidationPanel};

pub const VALIDATE_LABEL: &str = "🔍 Validar Fonte";
pub const VALIDATING_LABEL: &str = "⏳ Validando...";
pub const ADD_LABEL: &str = "✅ Adicionar ao Banco";
pub const ADDING_LABEL: &str = "⏳ Adicionando...";
pub const NO_DATE: &str = "Data não disponível";
pub const UNNAMED_SOURCE: &str = "Sem nome";
pub const AUTO_DETECTED_NAME: &str = "Detectado automaticamente";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub url: String,
    pub name: String,
    pub validate: ButtonView,
    pub add: ButtonView,
}

pub fn form_view(session: &Session) -> FormView {
    FormView {
        url: session.url_input.clone(),
        name: session.name_input.clone(),
        validate: ButtonView {
            label: if session.validating { VALIDATING_LABEL } else { VALIDATE_LABEL },
            disabled: session.validating,
        },
        add: ButtonView {
            label: if session.adding { ADDING_LABEL } else { ADD_LABEL },
            disabled: session.adding || !session.add_enabled,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTone {
    Success,
    Warning,
    Error,
}

impl PanelTone {
    fn from_grade(grade: ScoreGrade) -> Self {
        match grade {
            ScoreGrade::High => PanelTone::Success,
            ScoreGrade::Medium => PanelTone::Warning,
            ScoreGrade::Low => PanelTone::Error,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            PanelTone::Success => "validation-result validation-success",
            PanelTone::Warning => "validation-result validation-warning",
            PanelTone::Error => "validation-result validation-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPanelView {
    pub tone: PanelTone,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Report {
        score_label: String,
        score_class: &'static str,
        verdict: Verdict,
        samples: Vec<SampleView>,
    },
    Failure {
        message: String,
    },
}

/// What the validation found, in decreasing order of usefulness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    FeedFound { url: String, name: String },
    HtmlFallback,
    Unusable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleView {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    pub date: String,
}

/// `None` while the panel is hidden.
pub fn validation_panel_view(panel: &ValidationPanel) -> Option<ValidationPanelView> {
    match panel {
        ValidationPanel::Hidden => None,
        ValidationPanel::Failed(message) => Some(ValidationPanelView {
            tone: PanelTone::Error,
            body: PanelBody::Failure {
                message: message.clone(),
            },
        }),
        ValidationPanel::Result(result) => Some(report_view(result)),
    }
}

fn report_view(result: &ValidationResult) -> ValidationPanelView {
    let grade = result.grade();
    let verdict = if result.has_feed() {
        Verdict::FeedFound {
            url: result.recommended_url.clone(),
            name: result
                .recommended_name()
                .unwrap_or(AUTO_DETECTED_NAME)
                .to_string(),
        }
    } else if result.can_scrape_html {
        Verdict::HtmlFallback
    } else {
        Verdict::Unusable
    };

    ValidationPanelView {
        tone: PanelTone::from_grade(grade),
        body: PanelBody::Report {
            score_label: score_label(result.validation_score),
            score_class: grade.badge_class(),
            verdict,
            samples: result.sample_news.iter().map(sample_view).collect(),
        },
    }
}

fn sample_view(news: &SampleNews) -> SampleView {
    SampleView {
        title: news.title.clone(),
        summary: news.summary.clone(),
        link: news.link().map(str::to_string),
        date: news
            .pub_date()
            .and_then(format_short_date)
            .unwrap_or_else(|| NO_DATE.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceListView {
    pub loading: bool,
    pub content: ListContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Nothing,
    Empty,
    Error { message: Option<String> },
    Cards(Vec<SourceCardView>),
}

pub fn source_list_view(session: &Session) -> SourceListView {
    let content = match &session.list {
        ListState::Cleared => ListContent::Nothing,
        ListState::Failed(message) => ListContent::Error {
            message: message.clone(),
        },
        ListState::Loaded(sources) if sources.is_empty() => ListContent::Empty,
        ListState::Loaded(sources) => ListContent::Cards(sources.iter().map(source_card_view).collect()),
    };
    SourceListView {
        loading: session.loading,
        content,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub class: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCardView {
    pub id: i64,
    pub class: &'static str,
    pub name: String,
    pub url: String,
    pub badges: Vec<BadgeView>,
    pub created: String,
    pub validated: Option<String>,
    pub toggle: ToggleView,
    /// Name used in the delete confirmation.
    pub delete_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub class: &'static str,
    pub label: &'static str,
}

pub fn source_card_view(source: &Source) -> SourceCardView {
    let mut badges = vec![
        BadgeView {
            class: format!("badge badge-{}", source.kind.label()),
            label: source.kind.label().to_uppercase(),
        },
        if source.active {
            BadgeView {
                class: "badge badge-active".to_string(),
                label: "✅ Ativa".to_string(),
            }
        } else {
            BadgeView {
                class: "badge badge-inactive".to_string(),
                label: "❌ Inativa".to_string(),
            }
        },
    ];
    // A zero score is never shown, same as a missing one.
    if let Some(score) = source.validation_score.filter(|s| *s > 0) {
        badges.push(BadgeView {
            class: format!("badge {}", ScoreGrade::from_score(score).badge_class()),
            label: format!("Score: {}", score_label(score)),
        });
    }

    let name = source.display_name().unwrap_or(UNNAMED_SOURCE).to_string();
    SourceCardView {
        id: source.id,
        class: if source.active { "source-card" } else { "source-card inactive" },
        delete_name: name.clone(),
        name,
        url: source.url.clone(),
        badges,
        created: format_short_date(&source.created_at)
            .unwrap_or_else(|| source.created_at.clone()),
        validated: source
            .validated_at
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(|v| format_short_date(v).unwrap_or_else(|| v.to_string())),
        toggle: if source.active {
            ToggleView {
                class: "btn btn-small btn-secondary",
                label: "⏸️ Desativar",
            }
        } else {
            ToggleView {
                class: "btn btn-small btn-success",
                label: "▶️ Ativar",
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::source_manager::test_support::{sample_source, validation_with_score};
    use common::model::source::SourceKind;

    #[test]
    fn feed_found_panel() {
        let mut result = validation_with_score(9, true);
        result.recommended_name = Some("Blog".into());
        let view = validation_panel_view(&ValidationPanel::Result(result)).unwrap();
        assert_eq!(view.tone, PanelTone::Success);
        assert_eq!(view.tone.class(), "validation-result validation-success");
        let PanelBody::Report { score_label, score_class, verdict, samples } = view.body else {
            panic!("expected a report");
        };
        assert_eq!(score_label, "9/10");
        assert_eq!(score_class, "score-high");
        assert_eq!(
            verdict,
            Verdict::FeedFound {
                url: "https://blog.example.com/feed".into(),
                name: "Blog".into()
            }
        );
        assert_eq!(samples[0].date, "01/02/2025");
    }

    #[test]
    fn html_fallback_panel_is_a_warning() {
        let result = validation_with_score(6, false);
        let view = validation_panel_view(&ValidationPanel::Result(result)).unwrap();
        assert_eq!(view.tone, PanelTone::Warning);
        let PanelBody::Report { verdict, .. } = view.body else {
            panic!("expected a report");
        };
        assert_eq!(verdict, Verdict::HtmlFallback);
    }

    #[test]
    fn unusable_panel_and_missing_dates() {
        let mut result = validation_with_score(0, false);
        result.sample_news[0].pub_date = Some(String::new());
        let view = validation_panel_view(&ValidationPanel::Result(result)).unwrap();
        assert_eq!(view.tone, PanelTone::Error);
        let PanelBody::Report { verdict, samples, .. } = view.body else {
            panic!("expected a report");
        };
        assert_eq!(verdict, Verdict::Unusable);
        assert_eq!(samples[0].date, NO_DATE);
    }

    #[test]
    fn hidden_and_failed_panels() {
        assert_eq!(validation_panel_view(&ValidationPanel::Hidden), None);
        let view = validation_panel_view(&ValidationPanel::Failed("boom".into())).unwrap();
        assert_eq!(view.tone, PanelTone::Error);
        assert_eq!(view.body, PanelBody::Failure { message: "boom".into() });
    }

    #[test]
    fn form_buttons_follow_session() {
        let mut session = Session::new();
        let form = form_view(&session);
        assert_eq!(form.validate.label, VALIDATE_LABEL);
        assert!(form.add.disabled);

        session.validating = true;
        session.add_enabled = true;
        let form = form_view(&session);
        assert_eq!(form.validate.label, VALIDATING_LABEL);
        assert!(form.validate.disabled);
        assert!(!form.add.disabled);

        session.adding = true;
        let form = form_view(&session);
        assert_eq!(form.add.label, ADDING_LABEL);
        assert!(form.add.disabled);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let mut session = Session::new();
        session.list = ListState::Loaded(vec![]);
        assert_eq!(source_list_view(&session).content, ListContent::Empty);

        session.list = ListState::Failed(None);
        assert_eq!(
            source_list_view(&session).content,
            ListContent::Error { message: None }
        );
    }

    #[test]
    fn one_card_per_source_with_inactive_marker() {
        let mut session = Session::new();
        session.list = ListState::Loaded(vec![sample_source(1, true), sample_source(2, false)]);
        let ListContent::Cards(cards) = source_list_view(&session).content else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].class, "source-card");
        assert_eq!(cards[1].class, "source-card inactive");
        assert_eq!(cards[1].toggle.label, "▶️ Ativar");
        assert_eq!(cards[0].created, "01/03/2025");
    }

    #[test]
    fn card_badges() {
        let mut source = sample_source(5, true);
        source.kind = SourceKind::Html;
        source.validation_score = Some(6);
        source.name = None;
        source.validated_at = Some("2025-03-02T09:00:00".into());
        let card = source_card_view(&source);
        assert_eq!(card.name, UNNAMED_SOURCE);
        assert_eq!(card.badges[0].label, "HTML");
        assert_eq!(card.badges[0].class, "badge badge-html");
        assert_eq!(card.badges[1].class, "badge badge-active");
        assert_eq!(card.badges[2].class, "badge score-medium");
        assert_eq!(card.badges[2].label, "Score: 6/10");
        assert_eq!(card.validated.as_deref(), Some("02/03/2025"));

        source.validation_score = None;
        assert_eq!(source_card_view(&source).badges.len(), 2);
    }
}
