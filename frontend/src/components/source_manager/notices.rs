//! User-facing notices raised by the source manager workflows.
//!
//! Workflows never talk to the browser directly: they hand a `Notice` to a
//! `Notifier` and ask it for confirmations. `BrowserNotifier` turns errors into
//! blocking alerts and successes into toasts.

use std::fmt;

use super::helpers::{alert, confirm, show_toast};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Validate or add pressed with an empty url.
    MissingUrl,
    /// Add pressed without a usable validation.
    NotValidated,
    SourceAdded,
    AddFailed(String),
    ToggleFailed,
    SourceDeleted,
    DeleteFailed,
    /// A request for toggle or delete never got a usable answer.
    RequestFailed(String),
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::SourceAdded | Notice::SourceDeleted => Severity::Success,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingUrl => write!(f, "Por favor, insira uma URL"),
            Notice::NotValidated => write!(f, "Por favor, valide a fonte primeiro"),
            Notice::SourceAdded => write!(f, "✅ Fonte adicionada com sucesso!"),
            Notice::AddFailed(reason) | Notice::RequestFailed(reason) => {
                write!(f, "❌ Erro: {}", reason)
            }
            Notice::ToggleFailed => write!(f, "❌ Erro ao alterar status da fonte"),
            Notice::SourceDeleted => write!(f, "✅ Fonte deletada com sucesso!"),
            Notice::DeleteFailed => write!(f, "❌ Erro ao deletar fonte"),
        }
    }
}

/// Question asked before deleting a source.
pub fn delete_question(name: &str) -> String {
    format!("Tem certeza que deseja deletar \"{}\"?", name)
}

pub trait Notifier {
    fn notify(&self, notice: Notice);

    /// Asks the user a yes/no question. `false` means "do not proceed".
    fn confirm(&self, question: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity() {
            Severity::Success => show_toast(&notice.to_string()),
            Severity::Error => alert(&notice.to_string()),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        confirm(question)
    }
}
