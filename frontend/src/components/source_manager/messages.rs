#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    UrlChanged(String),
    NameChanged(String),
    Validate,
    Add,
    Reload,
    Toggle(i64),
    Delete { id: i64, name: String },
    /// The controller changed the session.
    Redraw,
}
