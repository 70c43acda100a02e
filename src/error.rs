use thiserror::Error;

pub type BindResult<T> = Result<T, BindError>;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("missing required element: #{0}")]
    MissingElement(String),

    #[error("filter control '{control}' references unknown column '{field}'")]
    UnknownColumn { control: String, field: String },

    #[error("rich text editor failed to attach to '{textarea}': {reason}")]
    EditorAttach { textarea: String, reason: String },

    #[error("invalid binding: {0}")]
    InvalidBinding(String),
}
