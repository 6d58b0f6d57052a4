use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn type_mismatch(name: impl Into<String>, expected: impl Into<String>) -> Error {
        Error(
            ErrorKind::TypeMismatch {
                name: name.into(),
                expected: expected.into(),
            }
            .into(),
        )
    }

    /// A member of a sequence group that must be non-empty has length 0.
    ///
    /// `index` is the position of the offending member within its group.
    pub fn empty_sequence(index: usize) -> Error {
        Error(ErrorKind::EmptySequence { index }.into())
    }

    pub fn empty_mask() -> Error {
        Error(ErrorKind::EmptyMask.into())
    }

    /// A lookup failed to locate `element`.
    ///
    /// The element is captured through its `Debug` rendering so the error
    /// stays independent of the element type.
    pub fn element_not_found(element: &impl std::fmt::Debug) -> Error {
        Error(
            ErrorKind::ElementNotFound {
                element: format!("{element:?}"),
            }
            .into(),
        )
    }

    pub fn overflow(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::ArithmeticOverflow {
                operation: operation.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("type mismatch for '{name}': expected {expected}")]
    TypeMismatch { name: String, expected: String },

    #[error("sequence #{index} must have len > 0")]
    EmptySequence { index: usize },

    #[error("mask must have len > 0")]
    EmptyMask,

    #[error("{element} is not in list")]
    ElementNotFound { element: String },

    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: String },
}

impl ErrorKind {
    /// Returns `true` for the failures raised when a required sequence or
    /// mask has no elements.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ErrorKind::EmptySequence { .. } | ErrorKind::EmptyMask)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
