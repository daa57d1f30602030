//! Error types for collection operations.
//!
//! Every contract violation in this crate is reported through
//! [`CollectionError`]. Operations never panic on bad input; they return an
//! `Err` synchronously at the call that violated the contract.
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::error::{CollectionError, ErrorKind};
//!
//! let error = CollectionError::not_supported("TreeSortedMap", "index_of");
//! assert_eq!(error.kind(), ErrorKind::NotSupported);
//! assert_eq!(
//!     format!("{error}"),
//!     "TreeSortedMap::index_of is not supported"
//! );
//! ```

/// Result alias used by fallible collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// The category of a [`CollectionError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A reduction needed at least one element.
    EmptySource,
    /// Natural ordering met an absent element.
    NullElement,
    /// Two elements produced the same key under a unique-key contract.
    DuplicateKey,
    /// Two elements produced the same value under a unique-value contract.
    DuplicateValue,
    /// The operation has no meaning for this container shape.
    NotSupported,
    /// A parameter was out of its valid domain.
    InvalidArgument,
    /// The container was not in the state the operation requires.
    IllegalState,
}

/// Errors raised by collection operations.
///
/// # Examples
///
/// ```rust
/// use rich_collections::error::CollectionError;
///
/// let error = CollectionError::invalid_argument("chunk", "size must be greater than zero");
/// assert_eq!(format!("{error}"), "chunk: size must be greater than zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A reduction such as `min_element` was applied to an empty source.
    EmptySource {
        /// The operation that required an element.
        operation: &'static str,
    },
    /// Natural ordering was requested over a source holding `None`.
    NullElement {
        /// The operation that met the absent element.
        operation: &'static str,
    },
    /// Two source elements mapped to the same key.
    DuplicateKey {
        /// The unique-key operation.
        operation: &'static str,
    },
    /// Two source elements mapped to the same value.
    DuplicateValue {
        /// The unique-value operation.
        operation: &'static str,
    },
    /// The container does not support the operation.
    NotSupported {
        /// Name of the container type.
        container: &'static str,
        /// Name of the attempted operation.
        operation: &'static str,
    },
    /// An argument was rejected before any work was done.
    InvalidArgument {
        /// The operation that validated the argument.
        operation: &'static str,
        /// What was wrong with it.
        message: String,
    },
    /// The container was in the wrong state for the operation.
    IllegalState {
        /// The operation that checked the state.
        operation: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl CollectionError {
    /// Creates an [`CollectionError::EmptySource`] error.
    #[must_use]
    pub fn empty_source(operation: &'static str) -> Self {
        tracing::debug!(operation, "empty source");
        Self::EmptySource { operation }
    }

    /// Creates a [`CollectionError::NullElement`] error.
    #[must_use]
    pub fn null_element(operation: &'static str) -> Self {
        tracing::debug!(operation, "null element under natural ordering");
        Self::NullElement { operation }
    }

    /// Creates a [`CollectionError::DuplicateKey`] error.
    #[must_use]
    pub fn duplicate_key(operation: &'static str) -> Self {
        tracing::debug!(operation, "duplicate key");
        Self::DuplicateKey { operation }
    }

    /// Creates a [`CollectionError::DuplicateValue`] error.
    #[must_use]
    pub fn duplicate_value(operation: &'static str) -> Self {
        tracing::debug!(operation, "duplicate value");
        Self::DuplicateValue { operation }
    }

    /// Creates a [`CollectionError::NotSupported`] error.
    #[must_use]
    pub fn not_supported(container: &'static str, operation: &'static str) -> Self {
        tracing::debug!(container, operation, "operation not supported");
        Self::NotSupported {
            container,
            operation,
        }
    }

    /// Creates a [`CollectionError::InvalidArgument`] error.
    #[must_use]
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(operation, %message, "invalid argument");
        Self::InvalidArgument { operation, message }
    }

    /// Creates a [`CollectionError::IllegalState`] error.
    #[must_use]
    pub fn illegal_state(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(operation, %message, "illegal state");
        Self::IllegalState { operation, message }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySource { .. } => ErrorKind::EmptySource,
            Self::NullElement { .. } => ErrorKind::NullElement,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::DuplicateValue { .. } => ErrorKind::DuplicateValue,
            Self::NotSupported { .. } => ErrorKind::NotSupported,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::IllegalState { .. } => ErrorKind::IllegalState,
        }
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::EmptySource { operation }
            | Self::NullElement { operation }
            | Self::DuplicateKey { operation }
            | Self::DuplicateValue { operation }
            | Self::NotSupported { operation, .. }
            | Self::InvalidArgument { operation, .. }
            | Self::IllegalState { operation, .. } => *operation,
        }
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySource { operation } => {
                write!(formatter, "{operation}: source is empty")
            }
            Self::NullElement { operation } => write!(
                formatter,
                "{operation}: null element found without a null-safe comparator"
            ),
            Self::DuplicateKey { operation } => {
                write!(formatter, "{operation}: two elements produced the same key")
            }
            Self::DuplicateValue { operation } => {
                write!(formatter, "{operation}: two elements produced the same value")
            }
            Self::NotSupported {
                container,
                operation,
            } => write!(formatter, "{container}::{operation} is not supported"),
            Self::InvalidArgument { operation, message }
            | Self::IllegalState { operation, message } => {
                write!(formatter, "{operation}: {message}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}
