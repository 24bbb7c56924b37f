//! Error types for zd-records.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{}{kind}", context_prefix(.context))]
pub struct Error {
    pub kind: ErrorKind,
    /// Which operation failed, and against which collection.
    pub context: Option<ErrorContext>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            context: None,
            source: Some(Box::new(source)),
        }
    }

    /// Tag the error with the failing operation. An existing tag is kept.
    pub fn in_operation(mut self, operation: &'static str, collection_key: Option<&str>) -> Self {
        if self.context.is_none() {
            self.context = Some(ErrorContext {
                operation,
                collection_key: collection_key.map(str::to_string),
            });
        }
        self
    }

    /// Returns true if the caller's context aborted the operation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled(_))
    }

    /// The transport error behind a `Transport` or `Cancelled` failure.
    pub fn transport_error(&self) -> Option<&zendesk_client::Error> {
        self.source.as_ref()?.downcast_ref::<zendesk_client::Error>()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Operation name and collection key attached to a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub operation: &'static str,
    pub collection_key: Option<String>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.collection_key {
            Some(key) => write!(f, "{} [{}]", self.operation, key),
            None => f.write_str(self.operation),
        }
    }
}

fn context_prefix(context: &Option<ErrorContext>) -> String {
    context.as_ref().map(|c| format!("{c}: ")).unwrap_or_default()
}

impl From<zendesk_client::Error> for Error {
    fn from(err: zendesk_client::Error) -> Self {
        let kind = match &err.kind {
            zendesk_client::ErrorKind::Cancelled(reason) => ErrorKind::Cancelled(reason.clone()),
            _ => ErrorKind::Transport(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Encoding(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = Error::new(ErrorKind::Decode("missing field `custom_object_record`".into()))
            .in_operation("create", Some("car"));
        assert_eq!(
            err.to_string(),
            "create [car]: Decode error: missing field `custom_object_record`"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = Error::new(ErrorKind::InvalidArgument("empty collection key".into()));
        assert_eq!(err.to_string(), "Invalid argument: empty collection key");
    }

    #[test]
    fn test_first_context_wins() {
        let err = Error::new(ErrorKind::Encoding("x".into()))
            .in_operation("search", Some("car"))
            .in_operation("search_all", Some("car"));
        assert_eq!(err.context.unwrap().operation, "search");
    }

    #[test]
    fn test_from_client_error() {
        let client_err = zendesk_client::Error::new(zendesk_client::ErrorKind::Http {
            status: 500,
            message: "boom".into(),
        });
        let err: Error = client_err.into();
        assert!(matches!(err.kind, ErrorKind::Transport(_)));
        assert!(matches!(
            err.transport_error().map(|e| &e.kind),
            Some(zendesk_client::ErrorKind::Http { status: 500, .. })
        ));

        let cancelled = zendesk_client::Error::new(zendesk_client::ErrorKind::Cancelled(
            "deadline exceeded".into(),
        ));
        let err: Error = cancelled.into();
        assert!(err.is_cancelled());
    }
}
