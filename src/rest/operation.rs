//! Operation kinds and their expected success statuses.
//!
//! Every request the executor runs is described by an [`OperationSpec`]: the
//! resource name used in error messages and the [`OperationKind`], which
//! selects the HTTP status that counts as success.

use std::fmt;

use crate::clients::HttpMethod;

/// The kind of operation performed against a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Create a new resource.
    Create,
    /// Fetch a single resource.
    Fetch,
    /// Update an existing resource.
    Update,
    /// Delete a resource.
    Delete,
    /// List resources page by page.
    Read,
}

impl OperationKind {
    /// Returns the lowercase operation name used in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Fetch => "fetch",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Read => "read",
        }
    }

    /// Returns the HTTP method the API uses for this kind of operation.
    ///
    /// Updates are sent as POST.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Create | Self::Update => HttpMethod::Post,
            Self::Fetch | Self::Read => HttpMethod::Get,
            Self::Delete => HttpMethod::Delete,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single status code that denotes success for each operation kind.
///
/// Defaults: 201 for create, 204 for delete, 200 otherwise.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::{OperationKind, SuccessStatuses};
///
/// let statuses = SuccessStatuses::default().with(OperationKind::Create, 200);
/// assert_eq!(statuses.expected(OperationKind::Create), 200);
/// assert_eq!(statuses.expected(OperationKind::Delete), 204);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuccessStatuses {
    create: u16,
    fetch: u16,
    update: u16,
    delete: u16,
    read: u16,
}

impl SuccessStatuses {
    /// Returns the expected status for an operation kind.
    #[must_use]
    pub const fn expected(&self, kind: OperationKind) -> u16 {
        match kind {
            OperationKind::Create => self.create,
            OperationKind::Fetch => self.fetch,
            OperationKind::Update => self.update,
            OperationKind::Delete => self.delete,
            OperationKind::Read => self.read,
        }
    }

    /// Returns a copy with the expected status for `kind` replaced.
    #[must_use]
    pub const fn with(mut self, kind: OperationKind, status: u16) -> Self {
        match kind {
            OperationKind::Create => self.create = status,
            OperationKind::Fetch => self.fetch = status,
            OperationKind::Update => self.update = status,
            OperationKind::Delete => self.delete = status,
            OperationKind::Read => self.read = status,
        }
        self
    }
}

impl Default for SuccessStatuses {
    fn default() -> Self {
        Self {
            create: 201,
            fetch: 200,
            update: 200,
            delete: 204,
            read: 200,
        }
    }
}

/// Identifies one operation for execution and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationSpec {
    /// Resource name used in error messages (e.g., "Recording").
    pub resource: &'static str,
    /// The operation being performed.
    pub kind: OperationKind,
}

impl OperationSpec {
    /// Creates a new operation spec.
    #[must_use]
    pub const fn new(resource: &'static str, kind: OperationKind) -> Self {
        Self { resource, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_success_statuses() {
        let statuses = SuccessStatuses::default();
        assert_eq!(statuses.expected(OperationKind::Create), 201);
        assert_eq!(statuses.expected(OperationKind::Fetch), 200);
        assert_eq!(statuses.expected(OperationKind::Update), 200);
        assert_eq!(statuses.expected(OperationKind::Delete), 204);
        assert_eq!(statuses.expected(OperationKind::Read), 200);
    }

    #[test]
    fn test_http_methods_per_kind() {
        assert_eq!(OperationKind::Update.http_method(), HttpMethod::Post);
        assert_eq!(OperationKind::Read.http_method(), HttpMethod::Get);
        assert_eq!(OperationKind::Delete.http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_operation_kind_display() {
        assert_eq!(OperationKind::Read.to_string(), "read");
        assert_eq!(OperationKind::Create.to_string(), "create");
    }
}
