use crate::token::QueryTokenKind;

/// The kind of an operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// Maps an operation keyword token to its kind.
    pub fn from_token_kind(kind: QueryTokenKind) -> Option<Self> {
        match kind {
            QueryTokenKind::Mutation => Some(OperationKind::Mutation),
            QueryTokenKind::Query => Some(OperationKind::Query),
            QueryTokenKind::Subscription => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    /// The keyword that introduces this kind of operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
