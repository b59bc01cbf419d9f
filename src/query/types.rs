//! Query and result types shared by the dispatcher and the presenter

/// Which upstream endpoint a query targets. Each kind owns one result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    ServerStatus,
    PlayerInfo,
}

impl QueryKind {
    /// Path of the endpoint relative to the API base
    pub fn endpoint(self) -> &'static str {
        match self {
            QueryKind::ServerStatus => "/api/v1/game/minecraft/serverstatus",
            QueryKind::PlayerInfo => "/api/v1/game/minecraft/userinfo",
        }
    }

    /// Name of the query parameter carrying the user input
    pub fn query_param(self) -> &'static str {
        match self {
            QueryKind::ServerStatus => "server",
            QueryKind::PlayerInfo => "username",
        }
    }

    fn missing_input_message(self) -> &'static str {
        match self {
            QueryKind::ServerStatus => "please enter a server address",
            QueryKind::PlayerInfo => "please enter a player name or UUID",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::ServerStatus => write!(f, "server status"),
            QueryKind::PlayerInfo => write!(f, "player info"),
        }
    }
}

/// Identifier handed out for every accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryId(pub u64);

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    kind: QueryKind,
    input: String,
}

impl Query {
    /// Trims `input` and rejects it when nothing is left.
    pub fn new(kind: QueryKind, input: &str) -> Result<Self, QueryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Validation(kind.missing_input_message()));
        }

        Ok(Self {
            kind,
            input: trimmed.to_string(),
        })
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("API request failed: {0}")]
    HttpStatus(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("API returned error: {0}")]
    ApiLogical(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl QueryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, QueryError::Validation(_))
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
            QueryError::Network(e.to_string())
        } else {
            QueryError::Unknown(e.to_string())
        }
    }
}

/// Terminal outcome of one query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Success { payload: serde_json::Value },
    Failure { message: String },
}

impl QueryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }
}

impl From<Result<serde_json::Value, QueryError>> for QueryResult {
    fn from(result: Result<serde_json::Value, QueryError>) -> Self {
        match result {
            Ok(payload) => QueryResult::Success { payload },
            Err(e) => QueryResult::Failure {
                message: e.to_string(),
            },
        }
    }
}
