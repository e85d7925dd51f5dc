use std::fmt;

/// Why a remote call was not usable. Every variant is masked by the local fallback.
#[derive(Debug)]
pub enum RemoteError {
    /// Network unreachable, connection refused, timeout.
    Transport(reqwest::Error),
    /// Non-2xx status.
    Response { status: u16 },
    /// Body was not the expected JSON, or held out-of-range scores.
    Parse(String),
}

impl RemoteError {
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Transport(_) => "transport",
            RemoteError::Response { .. } => "response",
            RemoteError::Parse(_) => "parse",
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(err) => write!(f, "transport failure: {}", err),
            RemoteError::Response { status } => write!(f, "remote returned HTTP {}", status),
            RemoteError::Parse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemoteError::Transport(err) => Some(err),
            RemoteError::Response { .. } | RemoteError::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
