use thiserror::Error;

/// A listings or statistics request that did not yield usable data.
///
/// All variants are recovered by the controller and shown as the generic
/// error placeholder. None of them stop the dashboard.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("{endpoint} reported success=false")]
    Unsuccessful { endpoint: String },
}

impl FetchError {
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. }
            | FetchError::Unsuccessful { endpoint } => endpoint,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
