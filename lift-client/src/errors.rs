use thiserror::Error;
use tonic::codegen::http::uri;
use tonic::{Code, Status};

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error")]
    Transport(#[from] tonic::transport::Error),

    #[error("unable to parse the address")]
    InvalidAddress(#[from] uri::InvalidUri),

    #[error("unable to load the certificate")]
    Io(#[from] std::io::Error),

    #[error("stream already exists")]
    StreamExists,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("broker returned {}: {}", .0.code(), .0.message())]
    Status(Status),

    #[error("subscription stream closed by the broker")]
    StreamClosed,

    #[error("invalid response from the broker: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    pub fn extract_status(&self) -> Option<&Status> {
        match self {
            ClientError::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Maps a gRPC status onto the errors callers are expected to branch on.
pub(crate) fn status_to_client_error(status: Status) -> ClientError {
    match status.code() {
        Code::AlreadyExists => ClientError::StreamExists,
        Code::NotFound => ClientError::NotFound(status.message().to_string()),
        _ => ClientError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_maps_to_stream_exists() {
        let err = status_to_client_error(Status::already_exists("stream already exists"));
        assert!(matches!(err, ClientError::StreamExists));
    }

    #[test]
    fn not_found_keeps_the_broker_message() {
        let err = status_to_client_error(Status::not_found("no such stream"));
        assert_eq!(err.to_string(), "not found: no such stream");
    }

    #[test]
    fn other_codes_keep_the_status() {
        let err = status_to_client_error(Status::unavailable("leader moved"));
        let status = err.extract_status().expect("status preserved");
        assert_eq!(status.code(), Code::Unavailable);
        assert!(err.to_string().contains("leader moved"));
    }
}
