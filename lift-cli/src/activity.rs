use prost::Message as _;
use std::io::Write;
use tracing::warn;

use lift_client::Message;
use lift_core::proto::{self, ActivityStreamOp};

use crate::errors::{CliError, DecodeError};
use crate::session::MessageHandler;

/// An administrative event read from the activity stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ActivityEvent {
    CreateStream {
        stream: String,
        partitions: Vec<i32>,
    },
    DeleteStream {
        stream: String,
    },
    PauseStream {
        stream: String,
        partitions: Vec<i32>,
        resume_all: bool,
    },
    ResumeStream {
        stream: String,
        partitions: Vec<i32>,
    },
    /// Any other discriminant, including ones this client doesn't know about.
    Unknown {
        op: i32,
    },
}

impl ActivityEvent {
    pub(crate) fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let event = proto::ActivityStreamEvent::decode(payload)?;

        let decoded = match ActivityStreamOp::try_from(event.op) {
            Ok(ActivityStreamOp::CreateStream) => {
                let op = event
                    .create_stream_op
                    .ok_or(DecodeError::MissingOperation("CREATE_STREAM"))?;
                ActivityEvent::CreateStream {
                    stream: op.stream,
                    partitions: op.partitions,
                }
            }
            Ok(ActivityStreamOp::DeleteStream) => {
                let op = event
                    .delete_stream_op
                    .ok_or(DecodeError::MissingOperation("DELETE_STREAM"))?;
                ActivityEvent::DeleteStream { stream: op.stream }
            }
            Ok(ActivityStreamOp::PauseStream) => {
                let op = event
                    .pause_stream_op
                    .ok_or(DecodeError::MissingOperation("PAUSE_STREAM"))?;
                ActivityEvent::PauseStream {
                    stream: op.stream,
                    partitions: op.partitions,
                    resume_all: op.resume_all,
                }
            }
            Ok(ActivityStreamOp::ResumeStream) => {
                let op = event
                    .resume_stream_op
                    .ok_or(DecodeError::MissingOperation("RESUME_STREAM"))?;
                ActivityEvent::ResumeStream {
                    stream: op.stream,
                    partitions: op.partitions,
                }
            }
            _ => ActivityEvent::Unknown { op: event.op },
        };
        Ok(decoded)
    }

    /// Protobuf name of the operation, or its raw number when it has none.
    pub(crate) fn op_name(&self) -> String {
        let op = match self {
            ActivityEvent::CreateStream { .. } => ActivityStreamOp::CreateStream,
            ActivityEvent::DeleteStream { .. } => ActivityStreamOp::DeleteStream,
            ActivityEvent::PauseStream { .. } => ActivityStreamOp::PauseStream,
            ActivityEvent::ResumeStream { .. } => ActivityStreamOp::ResumeStream,
            ActivityEvent::Unknown { op } => {
                return ActivityStreamOp::try_from(*op)
                    .map(|op| op.as_str_name().to_string())
                    .unwrap_or_else(|_| op.to_string())
            }
        };
        op.as_str_name().to_string()
    }

    pub(crate) fn render(&self) -> String {
        match self {
            ActivityEvent::CreateStream { stream, partitions } => {
                format!("stream: {}, partitions: {:?}", stream, partitions)
            }
            ActivityEvent::DeleteStream { stream } => format!("stream: {}", stream),
            ActivityEvent::PauseStream {
                stream,
                partitions,
                resume_all,
            } => format!(
                "stream: {}, partitions: {:?}, resumeAll: {}",
                stream, partitions, resume_all
            ),
            ActivityEvent::ResumeStream { stream, partitions } => {
                format!("stream: {}, partitions: {:?}", stream, partitions)
            }
            ActivityEvent::Unknown { .. } => "unknown activity".to_string(),
        }
    }
}

/// Prints every activity stream message. Undecodable ones are reported and skipped.
pub(crate) struct ActivityHandler<W> {
    out: W,
}

impl<W: Write> ActivityHandler<W> {
    pub(crate) fn new(out: W) -> Self {
        ActivityHandler { out }
    }
}

impl<W: Write> MessageHandler for ActivityHandler<W> {
    fn handle(&mut self, message: &Message) -> Result<(), CliError> {
        match ActivityEvent::decode(&message.value) {
            Ok(event) => writeln!(
                self.out,
                "Received activity stream message: op: {}, {}, offset: {}",
                event.op_name(),
                event.render(),
                message.offset
            )?,
            Err(err) => {
                warn!(offset = message.offset, error = %err, "invalid activity stream message");
                writeln!(
                    self.out,
                    "Received an invalid activity message from the activity stream: {}",
                    err
                )?;
            }
        }
        Ok(())
    }
}
