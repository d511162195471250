use crate::candidate::Candidate;

/// The submission boundary: one call, accepts the completed candidate,
/// returns nothing. A real deployment would put a persistence layer or an
/// API client behind this.
pub trait SubmissionSink {
    fn accept(&mut self, candidate: Candidate);
}

/// Diagnostic sink: emits the candidate as a structured JSON log line.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&mut self, candidate: Candidate) {
        match serde_json::to_string(&candidate) {
            Ok(json) => {
                tracing::info!(target: "intake::submission", candidate = %json, "candidate submitted");
            }
            Err(err) => {
                tracing::error!(target: "intake::submission", %err, "failed to serialize candidate");
            }
        }
    }
}
