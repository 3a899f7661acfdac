use thiserror::Error;

/// Failures raised while dispatching a validated bridge request.
///
/// Validation problems never become errors: they are reported inside the
/// response body with a `details` list. Everything here is caught at the
/// bridge boundary, counted, and converted into a failure envelope.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("request is not a JSON object")]
    NotAnObject,

    #[error("operation is missing or not a string")]
    MissingOperation,

    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("operation `{op}` failed: {reason}")]
    Operation { op: &'static str, reason: String },
}

/// Failures from the external memory hub or knowledge base.
///
/// The recorder logs these and continues; they never abort a recording.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for CollaboratorError {
    fn from(e: reqwest::Error) -> Self {
        CollaboratorError::Transport(e.to_string())
    }
}
