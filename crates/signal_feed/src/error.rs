use thiserror::Error;

/// Every way a signal request can fail. The dashboard treats all variants
/// the same; they only differ in the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("backend reported: {0}")]
    Backend(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}
