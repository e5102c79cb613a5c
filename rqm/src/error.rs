use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Input closed before a yes/no answer was given")]
    InputClosed,
    #[error("`{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },
}
