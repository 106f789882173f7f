use thiserror::Error;

#[derive(Error, Debug)]
pub enum NudgeError {
    #[error("validation error: {0}")] Validation(String),
    #[error("provider error: {0}")] Provider(String),
    #[error("schema error: {0}")] Schema(String),
}
