/// Configuration defects: not user-fixable, surfaced loudly, never guessed
/// around.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
