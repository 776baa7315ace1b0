//! Application-wide error types using thiserror.

use cogbot_common::CogbotError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration, filesystem or cog error from the library crates.
    #[error(transparent)]
    Common(#[from] CogbotError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Poise framework error.
    #[error("Framework error: {0}")]
    Framework(String),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_errors_keep_their_own_message() {
        let err = BotError::from(CogbotError::Config("Command prefix cannot be empty".to_string()));
        assert_eq!(err.to_string(), "Configuration error: Command prefix cannot be empty");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BotError::from(CogbotError::from(io));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
