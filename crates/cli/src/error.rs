//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 always means the user has to log in (again).
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use santa_client::ClientError;

/// Structured exit codes for santa-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication required - no session, refused credentials or a
    /// session that could not be renewed.
    AuthenticationRequired = 2,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            ExitCode::AuthenticationRequired
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::time::Duration;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationRequired.as_i32(), 2);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_auth_errors_map_to_two() {
        for err in [
            ClientError::LoginRequired,
            ClientError::SessionExpired,
            ClientError::AuthFailed("Bad credentials".to_string()),
            ClientError::InvalidTokenResponse("expires_in"),
        ] {
            assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationRequired);
        }
    }

    #[test]
    fn test_other_errors_map_to_one() {
        let err = ClientError::Timeout(Duration::from_secs(15));
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::new(ClientError::LoginRequired).context("Listing pools");
        assert_eq!(err.exit_code(), ExitCode::AuthenticationRequired);

        let result: Result<(), ClientError> = Err(ClientError::SessionExpired);
        let err = result.context("Fetching rooms").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::AuthenticationRequired);

        assert_eq!(anyhow::anyhow!("boom").exit_code(), ExitCode::GeneralError);
    }
}
