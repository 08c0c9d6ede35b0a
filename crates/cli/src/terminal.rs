//! Terminal implementations of the client's UI collaborators.
//!
//! Both write to stderr so stdout stays machine-readable JSON.

use santa_client::{Navigator, Notifier};

/// Prints outcome messages to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Tells the user how to log in.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginHint;

impl Navigator for LoginHint {
    fn navigate_to_login(&self) {
        eprintln!("Not logged in. Run `santa-cli login <username>` first.");
    }
}
