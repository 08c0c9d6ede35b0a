//! Outcome notifications for the user.

use std::fmt::Debug;

use tracing::info;

/// Renders human-visible outcome messages. Push-only.
pub trait Notifier: Debug + Send + Sync {
    fn notify(&self, message: &str);
}

/// Emits notifications as `info` events on the `santa_client::notify` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "santa_client::notify", "{}", message);
    }
}
