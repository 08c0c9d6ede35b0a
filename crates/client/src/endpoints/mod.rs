//! Low-level HTTP calls made outside the authenticated dispatcher.
//!
//! Token exchanges and account registration are unauthenticated; everything
//! else goes through [`crate::dispatch::Dispatcher`].

mod account;
mod oauth;
mod request;
pub mod url_encoding;

pub use account::sign_up;
pub use oauth::{Grant, request_token};
pub use request::check_response;
pub use url_encoding::encode_path_segment;
