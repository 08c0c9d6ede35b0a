//! Account lookups for the logged-in user.

use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;

impl SantaClient {
    /// Account id of the logged-in user.
    pub async fn my_id(&self) -> Option<Value> {
        let url = self.url("/api/users/my_id", &[]);
        self.call(OutboundRequest::get(url), false).await
    }

    /// Nickname of the logged-in user.
    pub async fn my_nickname(&self) -> Option<Value> {
        let url = self.url("/api/users/my_nickname", &[]);
        self.call(OutboundRequest::get(url), false).await
    }
}
