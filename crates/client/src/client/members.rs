//! Pool membership.

use reqwest::Method;
use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;
use crate::models::JoinPoolParams;

impl SantaClient {
    /// Join a pool with an optional wishlist.
    pub async fn join_pool(&self, params: &JoinPoolParams) -> Option<Value> {
        let url = self.url("/api/santa/members", &[]);
        self.call_with_body(Method::POST, url, params, true).await
    }

    /// Leave a pool by removing membership `member_id`.
    pub async fn leave_pool(&self, member_id: &str) -> Option<Value> {
        let url = self.url("/api/santa/members/id", &[member_id]);
        self.call(OutboundRequest::delete(url), true).await
    }
}
