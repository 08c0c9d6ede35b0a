//! Invite codes.

use reqwest::Method;
use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;
use crate::models::CreateInviteParams;

const INVITES: &str = "/api/invites";

impl SantaClient {
    pub async fn list_invites(&self) -> Option<Value> {
        self.call(OutboundRequest::get(self.url(INVITES, &[])), false)
            .await
    }

    /// Create an invite. Without a code the server generates one.
    pub async fn create_invite(&self, params: &CreateInviteParams) -> Option<Value> {
        self.call_with_body(Method::POST, self.url(INVITES, &[]), params, true)
            .await
    }

    pub async fn delete_invite(&self, id: &str) -> Option<Value> {
        let url = self.url("/api/invites/id", &[id]);
        self.call(OutboundRequest::delete(url), true).await
    }
}
