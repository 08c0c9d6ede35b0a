//! Chat messages.

use reqwest::Method;
use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;
use crate::models::SendMessageParams;

const MESSAGES: &str = "/api/santa/messages";

impl SantaClient {
    pub async fn list_messages(&self) -> Option<Value> {
        self.call(OutboundRequest::get(self.url(MESSAGES, &[])), false)
            .await
    }

    pub async fn send_message(&self, params: &SendMessageParams) -> Option<Value> {
        self.call_with_body(Method::POST, self.url(MESSAGES, &[]), params, false)
            .await
    }
}
