//! Per-pool chat rooms.

use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;

impl SantaClient {
    pub async fn list_rooms(&self) -> Option<Value> {
        let url = self.url("/api/santa/rooms", &[]);
        self.call(OutboundRequest::get(url), false).await
    }

    pub async fn get_room(&self, id: &str) -> Option<Value> {
        let url = self.url("/api/santa/rooms/id", &[id]);
        self.call(OutboundRequest::get(url), false).await
    }
}
