//! Gift-exchange pool methods for [`SantaClient`].
//!
//! Mutations report their outcome even on success; reads only report
//! non-`OK` replies.

use reqwest::Method;
use serde_json::Value;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;
use crate::models::PoolParams;

const POOLS: &str = "/api/santa/pools";
const POOL_BY_ID: &str = "/api/santa/pools/id";

impl SantaClient {
    pub async fn list_pools(&self) -> Option<Value> {
        self.call(OutboundRequest::get(self.url(POOLS, &[])), false)
            .await
    }

    pub async fn get_pool(&self, id: &str) -> Option<Value> {
        self.call(OutboundRequest::get(self.url(POOL_BY_ID, &[id])), false)
            .await
    }

    pub async fn create_pool(&self, params: &PoolParams) -> Option<Value> {
        self.call_with_body(Method::POST, self.url(POOLS, &[]), params, true)
            .await
    }

    pub async fn update_pool(&self, id: &str, params: &PoolParams) -> Option<Value> {
        self.call_with_body(Method::PUT, self.url(POOL_BY_ID, &[id]), params, true)
            .await
    }

    pub async fn delete_pool(&self, id: &str) -> Option<Value> {
        self.call(OutboundRequest::delete(self.url(POOL_BY_ID, &[id])), true)
            .await
    }

    /// Members taking part in pool `id`.
    pub async fn pool_members(&self, id: &str) -> Option<Value> {
        let url = format!("{}/members", self.url(POOL_BY_ID, &[id]));
        self.call(OutboundRequest::get(url), false).await
    }
}
