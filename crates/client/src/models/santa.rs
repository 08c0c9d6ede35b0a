//! Request bodies for pool, membership, messaging and invite calls.

use serde::Serialize;

/// Fields of a gift-exchange pool, used for both creation and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolParams {
    pub name: String,
    pub description: String,
    /// Owner account; the server defaults it to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub min_price: u64,
    pub max_price: u64,
}

/// Membership of an account in a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinPoolParams {
    pub account_id: String,
    pub pool_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<String>,
}

/// A chat message posted into a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageParams {
    pub room_id: String,
    pub account_id: String,
    pub text_content: String,
}

/// Invite creation options; the server generates a code when none is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateInviteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_use: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_params_omit_missing_owner() {
        let params = PoolParams {
            name: "Office".to_string(),
            description: "Team exchange".to_string(),
            account_id: None,
            min_price: 10,
            max_price: 50,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("account_id").is_none());
        assert_eq!(json["min_price"], 10);
        assert_eq!(json["max_price"], 50);
    }

    #[test]
    fn test_default_invite_is_empty_object() {
        let json = serde_json::to_value(CreateInviteParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
