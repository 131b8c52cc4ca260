use serde::Serialize;

use crate::types::ActivityStatus;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRangeQuery<'a> {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub status: ActivityStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_query_omits_missing_user() {
        let own = ActivityRangeQuery {
            from: "2025-03-03".to_string(),
            to: "2025-03-09".to_string(),
            user_id: None,
        };
        let value = serde_json::to_value(&own).unwrap();
        assert_eq!(value, serde_json::json!({"from": "2025-03-03", "to": "2025-03-09"}));

        let other = ActivityRangeQuery {
            user_id: Some("u-7"),
            ..own
        };
        assert_eq!(serde_json::to_value(&other).unwrap()["userId"], "u-7");
    }

    #[test]
    fn status_request_uses_lowercase_status() {
        let body = SetStatusRequest {
            status: ActivityStatus::Submitted,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"submitted"}"#
        );
    }
}
