use serde::Deserialize;

/// One submission record as returned by the Pushshift search endpoint.
///
/// Only the fields the collector needs are decoded; everything else in the
/// payload is ignored. `subreddit_subscribers` is absent on some historical
/// records, which callers treat as zero.
#[derive(Deserialize, Debug)]
pub struct PushshiftSubmission {
    pub created_utc: i64,
    #[serde(default)]
    pub subreddit_subscribers: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct PushshiftResponse {
    #[serde(default)]
    pub data: Vec<PushshiftSubmission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_submission_with_subscriber_count() {
        let body = r#"{
            "data": [
                {
                    "created_utc": 1577840000,
                    "subreddit": "coronavirus",
                    "subreddit_subscribers": 12345,
                    "title": "unused"
                }
            ]
        }"#;

        let response: PushshiftResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].created_utc, 1_577_840_000);
        assert_eq!(response.data[0].subreddit_subscribers, Some(12_345));
    }

    #[test]
    fn missing_subscriber_field_decodes_to_none() {
        let body = r#"{"data": [{"created_utc": 1577840000}]}"#;

        let response: PushshiftResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].subreddit_subscribers, None);
    }

    #[test]
    fn empty_window_decodes_to_empty_data() {
        let body = r#"{"data": []}"#;

        let response: PushshiftResponse = serde_json::from_str(body).unwrap();
        assert!(response.data.is_empty());
    }
}
