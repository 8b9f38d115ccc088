use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Specifies the sort order for returned submissions.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

impl Sort {
    fn as_query_value(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

/// Pushshift-specific parameters for a submission search.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PushshiftParams {
    /// Number of records per window. The collector only reads the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

/// Builds the query string for one window request.
pub fn construct_params(
    forum: &str,
    after: DateTime<Utc>,
    before: DateTime<Utc>,
    extra: &PushshiftParams,
) -> Vec<(String, String)> {
    let mut query = vec![
        ("after".to_string(), after.timestamp().to_string()),
        ("before".to_string(), before.timestamp().to_string()),
        (
            "size".to_string(),
            extra.size.unwrap_or(1).to_string(),
        ),
        ("subreddit".to_string(), forum.to_string()),
    ];
    if let Some(sort) = &extra.sort {
        query.push(("sort".to_string(), sort.as_query_value().to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_construct_params_defaults() {
        let after = Utc.timestamp_opt(1_577_836_800, 0).unwrap();
        let before = Utc.timestamp_opt(1_577_923_200, 0).unwrap();
        let query = construct_params("coronavirus", after, before, &PushshiftParams::default());

        assert_eq!(
            query,
            vec![
                ("after".to_string(), "1577836800".to_string()),
                ("before".to_string(), "1577923200".to_string()),
                ("size".to_string(), "1".to_string()),
                ("subreddit".to_string(), "coronavirus".to_string()),
            ]
        );
    }

    #[test]
    fn test_construct_params_with_sort() {
        let after = Utc.timestamp_opt(0, 0).unwrap();
        let before = Utc.timestamp_opt(86_400, 0).unwrap();
        let query = construct_params(
            "rust",
            after,
            before,
            &PushshiftParams {
                size: Some(5),
                sort: Some(Sort::Desc),
            },
        );

        assert!(query.contains(&("size".to_string(), "5".to_string())));
        assert!(query.contains(&("sort".to_string(), "desc".to_string())));
    }
}
