use serde::{Deserialize, Serialize};

/// Question list item as served by `/api/question/list/page/vo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub submit_num: Option<i64>,
    pub accepted_num: Option<i64>,
}

/// Full question as served by `/api/question/get/vo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionQueryRequest {
    pub current: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAddRequest {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdateRequest {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Generic id-only request body (`/api/question/delete` and friends).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tolerates_missing_tags_and_counters() {
        let q: QuestionSummary =
            serde_json::from_str(r#"{"id":42,"title":"Two Sum"}"#).unwrap();
        assert_eq!(q.id, 42);
        assert!(q.tags.is_empty());
        assert_eq!(q.submit_num, None);
    }

    #[test]
    fn query_request_serializes_camel_case() {
        let body = serde_json::to_string(&QuestionQueryRequest {
            current: 1,
            page_size: 20,
        })
        .unwrap();
        assert_eq!(body, r#"{"current":1,"pageSize":20}"#);
    }
}
