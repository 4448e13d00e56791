use serde::{Deserialize, Serialize};

/// Response envelope every backend endpoint wraps its payload in.
/// `code` 0 means success; anything else carries an error `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> BaseResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    // An explicit default path keeps the derive from bounding `T: Default`.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_envelope_without_data() {
        let body: BaseResponse<i64> =
            serde_json::from_str(r#"{"code":40100,"data":null,"message":"not login"}"#).unwrap();
        assert!(!body.is_ok());
        assert_eq!(body.data, None);
        assert_eq!(body.message.as_deref(), Some("not login"));
    }

    #[test]
    fn parses_page_with_missing_fields() {
        let page: PageResult<i64> = serde_json::from_str(r#"{"total":0}"#).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn parses_page_of_question_summaries() {
        // QuestionSummary has no Default impl; paging must not require one.
        let page: PageResult<crate::question::QuestionSummary> = serde_json::from_str(
            r#"{"records":[{"id":1,"title":"Two Sum","tags":["array"]}],"total":1}"#,
        )
        .unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].id, 1);
        assert_eq!(page.total, 1);
    }
}
