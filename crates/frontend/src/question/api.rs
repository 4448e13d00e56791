use contracts::question::{
    DeleteRequest, QuestionAddRequest, QuestionDetail, QuestionQueryRequest,
    QuestionSummary, QuestionUpdateRequest,
};
use contracts::shared::{BaseResponse, PageResult};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

fn unwrap_body<T>(body: BaseResponse<T>, what: &str) -> Result<T, String> {
    if !body.is_ok() {
        return Err(format!(
            "{} failed: {}",
            what,
            body.message.unwrap_or_else(|| body.code.to_string())
        ));
    }
    body.data.ok_or_else(|| format!("{} failed: empty response", what))
}

/// One page of the public question listing.
pub async fn list_questions(
    current: u64,
    page_size: u64,
) -> Result<PageResult<QuestionSummary>, String> {
    let request = QuestionQueryRequest { current, page_size };

    let response = Request::post(&api_url("/api/question/list/page/vo"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("List questions failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<PageResult<QuestionSummary>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "List questions")
}

/// Today's recommended questions for the logged-in user.
pub async fn suggest_questions() -> Result<Vec<QuestionSummary>, String> {
    let response = Request::get(&api_url("/api/question/suggest"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Suggest questions failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<Vec<QuestionSummary>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "Suggest questions")
}

pub async fn get_question(id: &str) -> Result<QuestionDetail, String> {
    let response = Request::get(&api_url(&format!("/api/question/get/vo?id={}", id)))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get question failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<QuestionDetail>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "Get question")
}

/// Create a question; returns the new question id.
pub async fn add_question(request: QuestionAddRequest) -> Result<i64, String> {
    let response = Request::post(&api_url("/api/question/add"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Add question failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<i64>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "Add question")
}

pub async fn update_question(request: QuestionUpdateRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/question/update"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update question failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<bool>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "Update question").map(|_| ())
}

pub async fn delete_question(id: i64) -> Result<(), String> {
    let response = Request::post(&api_url("/api/question/delete"))
        .credentials(RequestCredentials::Include)
        .json(&DeleteRequest { id })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete question failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<bool>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    unwrap_body(body, "Delete question").map(|_| ())
}
