use contracts::question::{QuestionAddRequest, QuestionUpdateRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::question::api;
use crate::routes::router::use_router;
use crate::routes::table::query_param;

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Question editor. Serves both `/add/question` and `/update/question`;
/// the `id` query parameter selects update mode.
#[component]
pub fn AddQuestionPage() -> impl IntoView {
    let router = use_router();

    let question_id = router
        .current
        .get_untracked()
        .and_then(|path| query_param(&path, "id"))
        .and_then(|id| id.parse::<i64>().ok());

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    // Update mode pre-fills the form from the existing question.
    if let Some(id) = question_id {
        spawn_local(async move {
            match api::get_question(&id.to_string()).await {
                Ok(q) => {
                    set_title.set(q.title);
                    set_content.set(q.content.unwrap_or_default());
                    set_tags.set(q.tags.join(", "));
                }
                Err(e) => set_error_message.set(Some(e)),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let title_val = title.get();
        let content_val = content.get();
        let tags_val = parse_tags(&tags.get());

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = match question_id {
                Some(id) => {
                    api::update_question(QuestionUpdateRequest {
                        id,
                        title: title_val,
                        content: content_val,
                        tags: tags_val,
                    })
                    .await
                }
                None => api::add_question(QuestionAddRequest {
                    title: title_val,
                    content: content_val,
                    tags: tags_val,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    set_is_saving.set(false);
                    router.navigate("/manage/question/");
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--editor">
            <h1>
                {if question_id.is_some() { "Update Question" } else { "Add Question" }}
            </h1>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="question-title">"Title"</label>
                    <input
                        type="text"
                        id="question-title"
                        value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="question-tags">"Tags (comma separated)"</label>
                    <input
                        type="text"
                        id="question-tags"
                        value=move || tags.get()
                        on:input=move |ev| set_tags.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="question-content">"Content"</label>
                    <textarea
                        id="question-content"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    ></textarea>
                </div>

                <button type="submit" class="button" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_split_on_commas_and_drop_blanks() {
        assert_eq!(parse_tags("dp, graph ,  "), vec!["dp", "graph"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" greedy "), vec!["greedy"]);
    }
}
