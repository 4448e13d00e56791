//! Page components, one per route table entry, and the registry that maps
//! a resolved route to its view.

mod add_question;
mod manage_question;
mod no_auth;
mod question_suggest;
mod questions;
mod user_analysis;
mod user_login;
mod user_register;
mod view_question;

pub use add_question::AddQuestionPage;
pub use manage_question::ManageQuestionPage;
pub use no_auth::NoAuthPage;
pub use question_suggest::QuestionSuggestPage;
pub use questions::QuestionsPage;
pub use user_analysis::UserAnalysisPage;
pub use user_login::UserLoginPage;
pub use user_register::UserRegisterPage;
pub use view_question::ViewQuestionPage;

use leptos::prelude::*;

use crate::routes::table::{RouteMatch, ViewId};

/// Renders the page for a resolved route.
pub fn render_route(target: &RouteMatch<'_>) -> AnyView {
    match target.route.view {
        ViewId::UserLogin => view! { <UserLoginPage /> }.into_any(),
        ViewId::UserRegister => view! { <UserRegisterPage /> }.into_any(),
        ViewId::UserAnalysis => view! { <UserAnalysisPage /> }.into_any(),
        ViewId::Questions => view! { <QuestionsPage /> }.into_any(),
        ViewId::QuestionSuggest => view! { <QuestionSuggestPage /> }.into_any(),
        ViewId::ViewQuestion => {
            let id = if target.route.pass_params {
                target.params.get("id").cloned().unwrap_or_default()
            } else {
                String::new()
            };
            view! { <ViewQuestionPage id=id /> }.into_any()
        }
        ViewId::AddQuestion => view! { <AddQuestionPage /> }.into_any(),
        ViewId::ManageQuestion => view! { <ManageQuestionPage /> }.into_any(),
        ViewId::NoAuth => view! { <NoAuthPage /> }.into_any(),
    }
}

/// Placeholder for paths the table does not know. There is deliberately no
/// routed not-found view; unmatched locations stay where they are.
pub fn render_not_found(full_path: &str) -> AnyView {
    log::warn!("no route matches {}", full_path);
    view! { <div class="placeholder">"Page not found"</div> }.into_any()
}
