use leptos::prelude::*;

use crate::routes::router::use_router;
use crate::system::session::use_session;

/// Home page for logged-in users.
#[component]
pub fn UserAnalysisPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    view! {
        <div class="page page--home">
            <h1>
                {move || match session.login_user().and_then(|u| u.user_name) {
                    Some(name) => format!("Welcome back, {}", name),
                    None => "Welcome".to_string(),
                }}
            </h1>
            <p>"Pick up where you left off, or find something new to solve."</p>
            <div class="page__actions">
                <button class="button" on:click=move |_| router.navigate("/questions")>
                    "Browse questions"
                </button>
                <button class="button" on:click=move |_| router.navigate("/question_suggest")>
                    "Daily picks"
                </button>
            </div>
        </div>
    }
}
