use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::use_router;
use crate::routes::table::query_param;
use crate::system::session::{api, use_session};

#[component]
pub fn UserLoginPage() -> impl IntoView {
    let (user_account, set_user_account) = signal(String::new());
    let (user_password, set_user_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let router = use_router();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let account = user_account.get();
        let password = user_password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(account, password).await {
                Ok(user) => {
                    session.set_login_user(user);
                    set_is_loading.set(false);
                    // Return to where the guard sent us from.
                    let target = router
                        .current
                        .get_untracked()
                        .and_then(|path| query_param(&path, "redirect"))
                        .unwrap_or_else(|| "/".to_string());
                    router.navigate(&target);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Online Judge"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="user-account">"Account"</label>
                        <input
                            type="text"
                            id="user-account"
                            value=move || user_account.get()
                            on:input=move |ev| set_user_account.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="user-password">"Password"</label>
                        <input
                            type="password"
                            id="user-password"
                            value=move || user_password.get()
                            on:input=move |ev| set_user_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="button" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="login-box__hint">
                    <a on:click=move |_| router.navigate("/user/register")>
                        "No account yet? Register"
                    </a>
                </p>
            </div>
        </div>
    }
}
