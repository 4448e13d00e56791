use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::use_router;
use crate::system::session::api;

#[component]
pub fn UserRegisterPage() -> impl IntoView {
    let (user_account, set_user_account) = signal(String::new());
    let (user_password, set_user_password) = signal(String::new());
    let (check_password, set_check_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let router = use_router();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let account = user_account.get();
        let password = user_password.get();
        let check = check_password.get();

        if password != check {
            set_error_message.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(account, password, check).await {
                Ok(_) => {
                    set_is_loading.set(false);
                    router.navigate("/user/login");
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
                <h2>"Register"</h2>

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

                    <div class="form-group">
                        <label for="check-password">"Confirm password"</label>
                        <input
                            type="password"
                            id="check-password"
                            value=move || check_password.get()
                            on:input=move |ev| set_check_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="button" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="login-box__hint">
                    <a on:click=move |_| router.navigate("/user/login")>
                        "Already registered? Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
