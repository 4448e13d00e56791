use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::use_router;
use crate::routes::table::menu_routes;
use crate::system::session::{api, use_session};

/// Whether a menu entry points at the currently settled location.
fn is_active(current: Option<&str>, route_path: &str) -> bool {
    let Some(current) = current else {
        return false;
    };
    let path = current.split('?').next().unwrap_or(current);
    normalize(path) == normalize(route_path)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                log::warn!("logout failed: {}", err);
            }
            session.clear();
            router.navigate("/");
        });
    };

    view! {
        <header class="header">
            <div class="header__brand" on:click=move |_| router.navigate("/questions")>
                <span class="header__title">"Online Judge"</span>
            </div>
            <nav class="header__menu">
                <ul>
                    {move || {
                        let role = session.role();
                        let current = router.current.get();
                        menu_routes(role)
                            .into_iter()
                            .map(|route| {
                                let active = is_active(current.as_deref(), route.path);
                                view! {
                                    <li
                                        class="header__menu-item"
                                        class:active=active
                                        on:click=move |_| router.navigate(route.path)
                                    >
                                        {route.name}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
            <div class="header__user">
                {move || match session.login_user().and_then(|u| u.user_name) {
                    Some(name) => view! {
                        <span class="header__user-name">{name}</span>
                        <button class="button button--ghost" on:click=on_logout>
                            "Logout"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            class="button button--ghost"
                            on:click=move |_| router.navigate("/user/login")
                        >
                            "Login"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_matches_path_without_query() {
        assert!(is_active(Some("/questions"), "/questions"));
        assert!(is_active(Some("/manage/question"), "/manage/question/"));
        assert!(is_active(Some("/user/login?redirect=/"), "/user/login"));
        assert!(!is_active(Some("/questions"), "/"));
        assert!(!is_active(None, "/questions"));
    }
}
