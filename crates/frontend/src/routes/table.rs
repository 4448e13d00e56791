//! Static route table: the single source of truth for which paths exist,
//! what they render and what access they demand.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::system::access::{can_access, AccessLevel};

/// Pages the table can point at. The table holds references only; the page
/// registry in `pages` owns instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    UserLogin,
    UserRegister,
    UserAnalysis,
    Questions,
    QuestionSuggest,
    ViewQuestion,
    AddQuestion,
    ManageQuestion,
    NoAuth,
}

/// One navigable path and its metadata.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// URL pattern; `:name` segments capture a path parameter.
    pub path: &'static str,
    /// Display label used in the menu and the document title.
    pub name: &'static str,
    pub view: ViewId,
    /// Required access level; `None` means reachable by anyone.
    pub access: Option<AccessLevel>,
    /// Presentation hint for the menu; never consulted by the guard.
    pub hide_in_menu: bool,
    /// Forward captured path parameters to the page as props.
    pub pass_params: bool,
}

/// The route table. Built once at startup, read-only afterwards.
static ROUTES: Lazy<Vec<RouteDescriptor>> = Lazy::new(|| {
    vec![
        RouteDescriptor {
            path: "/user/login",
            name: "User Login",
            view: ViewId::UserLogin,
            access: None,
            hide_in_menu: true,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/user/register",
            name: "User Register",
            view: ViewId::UserRegister,
            access: None,
            hide_in_menu: true,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/",
            name: "Home",
            view: ViewId::UserAnalysis,
            access: Some(AccessLevel::User),
            hide_in_menu: false,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/questions",
            name: "Questions",
            view: ViewId::Questions,
            access: None,
            hide_in_menu: false,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/question_suggest",
            name: "Daily Picks",
            view: ViewId::QuestionSuggest,
            access: Some(AccessLevel::User),
            hide_in_menu: false,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/view/question/:id",
            name: "View Question",
            view: ViewId::ViewQuestion,
            access: Some(AccessLevel::User),
            hide_in_menu: true,
            pass_params: true,
        },
        RouteDescriptor {
            path: "/add/question",
            name: "Add Question",
            view: ViewId::AddQuestion,
            access: Some(AccessLevel::Admin),
            hide_in_menu: false,
            pass_params: false,
        },
        // Same page as /add/question; it branches on the `id` query param.
        RouteDescriptor {
            path: "/update/question",
            name: "Update Question",
            view: ViewId::AddQuestion,
            access: Some(AccessLevel::Admin),
            hide_in_menu: true,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/manage/question/",
            name: "Manage Questions",
            view: ViewId::ManageQuestion,
            access: Some(AccessLevel::Admin),
            hide_in_menu: false,
            pass_params: false,
        },
        RouteDescriptor {
            path: "/noAuth",
            name: "No Access",
            view: ViewId::NoAuth,
            access: None,
            hide_in_menu: true,
            pass_params: false,
        },
    ]
});

pub fn routes() -> &'static [RouteDescriptor] {
    &ROUTES
}

/// A requested path resolved against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDescriptor,
    pub params: HashMap<String, String>,
    /// Originally requested path including the query string.
    pub full_path: String,
}

fn split_query(full_path: &str) -> (&str, Option<&str>) {
    match full_path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (full_path, None),
    }
}

fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // The root path and a bare trailing slash both normalize to one
        // empty segment.
        vec![""]
    } else {
        trimmed.split('/').collect()
    }
}

/// Matches one pattern against a path, capturing `:name` segments.
/// Trailing slashes are insignificant on either side.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(path);
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pat, actual) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = pat.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            params.insert(name.to_string(), actual.to_string());
        } else if pat != actual {
            return None;
        }
    }
    Some(params)
}

/// Resolves a requested path (with or without a query string) against the
/// table. Static patterns take precedence over parameterized ones; within
/// each group the first table entry wins.
pub fn resolve(full_path: &str) -> Option<RouteMatch<'static>> {
    let (path, _) = split_query(full_path);

    let statics = routes().iter().filter(|r| !r.path.contains(':'));
    let dynamics = routes().iter().filter(|r| r.path.contains(':'));
    let matched = statics
        .chain(dynamics)
        .find_map(|route| match_pattern(route.path, path).map(|params| (route, params)));

    matched.map(|(route, params)| RouteMatch {
        route,
        params,
        full_path: full_path.to_string(),
    })
}

/// Reads one query parameter from a full path.
pub fn query_param(full_path: &str, key: &str) -> Option<String> {
    let (_, query) = split_query(full_path);
    let params: HashMap<String, String> = serde_qs::from_str(query?).ok()?;
    params.get(key).cloned()
}

/// Routes shown in the menu for `role`: presentation-hidden entries are
/// dropped, and gated entries the role cannot reach are not advertised.
/// Advisory only; the guard still checks every navigation.
pub fn menu_routes(role: AccessLevel) -> Vec<&'static RouteDescriptor> {
    routes()
        .iter()
        .filter(|r| !r.hide_in_menu && can_access(role, r.access))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_path_resolves_to_its_view() {
        let expected = [
            ("/user/login", ViewId::UserLogin),
            ("/user/register", ViewId::UserRegister),
            ("/", ViewId::UserAnalysis),
            ("/questions", ViewId::Questions),
            ("/question_suggest", ViewId::QuestionSuggest),
            ("/view/question/42", ViewId::ViewQuestion),
            ("/add/question", ViewId::AddQuestion),
            ("/update/question", ViewId::AddQuestion),
            ("/manage/question/", ViewId::ManageQuestion),
            ("/noAuth", ViewId::NoAuth),
        ];
        for (path, view) in expected {
            let m = resolve(path).unwrap_or_else(|| panic!("{path} did not resolve"));
            assert_eq!(m.route.view, view, "{path}");
            assert_eq!(m.full_path, path);
        }
    }

    #[test]
    fn path_parameters_are_captured() {
        let m = resolve("/view/question/42").unwrap();
        assert!(m.route.pass_params);
        assert_eq!(m.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn trailing_slash_is_insignificant() {
        assert_eq!(
            resolve("/manage/question").unwrap().route.view,
            ViewId::ManageQuestion
        );
        assert_eq!(
            resolve("/questions/").unwrap().route.view,
            ViewId::Questions
        );
    }

    #[test]
    fn query_string_does_not_affect_matching() {
        let m = resolve("/user/login?redirect=/add/question").unwrap();
        assert_eq!(m.route.view, ViewId::UserLogin);
        assert_eq!(m.full_path, "/user/login?redirect=/add/question");
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve("/nope").is_none());
        assert!(resolve("/view/question").is_none());
        assert!(resolve("/view/question/42/extra").is_none());
    }

    #[test]
    fn static_patterns_beat_parameterized_ones() {
        // A parameterized pattern that could shadow a static sibling must
        // lose to it regardless of table order.
        assert!(match_pattern("/view/question/:id", "/view/question/42").is_some());
        let m = resolve("/user/login").unwrap();
        assert_eq!(m.route.view, ViewId::UserLogin);
        assert!(m.params.is_empty());
    }

    #[test]
    fn missing_parameter_segment_does_not_match() {
        assert!(match_pattern("/view/question/:id", "/view/question/").is_none());
    }

    #[test]
    fn query_param_reads_values() {
        assert_eq!(
            query_param("/user/login?redirect=/", "redirect").as_deref(),
            Some("/")
        );
        assert_eq!(
            query_param("/update/question?id=7", "id").as_deref(),
            Some("7")
        );
        assert_eq!(query_param("/questions", "id"), None);
    }

    #[test]
    fn menu_hides_restricted_and_hidden_routes() {
        let paths = |role| {
            menu_routes(role)
                .iter()
                .map(|r| r.path)
                .collect::<Vec<_>>()
        };
        assert_eq!(paths(AccessLevel::NotLogin), vec!["/questions"]);
        assert_eq!(
            paths(AccessLevel::User),
            vec!["/", "/questions", "/question_suggest"]
        );
        assert_eq!(
            paths(AccessLevel::Admin),
            vec![
                "/",
                "/questions",
                "/question_suggest",
                "/add/question",
                "/manage/question/"
            ]
        );
    }
}
