use serde::{Deserialize, Serialize};

/// Role string the backend answers for a session it does not recognize.
pub const ROLE_NOT_LOGIN: &str = "notLogin";

/// Session identity returned by `/api/user/get/login`.
///
/// Every field is optional: the backend omits what a given session is not
/// entitled to see, and a brand-new session has nothing populated at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: Option<i64>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    pub user_role: Option<String>,
}

impl LoginUser {
    /// Identity of a session the backend does not recognize. The role is
    /// populated so readers can tell "known to be logged out" apart from
    /// "not fetched yet".
    pub fn not_login() -> Self {
        Self {
            user_role: Some(ROLE_NOT_LOGIN.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginRequest {
    pub user_account: String,
    pub user_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterRequest {
    pub user_account: String,
    pub user_password: String,
    pub check_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_user_parses_camel_case_wire_form() {
        let user: LoginUser = serde_json::from_str(
            r#"{"id":1,"userName":"alice","userAvatar":null,"userRole":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.user_name.as_deref(), Some("alice"));
        assert_eq!(user.user_role.as_deref(), Some("admin"));
        assert_eq!(user.user_profile, None);
    }

    #[test]
    fn not_login_has_a_known_role() {
        assert_eq!(
            LoginUser::not_login().user_role.as_deref(),
            Some(ROLE_NOT_LOGIN)
        );
    }

    #[test]
    fn login_request_serializes_camel_case() {
        let body = serde_json::to_string(&UserLoginRequest {
            user_account: "alice".into(),
            user_password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"userAccount":"alice","userPassword":"secret"}"#);
    }
}
