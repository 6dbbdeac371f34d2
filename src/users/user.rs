use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    util::is_blank,
};

pub type UserId = i32;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Regular,
    Admin,
}

/// How an account proves its identity. Password login is only possible for
/// `password` accounts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, sqlx::Type, Serialize, Deserialize, ToSchema)]
#[sqlx(type_name = "auth_method", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Password,
    Sso,
}

/// Public profile of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "btdai@smu.edu.sg")]
    pub email: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub auth_method: AuthMethod,
    #[schema(example = "DAI Bing Tian")]
    pub name: Option<String>,
    #[schema(example = "smu/01")]
    pub link: Option<String>,
    #[serde(rename = "languageSpoken")]
    #[schema(example = "English, Chinese")]
    pub language_spoken: Option<String>,
    #[serde(rename = "selfIntro")]
    pub self_intro: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// What password login needs to know about an account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credentials {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub password_hash: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "divesh@comp.nus.edu.sg")]
    pub email: String,
    /// Defaults to `regular`
    #[serde(rename = "type", default)]
    pub role: Option<Role>,
    pub name: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "languageSpoken")]
    pub language_spoken: Option<String>,
    #[serde(rename = "selfIntro")]
    pub self_intro: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.email) {
            return err!(400, "email_required");
        }
        Ok(())
    }
}

/// Name and email must always be resupplied, the other profile fields keep
/// their previous values when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub link: Option<String>,
    #[serde(rename = "languageSpoken")]
    pub language_spoken: Option<String>,
    #[serde(rename = "selfIntro")]
    pub self_intro: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.name) || is_blank(&self.email) {
            return err!(400, "name_and_email_required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_user_reads_wire_names() {
        let user: NewUser = serde_json::from_value(json!({
            "email": "a@x.com",
            "type": "admin",
            "languageSpoken": "English",
            "selfIntro": "hi"
        }))
        .unwrap();

        assert_eq!(user.role, Some(Role::Admin));
        assert_eq!(user.language_spoken.as_deref(), Some("English"));
        assert_eq!(user.self_intro.as_deref(), Some("hi"));
        assert!(user.validate().is_ok());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_value::<NewUser>(json!({
            "email": "a@x.com",
            "type": "superuser"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_email_is_invalid() {
        let user: NewUser = serde_json::from_value(json!({ "email": "  " })).unwrap();
        assert_eq!(user.validate().unwrap_err().code, 400);
    }

    #[test]
    fn update_requires_name_and_email() {
        let update: UserUpdate =
            serde_json::from_value(json!({ "name": "", "email": "a@x.com" })).unwrap();
        assert_eq!(update.validate().unwrap_err().code, 400);
    }
}
