use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::store::Record;

/// User record. Emails are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Yuka Matsumoto")]
    pub username: String,
    #[schema(example = "yuka@gmail.com")]
    pub email: String,
    /// Date string, stored as sent
    #[schema(example = "1990-09-16")]
    pub birthday: String,
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn fixtures() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "Yuka Matsumoto".to_string(),
            email: "yuka@gmail.com".to_string(),
            birthday: "1990-09-16".to_string(),
        },
        User {
            id: 2,
            username: "Takeru Matsumoto".to_string(),
            email: "takeru@gmail.com".to_string(),
            birthday: "2021-03-21".to_string(),
        },
    ]
}

/// Request body for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(required, length(min = 1))]
    #[schema(example = "Kuro Sasaki")]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "kuro@gmail.com")]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "1985-05-05")]
    pub birthday: Option<String>,
}

/// Request body for updating a user (PUT - empty or missing fields are left unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
}

impl UpdateUserDto {
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username.filter(|v| !v.is_empty()) {
            user.username = username;
        }
        if let Some(email) = self.email.filter(|v| !v.is_empty()) {
            user.email = email;
        }
        if let Some(birthday) = self.birthday.filter(|v| !v.is_empty()) {
            user.birthday = birthday;
        }
    }
}
