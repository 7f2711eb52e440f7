use chrono::NaiveDateTime;
use kernel::model::{id::UserId, role::UserRole, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    Customer,
    Seller,
    Admin,
}

impl From<UserRole> for RoleName {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Customer => Self::Customer,
            UserRole::Seller => Self::Seller,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<RoleName> for UserRole {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Customer => Self::Customer,
            RoleName::Seller => Self::Seller,
            RoleName::Admin => Self::Admin,
        }
    }
}

/// Public projection of a user record. Field names are wire-stable; the
/// entity's credential-free guarantee carries over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: RoleName,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            phone,
            role,
            avatar_url,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            email,
            first_name,
            last_name,
            phone,
            role: RoleName::from(role),
            avatar_url,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new("u-1"),
            email: "a@b.c".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            phone: Some("+1".into()),
            role: UserRole::Customer,
            avatar_url: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn projection_copies_every_public_field() {
        let user = sample_user();
        let response = UserResponse::from(user.clone());

        assert_eq!(response.id, user.id);
        assert_eq!(response.email, user.email);
        assert_eq!(response.first_name, user.first_name);
        assert_eq!(response.last_name, user.last_name);
        assert_eq!(response.phone, user.phone);
        assert_eq!(response.role, RoleName::Customer);
        assert_eq!(response.avatar_url, user.avatar_url);
        assert_eq!(response.created_at, user.created_at);
        assert_eq!(response.updated_at, user.updated_at);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let response = UserResponse::from(sample_user());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "u-1",
                "email": "a@b.c",
                "firstName": "A",
                "lastName": "B",
                "phone": "+1",
                "role": "CUSTOMER",
                "avatarUrl": null,
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-02T00:00:00",
            })
        );
    }

    #[test]
    fn never_carries_credential_fields() {
        let response = UserResponse::from(sample_user());
        let value = serde_json::to_value(&response).unwrap();

        let keys = value.as_object().unwrap();
        for forbidden in ["password", "passwordHash", "secret"] {
            assert!(!keys.contains_key(forbidden));
        }
    }

    #[test]
    fn role_names_convert_both_ways() {
        for role in [UserRole::Customer, UserRole::Seller, UserRole::Admin] {
            assert_eq!(UserRole::from(RoleName::from(role)), role);
        }
    }
}
