//! # Users, their credentials and profiles
//!
//! A [`User`] is the account (credentials) plus an optional [`Profile`] with the
//! demographic record of the child or caretaker. The profile optionally carries
//! an [`Address`], an assigned [`BedRoom`](super::BedRoom) reference and a
//! [`Guardian`].
//!
//! The `*Payload` types are the bodies sent on create and update; the server
//! resolves region and lookup ids into full references.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::lookup::TypeRef;

/// A role granted to an account (`admin`, `caretaker`, `child`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
}

/// Account credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Guardian of a child.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Demographic record attached to a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub bed_room: Option<TypeRef>,
    #[serde(default)]
    pub guardian: Option<Guardian>,
}

/// A user account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl User {
    /// Full name from the profile, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.full_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.credentials.username)
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.credentials
            .roles
            .iter()
            .any(|r| r.name.eq_ignore_ascii_case(name))
    }

    pub fn role_names(&self) -> String {
        self.credentials
            .roles
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Address body: street plus region ids.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub street: String,
    pub province_id: Option<String>,
    pub regency_id: Option<String>,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
}

impl From<&Address> for AddressPayload {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            province_id: address.province.as_ref().map(|r| r.id.clone()),
            regency_id: address.regency.as_ref().map(|r| r.id.clone()),
            district_id: address.district.as_ref().map(|r| r.id.clone()),
            village_id: address.village.as_ref().map(|r| r.id.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianPayload {
    pub name: String,
    pub relationship: String,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<AddressPayload>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub full_name: String,
    pub nickname: Option<String>,
    pub gender: Gender,
    pub birth_place: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub religion: Option<String>,
    pub phone: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub bed_room_id: Option<String>,
    pub address: Option<AddressPayload>,
    pub guardian: Option<GuardianPayload>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsPayload {
    pub email: String,
    pub username: String,
    /// Omitted on update to keep the current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub is_active: bool,
    pub role_ids: Vec<String>,
}

/// Body for creating or fully updating a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(flatten)]
    pub credentials: CredentialsPayload,
    pub profile: Option<ProfilePayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_with_flattened_credentials() {
        let json = r#"{
            "id": "u1",
            "email": "sari@panti.id",
            "username": "sari",
            "isActive": true,
            "roles": [{"id": "r2", "name": "child"}],
            "profile": {
                "fullName": "Sari Wulandari",
                "gender": "female",
                "birthDate": "2014-03-09",
                "bedRoom": {"id": "b1", "name": "Melati"}
            }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.credentials.username, "sari");
        assert!(user.credentials.is_active);
        assert!(user.has_role("Child"));
        let profile = user.profile.as_ref().unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(2014, 3, 9));
        assert_eq!(profile.bed_room.as_ref().unwrap().name, "Melati");
        assert_eq!(user.display_name(), "Sari Wulandari");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User {
            id: "u2".to_string(),
            credentials: Credentials {
                username: "budi".to_string(),
                ..Credentials::default()
            },
            profile: None,
        };
        assert_eq!(user.display_name(), "budi");
    }

    #[test]
    fn test_payload_omits_missing_password() {
        let payload = UserPayload {
            credentials: CredentialsPayload {
                email: "a@b.c".to_string(),
                username: "a".to_string(),
                password: None,
                is_active: true,
                role_ids: vec!["r1".to_string()],
            },
            profile: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["roleIds"][0], "r1");
        assert_eq!(value["isActive"], true);
    }
}
