//! User form: credentials, profile and guardian on one screen.
//!
//! The same model backs the full create/edit page and the separate profile
//! and credentials tabs of the detail view. Address selections live in an
//! [`AddressPair`](crate::AddressPair); only the street texts are bound here.

use api::models::{
    Address, AddressPayload, CredentialsPayload, Gender, GuardianPayload, ProfilePayload, User,
    UserPayload,
};
use validator::Validate;

use super::{check, format_date, optional, parse_date, FieldErrors};

const MIN_PASSWORD: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct UserForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    pub password: String,
    pub is_active: bool,
    #[validate(length(min = 1, message = "Choose at least one role"))]
    pub role_ids: Vec<String>,

    #[validate(length(min = 1, max = 150, message = "Full name is required"))]
    pub full_name: String,
    pub nickname: String,
    pub gender: String,
    pub birth_place: String,
    pub birth_date: String,
    pub religion: String,
    pub phone: String,
    pub entry_date: String,
    pub bed_room_id: String,
    pub street: String,

    pub guardian_name: String,
    pub guardian_relationship: String,
    pub guardian_phone: String,
    pub guardian_occupation: String,
    pub guardian_street: String,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            gender: Gender::Male.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn from_user(user: &User) -> Self {
        let mut form = Self {
            email: user.credentials.email.clone(),
            username: user.credentials.username.clone(),
            is_active: user.credentials.is_active,
            role_ids: user.credentials.roles.iter().map(|r| r.id.clone()).collect(),
            ..Self::new()
        };
        let Some(profile) = &user.profile else {
            return form;
        };
        form.full_name = profile.full_name.clone();
        form.nickname = profile.nickname.clone().unwrap_or_default();
        form.gender = profile.gender.as_str().to_string();
        form.birth_place = profile.birth_place.clone().unwrap_or_default();
        form.birth_date = format_date(profile.birth_date);
        form.religion = profile.religion.clone().unwrap_or_default();
        form.phone = profile.phone.clone().unwrap_or_default();
        form.entry_date = format_date(profile.entry_date);
        form.bed_room_id = profile
            .bed_room
            .as_ref()
            .map(|b| b.id.clone())
            .unwrap_or_default();
        form.street = profile
            .address
            .as_ref()
            .map(|a| a.street.clone())
            .unwrap_or_default();
        if let Some(guardian) = &profile.guardian {
            form.guardian_name = guardian.name.clone();
            form.guardian_relationship = guardian.relationship.clone();
            form.guardian_phone = guardian.phone.clone().unwrap_or_default();
            form.guardian_occupation = guardian.occupation.clone().unwrap_or_default();
            form.guardian_street = guardian
                .address
                .as_ref()
                .map(|a| a.street.clone())
                .unwrap_or_default();
        }
        form
    }

    /// Body for creating or fully updating a user.
    pub fn to_payload(
        &self,
        is_new: bool,
        address: &Address,
        guardian_address: &Address,
    ) -> Result<UserPayload, FieldErrors> {
        let mut errors = check(self);
        let credentials = self.credentials(is_new, &mut errors);
        let profile = self.profile(address, guardian_address, &mut errors);
        errors.into_result(UserPayload {
            credentials,
            profile: Some(profile),
        })
    }

    /// Credentials tab. A blank password keeps the current one.
    pub fn to_credentials(&self) -> Result<CredentialsPayload, FieldErrors> {
        let rules = check(self);
        let mut errors = FieldErrors::new();
        for field in ["email", "username", "role_ids"] {
            if let Some(message) = rules.get(field) {
                errors.insert(field, message);
            }
        }
        let credentials = self.credentials(false, &mut errors);
        errors.into_result(credentials)
    }

    /// Profile tab.
    pub fn to_profile(
        &self,
        address: &Address,
        guardian_address: &Address,
    ) -> Result<ProfilePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(message) = check(self).get("full_name") {
            errors.insert("full_name", message);
        }
        let profile = self.profile(address, guardian_address, &mut errors);
        errors.into_result(profile)
    }

    fn credentials(&self, is_new: bool, errors: &mut FieldErrors) -> CredentialsPayload {
        let password = optional(&self.password);
        match &password {
            None if is_new => errors.insert("password", "Password is required"),
            Some(p) if p.chars().count() < MIN_PASSWORD => errors.insert(
                "password",
                format!("Password must be at least {MIN_PASSWORD} characters"),
            ),
            _ => {}
        }
        CredentialsPayload {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password,
            is_active: self.is_active,
            role_ids: self.role_ids.clone(),
        }
    }

    fn profile(
        &self,
        address: &Address,
        guardian_address: &Address,
        errors: &mut FieldErrors,
    ) -> ProfilePayload {
        let gender = Gender::parse(&self.gender).unwrap_or_else(|| {
            errors.insert("gender", "Choose a gender");
            Gender::default()
        });
        let birth_date = parse_date(errors, "birth_date", &self.birth_date);
        let entry_date = parse_date(errors, "entry_date", &self.entry_date);

        let guardian = optional(&self.guardian_name).map(|name| {
            if self.guardian_relationship.trim().is_empty() {
                errors.insert("guardian_relationship", "Relationship is required");
            }
            GuardianPayload {
                name,
                relationship: self.guardian_relationship.trim().to_string(),
                phone: optional(&self.guardian_phone),
                occupation: optional(&self.guardian_occupation),
                address: Some(AddressPayload::from(guardian_address)),
            }
        });

        ProfilePayload {
            full_name: self.full_name.trim().to_string(),
            nickname: optional(&self.nickname),
            gender,
            birth_place: optional(&self.birth_place),
            birth_date,
            religion: optional(&self.religion),
            phone: optional(&self.phone),
            entry_date,
            bed_room_id: optional(&self.bed_room_id),
            address: Some(AddressPayload::from(address)),
            guardian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{Region, RegionLevel};
    use crate::address::{AddressPair, Side};

    fn valid() -> UserForm {
        UserForm {
            email: "sari@panti.id".to_string(),
            username: "sari".to_string(),
            password: "rahasia123".to_string(),
            role_ids: vec!["child".to_string()],
            full_name: "Sari Wulandari".to_string(),
            birth_date: "2014-05-02".to_string(),
            guardian_name: "Budi".to_string(),
            guardian_relationship: "Uncle".to_string(),
            ..UserForm::new()
        }
    }

    #[test]
    fn test_new_user_payload() {
        let address = Address {
            street: "Jl. Kenanga 1".to_string(),
            ..Address::default()
        };
        let payload = valid().to_payload(true, &address, &address).unwrap();
        assert_eq!(payload.credentials.password.as_deref(), Some("rahasia123"));
        let profile = payload.profile.unwrap();
        assert_eq!(profile.birth_date.unwrap().to_string(), "2014-05-02");
        assert_eq!(profile.guardian.unwrap().address.unwrap().street, "Jl. Kenanga 1");
    }

    #[test]
    fn test_new_user_requires_password() {
        let form = UserForm {
            password: String::new(),
            ..valid()
        };
        let errors = form
            .to_payload(true, &Address::default(), &Address::default())
            .unwrap_err();
        assert_eq!(errors.get("password"), Some("Password is required"));

        // Editing keeps the stored password
        assert!(form
            .to_payload(false, &Address::default(), &Address::default())
            .is_ok());
    }

    #[test]
    fn test_field_rules() {
        let form = UserForm {
            email: "not-an-email".to_string(),
            username: "ab".to_string(),
            role_ids: Vec::new(),
            password: "short".to_string(),
            birth_date: "02/05/2014".to_string(),
            guardian_relationship: String::new(),
            ..valid()
        };
        let errors = form
            .to_payload(true, &Address::default(), &Address::default())
            .unwrap_err();
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert!(errors.get("username").is_some());
        assert_eq!(errors.get("role_ids"), Some("Choose at least one role"));
        assert!(errors.get("password").unwrap().contains("at least 8"));
        assert_eq!(errors.get("birth_date"), Some("Enter a valid date"));
        assert_eq!(errors.get("guardian_relationship"), Some("Relationship is required"));
    }

    #[test]
    fn test_mirrored_guardian_address_matches_child() {
        let mut pair = AddressPair::new();
        pair.set_mirror(true);
        pair.select(
            Side::Primary,
            RegionLevel::Province,
            Some(Region {
                id: "32".to_string(),
                name: "Jawa Barat".to_string(),
            }),
        );
        let (child, guardian) = pair.addresses("Jl. Mawar 9", "");
        let payload = valid().to_payload(true, &child, &guardian).unwrap();
        let profile = payload.profile.unwrap();
        assert_eq!(profile.address, profile.guardian.unwrap().address);
    }

    #[test]
    fn test_round_trip_from_user() {
        let form = valid();
        let payload = form.to_payload(true, &Address::default(), &Address::default()).unwrap();
        let json = serde_json::json!({
            "id": "u1",
            "email": payload.credentials.email,
            "username": payload.credentials.username,
            "isActive": true,
            "roles": [{"id": "child", "name": "Child"}],
            "profile": {"fullName": "Sari Wulandari", "gender": "female", "birthDate": "2014-05-02"}
        });
        let user: User = serde_json::from_value(json).unwrap();
        let restored = UserForm::from_user(&user);
        assert_eq!(restored.full_name, "Sari Wulandari");
        assert_eq!(restored.gender, "female");
        assert_eq!(restored.birth_date, "2014-05-02");
        assert_eq!(restored.role_ids, vec!["child".to_string()]);
        assert!(restored.password.is_empty());
    }

    #[test]
    fn test_credentials_tab_ignores_profile_fields() {
        let form = UserForm {
            full_name: String::new(),
            password: String::new(),
            ..valid()
        };
        let credentials = form.to_credentials().unwrap();
        assert_eq!(credentials.password, None);
        assert!(form.to_profile(&Address::default(), &Address::default()).is_err());
    }
}
