//! Sessions and the requests that create them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Organizer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Organizer => "organizer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Organizer => "Organizer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "organizer" => Ok(Role::Organizer),
            other => Err(format!("Unknown role '{other}'. Expected student or organizer")),
        }
    }
}

/// The signed-in user. Lives only as long as the front end process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub display_name: String,
    /// Email address; events are owned by this value.
    pub identity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identity: String,
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    pub fn new(identity: &str, password: &str, role: Role) -> Self {
        LoginRequest {
            identity: identity.trim().to_string(),
            password: password.trim().to_string(),
            role,
        }
    }
}

/// Account details for sign-up. The profile fields depend on the role and
/// are flattened next to a `role` tag on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub identity: String,
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub profile: SignupProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum SignupProfile {
    Student {
        name: String,
        #[serde(default)]
        age: String,
        #[serde(default)]
        gender: String,
        #[serde(default)]
        college: String,
    },
    Organizer {
        organization: String,
    },
}

impl SignupProfile {
    pub fn role(&self) -> Role {
        match self {
            SignupProfile::Student { .. } => Role::Student,
            SignupProfile::Organizer { .. } => Role::Organizer,
        }
    }

    fn trimmed(self) -> Self {
        match self {
            SignupProfile::Student {
                name,
                age,
                gender,
                college,
            } => SignupProfile::Student {
                name: name.trim().to_string(),
                age: age.trim().to_string(),
                gender: gender.trim().to_string(),
                college: college.trim().to_string(),
            },
            SignupProfile::Organizer { organization } => SignupProfile::Organizer {
                organization: organization.trim().to_string(),
            },
        }
    }
}

impl SignupRequest {
    pub fn trimmed(self) -> Self {
        SignupRequest {
            identity: self.identity.trim().to_string(),
            password: self.password.trim().to_string(),
            phone: self.phone.trim().to_string(),
            profile: self.profile.trimmed(),
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// The session this account signs in as: the student's name, else the
    /// organizer's organization, else the email.
    pub fn session(&self) -> Session {
        let (name, organization) = match &self.profile {
            SignupProfile::Student { name, .. } => (name.as_str(), None),
            SignupProfile::Organizer { organization } => {
                (organization.as_str(), Some(organization.clone()))
            }
        };

        let display_name = if name.is_empty() {
            self.identity.clone()
        } else {
            name.to_string()
        };

        Session {
            role: self.role(),
            display_name,
            identity: self.identity.clone(),
            organization: organization.filter(|o| !o.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signup_wire_format_is_flat() {
        let req = SignupRequest {
            identity: "org@x.com".into(),
            password: "pw".into(),
            phone: "555".into(),
            profile: SignupProfile::Organizer {
                organization: "Robotics Club".into(),
            },
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["role"], "organizer");
        assert_eq!(value["organization"], "Robotics Club");
        assert_eq!(value["identity"], "org@x.com");

        let back: SignupRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back.role(), Role::Organizer);
    }

    #[test]
    fn test_student_signup_parses() {
        let req: SignupRequest = serde_json::from_value(json!({
            "identity": "ana@uni.edu",
            "password": "secret",
            "role": "student",
            "name": "Ana",
            "college": "Engineering"
        }))
        .unwrap();

        assert_eq!(req.role(), Role::Student);
        assert_eq!(req.session().display_name, "Ana");
        assert_eq!(req.session().organization, None);
    }

    #[test]
    fn test_display_name_falls_back_to_identity() {
        let req = SignupRequest {
            identity: "anon@uni.edu".into(),
            password: "pw".into(),
            phone: String::new(),
            profile: SignupProfile::Student {
                name: String::new(),
                age: String::new(),
                gender: String::new(),
                college: String::new(),
            },
        };

        assert_eq!(req.session().display_name, "anon@uni.edu");
    }

    #[test]
    fn test_session_wire_names() {
        let session = Session {
            role: Role::Organizer,
            display_name: "Robotics Club".into(),
            identity: "org@x.com".into(),
            organization: Some("Robotics Club".into()),
        };

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["role"], "organizer");
        assert_eq!(value["displayName"], "Robotics Club");
    }
}
