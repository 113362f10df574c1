//! Registration form state, the validated profile, and its wire format. The
//! profile carries the password, so it is kept behind `SecretString` and only
//! exposed while the request body is serialized.

use crate::features::auth::types::Role;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Branch codes accepted by the directory.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    CSE,
    IT,
    ECE,
    EEE,
    EE,
    ME,
    CE,
    CHE,
    MCA,
    MBA,
}

impl Branch {
    pub const ALL: [Branch; 10] = [
        Branch::CSE,
        Branch::IT,
        Branch::ECE,
        Branch::EEE,
        Branch::EE,
        Branch::ME,
        Branch::CE,
        Branch::CHE,
        Branch::MCA,
        Branch::MBA,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Branch::CSE => "CSE",
            Branch::IT => "IT",
            Branch::ECE => "ECE",
            Branch::EEE => "EEE",
            Branch::EE => "EE",
            Branch::ME => "ME",
            Branch::CE => "CE",
            Branch::CHE => "CHE",
            Branch::MCA => "MCA",
            Branch::MBA => "MBA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::CSE => "Computer Science & Engineering",
            Branch::IT => "Information Technology",
            Branch::ECE => "Electronics & Communication Engineering",
            Branch::EEE => "Electrical & Electronics Engineering",
            Branch::EE => "Electrical Engineering",
            Branch::ME => "Mechanical Engineering",
            Branch::CE => "Civil Engineering",
            Branch::CHE => "Chemical Engineering",
            Branch::MCA => "Master of Computer Applications",
            Branch::MBA => "Master of Business Administration",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|branch| branch.code().eq_ignore_ascii_case(code))
    }
}

/// How a registration field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Email,
    Tel,
    Number,
    Password,
    BranchSelect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    FullName,
    GradYear,
    Branch,
    Email,
    Mobile,
    Organisation,
    Designation,
    Password,
    Location,
}

impl RegistrationField {
    /// Render order of the form.
    pub const ALL: [RegistrationField; 9] = [
        RegistrationField::FullName,
        RegistrationField::GradYear,
        RegistrationField::Branch,
        RegistrationField::Email,
        RegistrationField::Mobile,
        RegistrationField::Organisation,
        RegistrationField::Designation,
        RegistrationField::Password,
        RegistrationField::Location,
    ];

    /// DOM id, matching the JSON key.
    pub fn id(self) -> &'static str {
        match self {
            RegistrationField::FullName => "fullName",
            RegistrationField::GradYear => "gradYear",
            RegistrationField::Branch => "branch",
            RegistrationField::Email => "email",
            RegistrationField::Mobile => "mobile",
            RegistrationField::Organisation => "organisation",
            RegistrationField::Designation => "designation",
            RegistrationField::Password => "password",
            RegistrationField::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::FullName => "Full name",
            RegistrationField::GradYear => "Graduation year",
            RegistrationField::Branch => "Branch",
            RegistrationField::Email => "Email",
            RegistrationField::Mobile => "Mobile number",
            RegistrationField::Organisation => "Organisation",
            RegistrationField::Designation => "Designation",
            RegistrationField::Password => "Password",
            RegistrationField::Location => "Current location",
        }
    }

    pub fn input(self) -> FieldInput {
        match self {
            RegistrationField::GradYear => FieldInput::Number,
            RegistrationField::Branch => FieldInput::BranchSelect,
            RegistrationField::Email => FieldInput::Email,
            RegistrationField::Mobile => FieldInput::Tel,
            RegistrationField::Password => FieldInput::Password,
            _ => FieldInput::Text,
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            RegistrationField::FullName => "name",
            RegistrationField::Email => "email",
            RegistrationField::Mobile => "tel-national",
            RegistrationField::Organisation => "organization",
            RegistrationField::Designation => "organization-title",
            RegistrationField::Password => "new-password",
            RegistrationField::Location => "address-level2",
            RegistrationField::GradYear | RegistrationField::Branch => "off",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RegistrationField::FullName => "Jane Doe",
            RegistrationField::GradYear => "2015",
            RegistrationField::Email => "name@college.edu",
            RegistrationField::Mobile => "9876543210",
            RegistrationField::Organisation => "Company or institution",
            RegistrationField::Designation => "Current role",
            RegistrationField::Location => "City, Country",
            RegistrationField::Branch | RegistrationField::Password => "",
        }
    }
}

/// Raw registration form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub grad_year: String,
    pub branch: String,
    pub email: String,
    pub mobile: String,
    pub organisation: String,
    pub designation: String,
    pub password: String,
    pub location: String,
}

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::GradYear => &self.grad_year,
            RegistrationField::Branch => &self.branch,
            RegistrationField::Email => &self.email,
            RegistrationField::Mobile => &self.mobile,
            RegistrationField::Organisation => &self.organisation,
            RegistrationField::Designation => &self.designation,
            RegistrationField::Password => &self.password,
            RegistrationField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::GradYear => &mut self.grad_year,
            RegistrationField::Branch => &mut self.branch,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Mobile => &mut self.mobile,
            RegistrationField::Organisation => &mut self.organisation,
            RegistrationField::Designation => &mut self.designation,
            RegistrationField::Password => &mut self.password,
            RegistrationField::Location => &mut self.location,
        };
        *slot = value;
    }
}

/// A validated registration, ready to be posted.
#[derive(Debug)]
pub struct RegistrationProfile {
    pub full_name: String,
    pub grad_year: u16,
    pub branch: Branch,
    pub email: String,
    pub mobile: String,
    pub organisation: String,
    pub designation: String,
    pub password: SecretString,
    pub role: Role,
    pub proof_picture: String,
    pub location: String,
}

/// JSON body of `POST /api/auth`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest<'a> {
    full_name: &'a str,
    grad_year: u16,
    branch: Branch,
    email: &'a str,
    mobile: &'a str,
    organisation: &'a str,
    designation: &'a str,
    password: &'a str,
    role: Role,
    proof_picture: &'a str,
    location: &'a str,
}

impl<'a> RegistrationRequest<'a> {
    pub fn new(profile: &'a RegistrationProfile) -> Self {
        Self {
            full_name: &profile.full_name,
            grad_year: profile.grad_year,
            branch: profile.branch,
            email: &profile.email,
            mobile: &profile.mobile,
            organisation: &profile.organisation,
            designation: &profile.designation,
            password: profile.password.expose_secret(),
            role: profile.role,
            proof_picture: &profile.proof_picture,
            location: &profile.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn branch_codes_round_trip_case_insensitively() {
        for branch in Branch::ALL {
            assert_eq!(Branch::from_code(branch.code()), Some(branch));
        }
        assert_eq!(Branch::from_code(" cse "), Some(Branch::CSE));
        assert_eq!(Branch::from_code("ARTS"), None);
        assert_eq!(Branch::from_code(""), None);
    }

    #[test]
    fn form_get_set_covers_every_field() {
        let mut form = RegistrationForm::default();
        for field in RegistrationField::ALL {
            form.set(field, field.id().to_string());
        }
        for field in RegistrationField::ALL {
            assert_eq!(form.get(field), field.id());
        }
    }

    #[test]
    fn request_uses_camel_case_keys() -> Result<()> {
        let profile = RegistrationProfile {
            full_name: "Jane Doe".to_string(),
            grad_year: 2015,
            branch: Branch::ECE,
            email: "jane@college.edu".to_string(),
            mobile: "9876543210".to_string(),
            organisation: "Acme".to_string(),
            designation: "Engineer".to_string(),
            password: SecretString::from("correct horse".to_string()),
            role: Role::Alumni,
            proof_picture: "https://utfs.io/f/proof.pdf".to_string(),
            location: "Pune".to_string(),
        };

        assert_eq!(
            serde_json::to_value(RegistrationRequest::new(&profile))?,
            json!({
                "fullName": "Jane Doe",
                "gradYear": 2015,
                "branch": "ECE",
                "email": "jane@college.edu",
                "mobile": "9876543210",
                "organisation": "Acme",
                "designation": "Engineer",
                "password": "correct horse",
                "role": "alumni",
                "proofPicture": "https://utfs.io/f/proof.pdf",
                "location": "Pune"
            })
        );
        assert!(!format!("{profile:?}").contains("correct horse"));
        Ok(())
    }
}
