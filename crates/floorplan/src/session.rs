//! The signed-in session, passed explicitly to whatever needs it.
//!
//! A [`SessionContext`] is built once when the host authenticates and is then
//! read-only. Nothing in this crate keeps a session of its own.

use serde::Deserialize;

use crate::unit::CompanyId;

/// Role of a company employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    Admin,
    Manager,
    Consultant,
    #[serde(other)]
    Other,
}

/// The employee signed in to an admin session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    id: u64,
    phone: String,
    full_name: String,
    #[serde(rename = "userType")]
    role: EmployeeRole,
    company_id: CompanyId,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EmployeeProfile {
    pub fn new(id: u64, full_name: impl Into<String>, role: EmployeeRole, company_id: CompanyId) -> Self {
        Self {
            id,
            phone: String::new(),
            full_name: full_name.into(),
            role,
            company_id,
            is_active: true,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name to show in headers, the phone number when no name is set.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.phone
        } else {
            &self.full_name
        }
    }

    pub fn role(&self) -> EmployeeRole {
        self.role
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Credentials and identity of the current visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    token: Option<String>,
    company_id: Option<CompanyId>,
    employee: Option<EmployeeProfile>,
    location: Option<String>,
}

impl SessionContext {
    /// An anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Company the visitor books on behalf of.
    pub fn with_company(mut self, company_id: CompanyId) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Attaches the employee profile. An employee's company becomes the
    /// session company unless one was already set.
    pub fn with_employee(mut self, employee: EmployeeProfile) -> Self {
        self.company_id.get_or_insert(employee.company_id());
        self.employee = Some(employee);
        self
    }

    /// Path of the page the visitor is on, used to return after signing in.
    pub fn with_location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// True when an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    pub fn employee(&self) -> Option<&EmployeeProfile> {
        self.employee.as_ref()
    }

    /// Current page path, `/` when unknown.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = SessionContext::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.company_id(), None);
        assert_eq!(session.location(), "/");
    }

    #[test]
    fn test_employee_supplies_company() {
        let employee =
            EmployeeProfile::new(3, "Айбек", EmployeeRole::Manager, CompanyId::new(12));
        let session = SessionContext::anonymous()
            .with_token("abc")
            .with_employee(employee);

        assert!(session.is_authenticated());
        assert_eq!(session.company_id(), Some(CompanyId::new(12)));
        assert_eq!(
            session.employee().map(EmployeeProfile::role),
            Some(EmployeeRole::Manager)
        );
    }

    #[test]
    fn test_explicit_company_wins_over_employee() {
        let employee = EmployeeProfile::new(3, "", EmployeeRole::Admin, CompanyId::new(12));
        let session = SessionContext::anonymous()
            .with_company(CompanyId::new(7))
            .with_employee(employee);
        assert_eq!(session.company_id(), Some(CompanyId::new(7)));
    }

    #[test]
    fn test_employee_profile_from_json() {
        let employee: EmployeeProfile = serde_json::from_str(
            r#"{"id":1,"phone":"+996555000111","fullName":"","userType":"CONSULTANT","companyId":4}"#,
        )
        .unwrap();

        assert_eq!(employee.role(), EmployeeRole::Consultant);
        assert_eq!(employee.display_name(), "+996555000111");
        assert!(employee.is_active());
    }
}
