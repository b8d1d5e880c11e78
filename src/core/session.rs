//! Session and page navigation.
//!
//! The session is the only state that outlives a page: the current page id
//! and the authenticated role. Page state itself is remounted fresh on
//! every navigation.

use tracing::info;

use crate::error::AppError;
use crate::models::{Page, Role};

#[derive(Debug, Clone)]
pub struct Session {
    page: Page,
    role: Option<Role>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            page: Page::Login,
            role: None,
        }
    }
}

impl Session {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Complete a sign-in: store the role and route to its dashboard.
    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
        self.page = match role {
            Role::Doctor => Page::DoctorDashboard,
            Role::Patient => Page::PatientDashboard,
        };
        info!(%role, page = %self.page, "session established");
    }

    /// Drop the role and return to the login page.
    pub fn logout(&mut self) {
        info!("session ended");
        self.role = None;
        self.page = Page::Login;
    }

    /// Switch pages. Pages beyond login/signup require an authenticated
    /// role, and the role-specific pages require the matching role; a
    /// refused navigation leaves the session where it was.
    pub fn navigate(&mut self, page: Page) -> Result<(), AppError> {
        match page {
            Page::Login | Page::Signup => {
                self.page = page;
                Ok(())
            }
            _ => {
                let role = self.role.ok_or(AppError::Unauthenticated { page })?;
                let allowed = match page {
                    Page::DoctorDashboard => role == Role::Doctor,
                    Page::PatientDashboard | Page::Screening => role == Role::Patient,
                    _ => true,
                };
                if !allowed {
                    return Err(AppError::WrongRole { page, role });
                }
                self.page = page;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_routes_by_role() {
        let mut session = Session::default();
        session.login(Role::Doctor);
        assert_eq!(session.page(), Page::DoctorDashboard);

        let mut session = Session::default();
        session.login(Role::Patient);
        assert_eq!(session.page(), Page::PatientDashboard);
    }

    #[test]
    fn logout_resets_to_login() {
        let mut session = Session::default();
        session.login(Role::Patient);
        session.logout();
        assert_eq!(session.page(), Page::Login);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn unauthenticated_navigation_is_refused() {
        let mut session = Session::default();
        assert!(session.navigate(Page::Appointments).is_err());
        assert_eq!(session.page(), Page::Login);

        // The public pages stay reachable.
        assert!(session.navigate(Page::Signup).is_ok());
        assert_eq!(session.page(), Page::Signup);
    }

    #[test]
    fn role_specific_pages_require_the_matching_role() {
        let mut session = Session::default();
        session.login(Role::Doctor);
        assert!(session.navigate(Page::Screening).is_err());
        assert!(session.navigate(Page::PatientDashboard).is_err());
        assert!(session.navigate(Page::Appointments).is_ok());

        let mut session = Session::default();
        session.login(Role::Patient);
        assert!(session.navigate(Page::DoctorDashboard).is_err());
        assert!(session.navigate(Page::Screening).is_ok());
    }
}
