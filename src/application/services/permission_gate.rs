use crate::component_tree::domain::Component;
use crate::ports::outbound::user_session::{roles, SYSTEM_ADMIN};
use crate::ports::outbound::UserSession;
use crate::shared::error::TreeError;
use crate::shared::Result;

/// PermissionGate authorizing the caller against a base component
pub struct PermissionGate;

impl PermissionGate {
    /// Checks that the caller may browse the component's project
    ///
    /// Passes for system administrators, project administrators and
    /// project users.
    ///
    /// # Errors
    /// `TreeError::InsufficientPrivileges` otherwise
    pub fn check<U: UserSession + ?Sized>(user_session: &U, component: &Component) -> Result<()> {
        let project_uuid = component.effective_project_uuid();
        if user_session.has_global_permission(SYSTEM_ADMIN)
            || user_session.has_project_permission_by_uuid(roles::ADMIN, project_uuid)
            || user_session.has_project_permission_by_uuid(roles::USER, project_uuid)
        {
            return Ok(());
        }

        Err(TreeError::InsufficientPrivileges.into())
    }
}
