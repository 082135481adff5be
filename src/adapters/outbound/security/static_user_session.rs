use crate::ports::outbound::user_session::{roles, SYSTEM_ADMIN};
use crate::ports::outbound::UserSession;
use crate::shared::error::TreeError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// StaticUserSession adapter with permissions fixed at startup
///
/// Permissions come from the configuration file and the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticUserSession {
    system_admin: bool,
    /// Project uuid to granted roles
    project_roles: HashMap<String, HashSet<String>>,
}

impl StaticUserSession {
    /// Session without any permission
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_system_admin(mut self, system_admin: bool) -> Self {
        self.system_admin = self.system_admin || system_admin;
        self
    }

    /// Grants a role on a project
    ///
    /// # Errors
    /// Returns a validation error for a role other than `admin` or `user`
    pub fn grant(mut self, role: &str, project_uuid: &str) -> Result<Self> {
        if role != roles::ADMIN && role != roles::USER {
            return Err(TreeError::validation(format!(
                "Unknown project role '{}'. Expected '{}' or '{}'",
                role,
                roles::ADMIN,
                roles::USER
            ))
            .into());
        }
        if project_uuid.trim().is_empty() {
            return Err(TreeError::validation("Project uuid of a grant cannot be empty").into());
        }

        self.project_roles
            .entry(project_uuid.to_string())
            .or_default()
            .insert(role.to_string());
        Ok(self)
    }

    /// Grants each `ROLE:PROJECT_UUID` pair
    ///
    /// # Errors
    /// Returns a validation error for a malformed grant or an unknown role
    pub fn with_grants<I, S>(self, grants: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        grants.into_iter().try_fold(self, |session, grant| {
            let grant = grant.as_ref();
            let (role, project_uuid) = grant.split_once(':').ok_or_else(|| {
                TreeError::validation(format!(
                    "Invalid grant '{}'. Expected ROLE:PROJECT_UUID",
                    grant
                ))
            })?;
            session.grant(role.trim(), project_uuid.trim())
        })
    }
}

impl UserSession for StaticUserSession {
    fn has_global_permission(&self, permission: &str) -> bool {
        permission == SYSTEM_ADMIN && self.system_admin
    }

    fn has_project_permission_by_uuid(&self, role: &str, project_uuid: &str) -> bool {
        self.project_roles
            .get(project_uuid)
            .is_some_and(|roles| roles.contains(role))
    }
}
