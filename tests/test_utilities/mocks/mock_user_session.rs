use component_tree::prelude::*;
use std::collections::HashSet;

/// Mock UserSession with explicit permissions
#[derive(Default, Clone)]
pub struct MockUserSession {
    global: HashSet<String>,
    project: HashSet<(String, String)>,
}

#[allow(dead_code)]
impl MockUserSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn system_admin() -> Self {
        Self::default().with_global_permission("admin")
    }

    /// Browse rights on a single project
    pub fn project_user(project_uuid: &str) -> Self {
        Self::default().with_project_role("user", project_uuid)
    }

    pub fn with_global_permission(mut self, permission: &str) -> Self {
        self.global.insert(permission.to_string());
        self
    }

    pub fn with_project_role(mut self, role: &str, project_uuid: &str) -> Self {
        self.project
            .insert((role.to_string(), project_uuid.to_string()));
        self
    }
}

impl UserSession for MockUserSession {
    fn has_global_permission(&self, permission: &str) -> bool {
        self.global.contains(permission)
    }

    fn has_project_permission_by_uuid(&self, role: &str, project_uuid: &str) -> bool {
        self.project
            .contains(&(role.to_string(), project_uuid.to_string()))
    }
}
