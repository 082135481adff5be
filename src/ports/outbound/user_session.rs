/// Global permission granting administration of the whole system
pub const SYSTEM_ADMIN: &str = "admin";

/// Project roles
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

/// UserSession port exposing the caller's permissions
///
/// Permission evaluation itself happens outside of this crate;
/// the application only asks yes/no questions.
pub trait UserSession {
    /// Whether the caller holds a global permission
    fn has_global_permission(&self, permission: &str) -> bool;

    /// Whether the caller holds a role on the project with the given uuid
    fn has_project_permission_by_uuid(&self, role: &str, project_uuid: &str) -> bool;
}
