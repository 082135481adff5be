use crate::component_tree::domain::Component;
use crate::ports::outbound::ComponentRepository;
use crate::shared::error::TreeError;
use crate::shared::Result;

/// ComponentFinder resolving the base component named by a request
pub struct ComponentFinder;

impl ComponentFinder {
    /// Finds a component by uuid or by key; exactly one must be given
    ///
    /// # Errors
    /// - Validation error if both or neither reference is given
    /// - NotFound if the referenced component does not exist
    pub fn get_by_uuid_or_key<R: ComponentRepository + ?Sized>(
        repository: &R,
        uuid: Option<&str>,
        key: Option<&str>,
    ) -> Result<Component> {
        match (uuid, key) {
            (Some(uuid), None) => repository
                .select_by_uuid(uuid)?
                .ok_or_else(|| {
                    TreeError::not_found(format!("Component id '{}' not found", uuid)).into()
                }),
            (None, Some(key)) => repository
                .select_by_key(key)?
                .ok_or_else(|| {
                    TreeError::not_found(format!("Component key '{}' not found", key)).into()
                }),
            _ => Err(TreeError::validation(
                "Either 'baseComponentId' or 'baseComponentKey' must be provided, not both",
            )
            .into()),
        }
    }
}
