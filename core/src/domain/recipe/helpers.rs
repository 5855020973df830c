use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    recipe::entities::Recipe,
};

pub const MAX_RECIPE_PAGE_LIMIT: u32 = 100;

/// Generated recipes have no owner, so only hand-authored ones can pass.
pub fn ensure_recipe_owner(recipe: &Recipe, identity: &Identity) -> Result<(), CoreError> {
    if !recipe.is_owned_by(identity.id()) {
        return Err(CoreError::Forbidden("Not the recipe owner".to_string()));
    }
    Ok(())
}
