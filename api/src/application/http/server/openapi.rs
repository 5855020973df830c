use crate::application::http::{
    family::router::FamilyApiDoc, health::router::HealthApiDoc, menu::router::MenuApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menuforge API"
    ),
    nest(
        (path = "/family", api = FamilyApiDoc),
        (path = "/menus", api = MenuApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
