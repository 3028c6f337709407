use crate::application::http::{
    diet::router::DietApiDoc, ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc,
    shopping::router::ShoppingApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/shopping-list", api = ShoppingApiDoc),
        (path = "/diets", api = DietApiDoc),
    )
)]
pub struct ApiDoc;
