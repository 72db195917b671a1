mod nutrition;
mod recipe;
mod timestamp;
mod tips;

pub use self::nutrition::{NutritionValues, NutritionalInfo};
pub use self::recipe::{ImageGeneration, Recipe, RecipeSource, Servings};
pub use self::timestamp::{DateValue, Timestamp};
pub use self::tips::RecipeTips;
