use super::{RecipeField, RecipeView};

/// A parsed `(field, query)` pair that keeps or drops individual recipes.
///
/// Text fields match on case-insensitive substring. Numeric fields match
/// when their printed form equals the query exactly, so rating `4.5` matches
/// `"4.5"` but not `"4.50"`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFilter {
    field: RecipeField,
    query: String,
}

impl RecipeFilter {
    /// Returns `None` when no filtering should happen: a blank field or
    /// query, an unknown field name, or a field that cannot be filtered on.
    pub fn parse(search_by: &str, search_string: Option<&str>) -> Option<Self> {
        let query = search_string?;
        if search_by.trim().is_empty() || query.trim().is_empty() {
            return None;
        }
        let field = RecipeField::parse(search_by)?;
        if field == RecipeField::CreatedAt {
            return None;
        }
        Some(Self {
            field,
            query: query.to_string(),
        })
    }

    pub fn field(&self) -> RecipeField {
        self.field
    }

    pub fn matches<R: RecipeView>(&self, recipe: &R) -> bool {
        let q = self.query.as_str();
        match self.field {
            RecipeField::Name => contains_ignore_case(recipe.name(), q),
            RecipeField::Description => recipe
                .description()
                .is_some_and(|d| contains_ignore_case(d, q)),
            RecipeField::Author => contains_ignore_case(recipe.author(), q),
            RecipeField::Category => contains_ignore_case(recipe.category().label(), q),
            RecipeField::PreparationTime => {
                recipe.preparation_time() >= 1 && recipe.preparation_time().to_string() == q
            }
            RecipeField::Servings => recipe.servings() >= 1 && recipe.servings().to_string() == q,
            RecipeField::Rating => recipe.rating().to_string() == q,
            RecipeField::RecipeIngredients => recipe
                .ingredient_names()
                .into_iter()
                .any(|name| contains_ignore_case(name, q)),
            RecipeField::CreatedAt => true,
        }
    }
}

/// Keeps the recipes matching `search_string` on `search_by`, in input order.
/// Degenerate input returns the list unchanged.
pub fn filter_recipes<R: RecipeView>(
    recipes: Vec<R>,
    search_by: &str,
    search_string: Option<&str>,
) -> Vec<R> {
    match RecipeFilter::parse(search_by, search_string) {
        Some(filter) => recipes.into_iter().filter(|r| filter.matches(r)).collect(),
        None => recipes,
    }
}

/// An empty haystack never matches.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}
