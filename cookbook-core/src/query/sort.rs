use std::cmp::Ordering;

use super::{RecipeField, RecipeView};

/// Orders `recipes` by `sort_by`.
///
/// Text fields compare case-insensitively; the rest use their natural order.
/// An empty or unknown field returns the input untouched. The sort is stable
/// in both directions: recipes with equal keys keep their input order.
pub fn sort_recipes<R: RecipeView>(mut recipes: Vec<R>, sort_by: &str, ascending: bool) -> Vec<R> {
    let Some(field) = RecipeField::parse(sort_by) else {
        return recipes;
    };
    if field == RecipeField::RecipeIngredients {
        return recipes;
    }

    recipes.sort_by(|a, b| {
        let ord = compare(field, a, b);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    recipes
}

fn compare<R: RecipeView>(field: RecipeField, a: &R, b: &R) -> Ordering {
    match field {
        RecipeField::Name => compare_ignore_case(a.name(), b.name()),
        RecipeField::Description => match (a.description(), b.description()) {
            (Some(x), Some(y)) => compare_ignore_case(x, y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        },
        RecipeField::Author => compare_ignore_case(a.author(), b.author()),
        RecipeField::Category => a.category().cmp(&b.category()),
        RecipeField::PreparationTime => a.preparation_time().cmp(&b.preparation_time()),
        RecipeField::Servings => a.servings().cmp(&b.servings()),
        RecipeField::Rating => a.rating().total_cmp(&b.rating()),
        RecipeField::CreatedAt => a.created_at().cmp(&b.created_at()),
        RecipeField::RecipeIngredients => Ordering::Equal,
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{names, recipe};
    use crate::types::{Category, Recipe};
    use chrono::Duration;

    fn authors(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.author.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("Naleśniki", "Jan Kowalski", Category::Breakfast),
            recipe("Zupa krem z dyni", "anna Nowak", Category::Soups),
            recipe("Brownie", "Piotr Wiśniewski", Category::PastriesAndDesserts),
        ]
    }

    #[test]
    fn test_author_ascending_ignores_case() {
        let out = sort_recipes(sample(), "Author", true);
        assert_eq!(
            authors(&out),
            vec!["anna Nowak", "Jan Kowalski", "Piotr Wiśniewski"]
        );
    }

    #[test]
    fn test_author_descending() {
        let out = sort_recipes(sample(), "Author", false);
        assert_eq!(
            authors(&out),
            vec!["Piotr Wiśniewski", "Jan Kowalski", "anna Nowak"]
        );
    }

    #[test]
    fn test_unknown_or_empty_field_keeps_order() {
        for field in ["", "Calories", "RecipeIngredients", "name "] {
            let out = sort_recipes(sample(), field, true);
            assert_eq!(names(&out), vec!["Naleśniki", "Zupa krem z dyni", "Brownie"]);
        }
    }

    #[test]
    fn test_category_uses_declaration_order() {
        let out = sort_recipes(sample(), "Category", false);
        assert_eq!(names(&out), vec!["Brownie", "Zupa krem z dyni", "Naleśniki"]);
    }

    #[test]
    fn test_missing_description_sorts_first() {
        let mut recipes = sample();
        recipes[0].description = Some("b".to_string());
        recipes[2].description = Some("A".to_string());
        let out = sort_recipes(recipes, "Description", true);
        assert_eq!(names(&out), vec!["Zupa krem z dyni", "Brownie", "Naleśniki"]);
    }

    #[test]
    fn test_numeric_fields() {
        let mut recipes = sample();
        recipes[0].rating = 4.9;
        recipes[1].rating = 3.5;
        recipes[2].rating = 4.1;
        let out = sort_recipes(recipes, "Rating", true);
        assert_eq!(names(&out), vec!["Zupa krem z dyni", "Brownie", "Naleśniki"]);

        let mut recipes = sample();
        recipes[0].servings = 6;
        recipes[1].servings = 1;
        recipes[2].servings = 3;
        let out = sort_recipes(recipes, "servings", false);
        assert_eq!(names(&out), vec!["Naleśniki", "Brownie", "Zupa krem z dyni"]);
    }

    #[test]
    fn test_created_at() {
        let mut recipes = sample();
        let base = recipes[0].created_at;
        recipes[0].created_at = base + Duration::minutes(30);
        recipes[1].created_at = base + Duration::minutes(10);
        recipes[2].created_at = base + Duration::minutes(20);
        let out = sort_recipes(recipes, "CreatedAt", true);
        assert_eq!(names(&out), vec!["Zupa krem z dyni", "Brownie", "Naleśniki"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        // every sample recipe has preparation_time 30
        let asc = sort_recipes(sample(), "PreparationTime", true);
        let desc = sort_recipes(sample(), "PreparationTime", false);
        let expected = vec!["Naleśniki", "Zupa krem z dyni", "Brownie"];
        assert_eq!(names(&asc), expected);
        assert_eq!(names(&desc), expected);
    }

    #[test]
    fn test_repeated_sorts_agree() {
        let first = sort_recipes(sample(), "Name", true);
        let second = sort_recipes(first.clone(), "Name", true);
        assert_eq!(names(&first), names(&second));
        assert_eq!(names(&first), vec!["Brownie", "Naleśniki", "Zupa krem z dyni"]);
    }
}
