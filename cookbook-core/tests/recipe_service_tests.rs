use cookbook_core::dto::{RecipeAddRequest, RecipeUpdateRequest};
use cookbook_core::{Catalog, CatalogError, Category};
use uuid::Uuid;

fn request(name: &str, author: &str, category: Category) -> RecipeAddRequest {
    RecipeAddRequest {
        name: Some(name.to_string()),
        description: Some(format!("{} od {}", name, author)),
        author: Some(author.to_string()),
        category: Some(category),
        preparation_time: 30,
        servings: 2,
        rating: 4.5,
        image_url: Some("https://example.com/a.jpg".to_string()),
    }
}

fn seeded() -> Catalog {
    let catalog = Catalog::in_memory();
    for (name, author, category) in [
        ("Spaghetti Bolognese", "Luca Rossi", Category::MainCourse),
        ("Sałatka Cezar", "Anna Nowak", Category::Salads),
        ("Szarlotka", "Julia Nowak", Category::PastriesAndDesserts),
    ] {
        catalog
            .recipes
            .add_recipe(Some(request(name, author, category)))
            .unwrap();
    }
    catalog
}

#[test]
fn test_added_recipe_gets_id_and_is_listed() {
    let catalog = Catalog::in_memory();
    let first = catalog
        .recipes
        .add_recipe(Some(request("Naleśniki", "Jan Kowalski", Category::Breakfast)))
        .unwrap();
    let second = catalog
        .recipes
        .add_recipe(Some(request("Naleśniki", "Jan Kowalski", Category::Breakfast)))
        .unwrap();

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);

    let all = catalog.recipes.get_all_recipes().unwrap();
    let ids: Vec<Uuid> = all.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_add_then_get_round_trips_fields() {
    let catalog = Catalog::in_memory();
    let sent = request("Zupa krem z dyni", "Anna Nowak", Category::Soups);
    let created = catalog.recipes.add_recipe(Some(sent.clone())).unwrap();
    let fetched = catalog.recipes.get_recipe_by_id(Some(created.id)).unwrap();

    assert_eq!(Some(fetched.name), sent.name);
    assert_eq!(fetched.description, sent.description);
    assert_eq!(Some(fetched.author), sent.author);
    assert_eq!(Some(fetched.category), sent.category);
    assert_eq!(fetched.preparation_time, sent.preparation_time);
    assert_eq!(fetched.servings, sent.servings);
    assert_eq!(fetched.rating, sent.rating);
    assert_eq!(fetched.image_url, sent.image_url);
    assert_eq!(fetched.category_label, "Zupy");
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.recipe_ingredients.is_empty());
}

#[test]
fn test_add_rejects_invalid_request_without_storing() {
    let catalog = Catalog::in_memory();
    let mut bad = request("Zu", "Anna Nowak", Category::Soups);
    bad.servings = 0;

    let err = catalog.recipes.add_recipe(Some(bad)).unwrap_err();
    match err {
        CatalogError::Validation(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "servings"]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(catalog.recipes.get_all_recipes().unwrap().is_empty());
}

#[test]
fn test_missing_request_is_contract_violation() {
    let catalog = Catalog::in_memory();
    let err = catalog.recipes.add_recipe(None).unwrap_err();
    assert!(err.is_contract_violation());

    let err = catalog.recipes.get_recipe_by_id(None).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn test_get_unknown_recipe_is_not_found() {
    let catalog = seeded();
    let err = catalog
        .recipes
        .get_recipe_by_id(Some(Uuid::new_v4()))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert!(err.to_string().starts_with("Recipe not found"));
}

#[test]
fn test_filtered_recipes() {
    let catalog = seeded();

    let out = catalog
        .recipes
        .get_filtered_recipes("Name", Some("Spaghetti"))
        .unwrap();
    let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Spaghetti Bolognese"]);

    let out = catalog.recipes.get_filtered_recipes("Name", Some("")).unwrap();
    assert_eq!(out.len(), 3);
    let out = catalog.recipes.get_filtered_recipes("Name", None).unwrap();
    assert_eq!(out.len(), 3);
    let out = catalog
        .recipes
        .get_filtered_recipes("Calories", Some("300"))
        .unwrap();
    assert_eq!(out.len(), 3);

    let out = catalog
        .recipes
        .get_filtered_recipes("Category", Some("sałatki"))
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Sałatka Cezar");
}

#[test]
fn test_sorted_recipes() {
    let catalog = seeded();
    let all = catalog.recipes.get_all_recipes().unwrap();

    let out = catalog
        .recipes
        .get_sorted_recipes(Some(all.clone()), "Author", true)
        .unwrap();
    let authors: Vec<&str> = out.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, vec!["Anna Nowak", "Julia Nowak", "Luca Rossi"]);

    let out = catalog
        .recipes
        .get_sorted_recipes(Some(all.clone()), "NoSuchField", false)
        .unwrap();
    assert_eq!(out, all);
}

#[test]
fn test_sort_without_list_is_invalid_argument() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .recipes
        .get_sorted_recipes(None, "Name", true)
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn test_update_replaces_fields_but_keeps_identity() {
    let catalog = seeded();
    let original = catalog
        .recipes
        .get_filtered_recipes("Name", Some("Szarlotka"))
        .unwrap()
        .remove(0);

    let updated = catalog
        .recipes
        .update_recipe(Some(RecipeUpdateRequest {
            id: Some(original.id),
            name: Some("Szarlotka babci".to_string()),
            description: None,
            author: Some("Julia Nowak".to_string()),
            category: Some(Category::PastriesAndDesserts),
            preparation_time: 90,
            servings: 8,
            rating: 5.0,
            image_url: None,
        }))
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.name, "Szarlotka babci");
    assert_eq!(updated.description, None);
    assert_eq!(updated.servings, 8);
    assert_eq!(
        catalog.recipes.get_recipe_by_id(Some(original.id)).unwrap(),
        updated
    );
}

#[test]
fn test_update_unknown_recipe_is_not_found() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .recipes
        .update_recipe(Some(RecipeUpdateRequest {
            id: Some(Uuid::new_v4()),
            name: Some("Szarlotka".to_string()),
            author: Some("Julia Nowak".to_string()),
            category: Some(Category::PastriesAndDesserts),
            preparation_time: 60,
            servings: 8,
            rating: 4.0,
            ..Default::default()
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_delete_recipe() {
    let catalog = seeded();
    let id = catalog.recipes.get_all_recipes().unwrap()[0].id;

    catalog.recipes.delete_recipe(Some(id)).unwrap();
    assert_eq!(catalog.recipes.get_all_recipes().unwrap().len(), 2);

    let err = catalog.recipes.delete_recipe(Some(id)).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}
