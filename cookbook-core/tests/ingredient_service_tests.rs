use cookbook_core::dto::{IngredientAddRequest, IngredientUpdateRequest};
use cookbook_core::{Catalog, CatalogError};
use uuid::Uuid;

fn add(catalog: &Catalog, name: &str) -> Uuid {
    catalog
        .ingredients
        .add_ingredient(Some(IngredientAddRequest {
            name: Some(name.to_string()),
        }))
        .unwrap()
        .id
}

#[test]
fn test_ingredient_crud() {
    let catalog = Catalog::in_memory();
    let id = add(&catalog, "Masło");

    let fetched = catalog.ingredients.get_ingredient_by_id(Some(id)).unwrap();
    assert_eq!(fetched.name, "Masło");

    let updated = catalog
        .ingredients
        .update_ingredient(Some(IngredientUpdateRequest {
            id: Some(id),
            name: Some("Masło klarowane".to_string()),
        }))
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Masło klarowane");

    assert!(catalog.ingredients.delete_ingredient(Some(id)).unwrap());
    assert!(!catalog.ingredients.delete_ingredient(Some(id)).unwrap());
    let err = catalog.ingredients.get_ingredient_by_id(Some(id)).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_add_ingredient_validates_name() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .ingredients
        .add_ingredient(Some(IngredientAddRequest {
            name: Some("   ".to_string()),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(catalog.ingredients.get_all_ingredients().unwrap().is_empty());
}

#[test]
fn test_update_unknown_ingredient_is_not_found() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .ingredients
        .update_ingredient(Some(IngredientUpdateRequest {
            id: Some(Uuid::new_v4()),
            name: Some("Cukier".to_string()),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_filtered_ingredients_ignore_case() {
    let catalog = Catalog::in_memory();
    for name in ["Cebula", "Czosnek", "Cukier puder", "Cukier"] {
        add(&catalog, name);
    }
    let names: Vec<String> = catalog
        .ingredients
        .get_filtered_ingredients(Some("CUKIER"))
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Cukier puder", "Cukier"]);

    assert_eq!(
        catalog
            .ingredients
            .get_filtered_ingredients(Some(" "))
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn test_resolve_by_id_returns_it_unchanged() {
    let catalog = Catalog::in_memory();
    let id = add(&catalog, "Sól");
    // the name is not looked at when an id is given
    let resolved = catalog.ingredients.resolve(Some("Pieprz"), Some(id)).unwrap();
    assert_eq!(resolved, id);
    assert_eq!(catalog.ingredients.get_all_ingredients().unwrap().len(), 1);
}

#[test]
fn test_resolve_by_unknown_id_is_not_found() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .ingredients
        .resolve(None, Some(Uuid::new_v4()))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_resolve_existing_name_never_duplicates() {
    let catalog = Catalog::in_memory();
    let id = add(&catalog, "Mąka pszenna");

    for spelling in ["Mąka pszenna", "MĄKA PSZENNA", "  mąka pszenna "] {
        assert_eq!(catalog.ingredients.resolve(Some(spelling), None).unwrap(), id);
    }
    assert_eq!(catalog.ingredients.get_all_ingredients().unwrap().len(), 1);
}

#[test]
fn test_resolve_new_name_creates_exactly_one() {
    let catalog = Catalog::in_memory();
    add(&catalog, "Sól");

    let id = catalog.ingredients.resolve(Some(" Drożdże "), None).unwrap();
    let all = catalog.ingredients.get_all_ingredients().unwrap();
    assert_eq!(all.len(), 2);
    let created = all.iter().find(|i| i.id == id).unwrap();
    assert_eq!(created.name, "Drożdże");

    assert_eq!(catalog.ingredients.resolve(Some("drożdże"), None).unwrap(), id);
    assert_eq!(catalog.ingredients.get_all_ingredients().unwrap().len(), 2);
}

#[test]
fn test_resolve_without_reference_is_invalid_operation() {
    let catalog = Catalog::in_memory();
    for (name, id) in [(None, None), (Some("  "), None), (None, Some(Uuid::nil()))] {
        let err = catalog.ingredients.resolve(name, id).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidOperation(_)));
        assert!(err.is_contract_violation());
    }
}
