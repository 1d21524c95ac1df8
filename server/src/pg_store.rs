//! PostgreSQL implementation of the catalog's repository ports.

use cookbook_core::store::{IngredientStore, Predicate, RecipeStore, StoreResult};
use cookbook_core::{Ingredient, Recipe, RecipeIngredient, StoreError};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::{IngredientRow, RecipeChanges, RecipeIngredientRow, RecipeRow};
use crate::schema::{ingredients, recipe_ingredients, recipes};

type Conn = PooledConnection<ConnectionManager<PgConnection>>;

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> StoreResult<Conn> {
        self.pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

fn query_error(e: DieselError) -> StoreError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StoreError::Duplicate(info.message().to_string())
        }
        other => StoreError::Query(other.to_string()),
    }
}

/// Loads join rows for `rows` in one query and assembles the aggregates.
fn assemble(conn: &mut PgConnection, rows: Vec<RecipeRow>) -> StoreResult<Vec<Recipe>> {
    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let links: Vec<(RecipeIngredientRow, IngredientRow)> = recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq_any(ids))
        .order(recipe_ingredients::id)
        .select((RecipeIngredientRow::as_select(), IngredientRow::as_select()))
        .load(conn)
        .map_err(query_error)?;

    let mut by_recipe: HashMap<Uuid, Vec<(RecipeIngredientRow, IngredientRow)>> = HashMap::new();
    for (link, ingredient) in links {
        by_recipe
            .entry(link.recipe_id)
            .or_default()
            .push((link, ingredient));
    }

    rows.into_iter()
        .map(|row| {
            let links = by_recipe.remove(&row.id).unwrap_or_default();
            row.into_recipe(links)
        })
        .collect()
}

fn load_recipe(conn: &mut PgConnection, id: Uuid) -> StoreResult<Option<Recipe>> {
    let row = recipes::table
        .find(id)
        .select(RecipeRow::as_select())
        .first(conn)
        .optional()
        .map_err(query_error)?;
    match row {
        Some(row) => Ok(assemble(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

fn load_all_recipes(conn: &mut PgConnection) -> StoreResult<Vec<Recipe>> {
    let rows = recipes::table
        .order((recipes::created_at, recipes::id))
        .select(RecipeRow::as_select())
        .load(conn)
        .map_err(query_error)?;
    assemble(conn, rows)
}

fn load_all_ingredients(conn: &mut PgConnection) -> StoreResult<Vec<Ingredient>> {
    let rows: Vec<IngredientRow> = ingredients::table
        .order(ingredients::name)
        .select(IngredientRow::as_select())
        .load(conn)
        .map_err(query_error)?;
    Ok(rows.into_iter().map(Ingredient::from).collect())
}

impl RecipeStore for PgStore {
    fn add(&self, recipe: Recipe) -> StoreResult<Recipe> {
        let mut conn = self.conn()?;
        diesel::insert_into(recipes::table)
            .values(RecipeRow::from(&recipe))
            .execute(&mut conn)
            .map_err(query_error)?;
        load_recipe(&mut conn, recipe.id)?
            .ok_or_else(|| StoreError::Query(format!("recipe {} vanished after insert", recipe.id)))
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Recipe>> {
        load_recipe(&mut self.conn()?, id)
    }

    fn get_all(&self) -> StoreResult<Vec<Recipe>> {
        load_all_recipes(&mut self.conn()?)
    }

    fn get_filtered(&self, predicate: Predicate<'_, Recipe>) -> StoreResult<Vec<Recipe>> {
        let all = load_all_recipes(&mut self.conn()?)?;
        Ok(all.into_iter().filter(|r| predicate(r)).collect())
    }

    fn update(&self, recipe: Recipe) -> StoreResult<Recipe> {
        let mut conn = self.conn()?;
        let updated = diesel::update(recipes::table.find(recipe.id))
            .set(RecipeChanges::from(&recipe))
            .execute(&mut conn)
            .map_err(query_error)?;
        if updated == 0 {
            return Err(StoreError::Query(format!("recipe {} does not exist", recipe.id)));
        }
        load_recipe(&mut conn, recipe.id)?
            .ok_or_else(|| StoreError::Query(format!("recipe {} vanished after update", recipe.id)))
    }

    fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let deleted = diesel::delete(recipes::table.find(id))
            .execute(&mut self.conn()?)
            .map_err(query_error)?;
        Ok(deleted > 0)
    }

    fn insert_recipe_ingredient(&self, link: RecipeIngredient) -> StoreResult<Option<Recipe>> {
        let mut conn = self.conn()?;
        let exists: i64 = recipes::table
            .filter(recipes::id.eq(link.recipe_id))
            .count()
            .get_result(&mut conn)
            .map_err(query_error)?;
        if exists == 0 {
            return Ok(None);
        }

        diesel::insert_into(recipe_ingredients::table)
            .values(RecipeIngredientRow::from(&link))
            .execute(&mut conn)
            .map_err(query_error)?;
        load_recipe(&mut conn, link.recipe_id)
    }
}

impl IngredientStore for PgStore {
    fn add(&self, ingredient: Ingredient) -> StoreResult<Ingredient> {
        diesel::insert_into(ingredients::table)
            .values(IngredientRow::from(&ingredient))
            .execute(&mut self.conn()?)
            .map_err(query_error)?;
        Ok(ingredient)
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Ingredient>> {
        let row = ingredients::table
            .find(id)
            .select(IngredientRow::as_select())
            .first(&mut self.conn()?)
            .optional()
            .map_err(query_error)?;
        Ok(row.map(Ingredient::from))
    }

    fn get_all(&self) -> StoreResult<Vec<Ingredient>> {
        load_all_ingredients(&mut self.conn()?)
    }

    fn get_filtered(&self, predicate: Predicate<'_, Ingredient>) -> StoreResult<Vec<Ingredient>> {
        let all = load_all_ingredients(&mut self.conn()?)?;
        Ok(all.into_iter().filter(|i| predicate(i)).collect())
    }

    fn update(&self, ingredient: Ingredient) -> StoreResult<Option<Ingredient>> {
        let row = diesel::update(ingredients::table.find(ingredient.id))
            .set(ingredients::name.eq(&ingredient.name))
            .returning(IngredientRow::as_returning())
            .get_result(&mut self.conn()?)
            .optional()
            .map_err(query_error)?;
        Ok(row.map(Ingredient::from))
    }

    fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let deleted = diesel::delete(ingredients::table.find(id))
            .execute(&mut self.conn()?)
            .map_err(query_error)?;
        Ok(deleted > 0)
    }
}
