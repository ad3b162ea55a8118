use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::types::{MaterialList, Rarity, ResourceKind};

/// Insert payload for a crafting recipe; produced by the recipe
/// generator at seed time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub kind: ResourceKind,
    pub materials: MaterialList,
    pub result_name: String,
    pub result_quantity: i32,
    pub level: i32,
    pub rarity: Rarity,
    pub description: String,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find().all(self.db).await
    }

    pub async fn get_by_kind(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Kind.eq(kind))
            .all(self.db)
            .await
    }

    pub async fn create(&self, recipe: NewRecipe) -> Result<entity::recipe::Model, DbErr> {
        entity::recipe::ActiveModel {
            name: ActiveValue::Set(recipe.name),
            kind: ActiveValue::Set(recipe.kind),
            materials: ActiveValue::Set(recipe.materials),
            result_name: ActiveValue::Set(recipe.result_name),
            result_quantity: ActiveValue::Set(recipe.result_quantity),
            level: ActiveValue::Set(recipe.level),
            rarity: ActiveValue::Set(recipe.rarity),
            description: ActiveValue::Set(recipe.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
