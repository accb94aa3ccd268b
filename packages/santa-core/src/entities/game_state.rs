use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton table: exactly one row with id = 1 for the life of the game.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_state")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "registration_open")]
    pub registration_open: bool,
    #[sea_orm(column_name = "pairs_assigned")]
    pub pairs_assigned: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
