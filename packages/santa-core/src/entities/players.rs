use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "chat_id")]
    pub chat_id: i64,
    pub username: Option<String>,
    #[sea_orm(column_name = "full_name")]
    pub full_name: Option<String>,
    pub wish: Option<String>,
    #[sea_orm(column_name = "recipient_id")]
    pub recipient_id: Option<i64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::RecipientId",
        to = "Column::Id"
    )]
    Recipient,
}

impl ActiveModelBehavior for ActiveModel {}
