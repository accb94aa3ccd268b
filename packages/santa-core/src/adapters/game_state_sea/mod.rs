//! SeaORM adapter for the singleton game-status row - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::game_state;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Fixed id of the singleton row.
pub const STATE_ROW_ID: i32 = 1;

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<game_state::Model>, sea_orm::DbErr> {
    game_state::Entity::find_by_id(STATE_ROW_ID).one(conn).await
}

/// Insert the singleton row with its initial values unless it already exists.
pub async fn ensure_row<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<game_state::Model, sea_orm::DbErr> {
    let state_active = game_state::ActiveModel {
        id: Set(STATE_ROW_ID),
        registration_open: Set(true),
        pairs_assigned: Set(false),
    };

    game_state::Entity::insert(state_active)
        .on_conflict(
            OnConflict::column(game_state::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    game_state::Entity::find_by_id(STATE_ROW_ID)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("game_state row not found".to_string()))
}

pub async fn set_registration_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    open: bool,
) -> Result<u64, sea_orm::DbErr> {
    let result = game_state::Entity::update_many()
        .col_expr(game_state::Column::RegistrationOpen, Expr::val(open).into())
        .filter(game_state::Column::Id.eq(STATE_ROW_ID))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn set_pairs_assigned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    assigned: bool,
) -> Result<u64, sea_orm::DbErr> {
    let result = game_state::Entity::update_many()
        .col_expr(game_state::Column::PairsAssigned, Expr::val(assigned).into())
        .filter(game_state::Column::Id.eq(STATE_ROW_ID))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
