//! SeaORM adapter for the participant store - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::players;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_chat_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::ChatId.eq(chat_id))
        .one(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(id).one(conn).await
}

/// Insert a player for `chat_id` unless one already exists.
///
/// Returns the row plus whether this call created it. The registration
/// fields start out null; `username` is only captured at creation and
/// left untouched for an existing row.
pub async fn ensure_by_chat_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    username: Option<String>,
) -> Result<(players::Model, bool), sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();

    let player_active = players::ActiveModel {
        id: NotSet,
        chat_id: Set(chat_id),
        username: Set(username),
        full_name: Set(None),
        wish: Set(None),
        recipient_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = players::Entity::insert(player_active)
        .on_conflict(
            OnConflict::column(players::Column::ChatId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let inserted = rows == 1;
    let player = players::Entity::find()
        .filter(players::Column::ChatId.eq(chat_id))
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("players.chat_id not found".to_string()))?;

    Ok((player, inserted))
}

pub async fn set_full_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    full_name: &str,
) -> Result<u64, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = players::Entity::update_many()
        .col_expr(players::Column::FullName, Expr::val(full_name).into())
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into())
        .filter(players::Column::ChatId.eq(chat_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn set_wish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    wish: &str,
) -> Result<u64, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = players::Entity::update_many()
        .col_expr(players::Column::Wish, Expr::val(wish).into())
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into())
        .filter(players::Column::ChatId.eq(chat_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn set_recipient<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    recipient_id: Option<i64>,
) -> Result<u64, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = players::Entity::update_many()
        .col_expr(players::Column::RecipientId, Expr::val(recipient_id).into())
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into())
        .filter(players::Column::Id.eq(player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// All players in creation order.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

/// Players with both full_name and wish set, in creation order.
pub async fn list_ready<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::FullName.is_not_null())
        .filter(players::Column::Wish.is_not_null())
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

/// Null out full_name, wish, and recipient_id on every row (soft reset).
pub async fn clear_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = players::Entity::update_many()
        .col_expr(players::Column::FullName, Expr::val(Option::<String>::None).into())
        .col_expr(players::Column::Wish, Expr::val(Option::<String>::None).into())
        .col_expr(players::Column::RecipientId, Expr::val(Option::<i64>::None).into())
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Delete every player row (hard reset).
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
