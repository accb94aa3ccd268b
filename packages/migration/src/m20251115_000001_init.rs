use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    ChatId,
    Username,
    FullName,
    Wish,
    RecipientId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameState {
    Table,
    Id,
    RegistrationOpen,
    PairsAssigned,
}

/// The singleton game_state row id.
const STATE_ROW_ID: i32 = 1;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Players::ChatId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Players::Username).string())
                    .col(ColumnDef::new(Players::FullName).string())
                    .col(ColumnDef::new(Players::Wish).string())
                    .col(ColumnDef::new(Players::RecipientId).big_integer())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_recipient")
                            .from(Players::Table, Players::RecipientId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameState::Table)
                    .col(
                        ColumnDef::new(GameState::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GameState::RegistrationOpen)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameState::PairsAssigned)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Seed the singleton state row: registration open, no pairs yet.
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(GameState::Table)
                    .columns([
                        GameState::Id,
                        GameState::RegistrationOpen,
                        GameState::PairsAssigned,
                    ])
                    .values_panic([STATE_ROW_ID.into(), true.into(), false.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameState::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        Ok(())
    }
}
