use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(PlatformPreferences::Table)
                .if_not_exists()
                .col(ColumnDef::new(PlatformPreferences::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(PlatformPreferences::UserId).string().not_null())
                .col(ColumnDef::new(PlatformPreferences::Platform).string().not_null()) // "LetsBonk", "Pump.fun", "Other"
                .col(
                    ColumnDef::new(PlatformPreferences::NotificationsEnabled)
                        .boolean()
                        .not_null()
                        .default(true)
                )
                .col(
                    ColumnDef::new(PlatformPreferences::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(PlatformPreferences::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        // Upserts conflict on (user_id, platform)
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_platform_preferences_user_platform")
                .table(PlatformPreferences::Table)
                .col(PlatformPreferences::UserId)
                .col(PlatformPreferences::Platform)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PlatformPreferences::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PlatformPreferences {
    Table,
    Id,
    UserId,
    Platform,
    NotificationsEnabled,
    CreatedAt,
    UpdatedAt,
}
