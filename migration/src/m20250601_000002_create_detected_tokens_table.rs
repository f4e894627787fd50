use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DetectedTokens::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DetectedTokens::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(DetectedTokens::Address).string().not_null().unique_key())
                    .col(ColumnDef::new(DetectedTokens::Name).string().not_null())
                    .col(ColumnDef::new(DetectedTokens::Symbol).string().not_null())
                    .col(ColumnDef::new(DetectedTokens::Status).string().null())
                    .col(
                        ColumnDef::new(DetectedTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Recent-first listings and windowed counts
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_detected_tokens_created_at")
                    .table(DetectedTokens::Table)
                    .col(DetectedTokens::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetectedTokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DetectedTokens {
    Table,
    Id,
    Address,
    Name,
    Symbol,
    Status,
    CreatedAt,
}
