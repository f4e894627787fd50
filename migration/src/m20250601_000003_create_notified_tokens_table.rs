use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(NotifiedTokens::Table)
                .if_not_exists()
                .col(ColumnDef::new(NotifiedTokens::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(NotifiedTokens::UserId).string().not_null())
                .col(ColumnDef::new(NotifiedTokens::TokenName).string().not_null())
                .col(ColumnDef::new(NotifiedTokens::TokenAddress).string().null())
                .col(ColumnDef::new(NotifiedTokens::MatchedKeyword).string().not_null())
                .col(
                    ColumnDef::new(NotifiedTokens::NotifiedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_notified_tokens_user_notified_at")
                .table(NotifiedTokens::Table)
                .col(NotifiedTokens::UserId)
                .col(NotifiedTokens::NotifiedAt)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NotifiedTokens::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NotifiedTokens {
    Table,
    Id,
    UserId,
    TokenName,
    TokenAddress,
    MatchedKeyword,
    NotifiedAt,
}
