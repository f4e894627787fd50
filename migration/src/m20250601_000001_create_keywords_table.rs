use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Keywords::Table)
                .if_not_exists()
                .col(ColumnDef::new(Keywords::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Keywords::UserId).string().not_null())
                .col(ColumnDef::new(Keywords::Keyword).string().not_null())
                .col(
                    ColumnDef::new(Keywords::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        // One row per (user, keyword)
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_keywords_user_keyword")
                .table(Keywords::Table)
                .col(Keywords::UserId)
                .col(Keywords::Keyword)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Keywords::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Keywords {
    Table,
    Id,
    UserId,
    Keyword,
    CreatedAt,
}
