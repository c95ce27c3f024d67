use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topics::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Topics::Name).string().not_null())
                    .col(
                        ColumnDef::new(Topics::Status)
                            .string_len(16)
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .col(
                        ColumnDef::new(Topics::Source)
                            .string_len(16)
                            .not_null()
                            .default("CUSTOM"),
                    )
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_topics_status_created_at")
                    .table(Topics::Table)
                    .col(Topics::Status)
                    .col(Topics::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_topics_name")
                    .table(Topics::Table)
                    .col(Topics::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Topics {
    Table,
    Id,
    Name,
    Status,
    Source,
    CreatedAt,
    UpdatedAt,
}
