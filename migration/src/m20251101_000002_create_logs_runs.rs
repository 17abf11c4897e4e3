use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // channel_id is matched to sources by convention only: no foreign key,
        // and no kept <= pulled check. channel_id and platform are nullable.
        manager
            .create_table(
                Table::create()
                    .table(LogsRuns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogsRuns::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LogsRuns::ChannelId).text().null())
                    .col(ColumnDef::new(LogsRuns::Platform).text().null())
                    .col(ColumnDef::new(LogsRuns::Pulled).integer().not_null())
                    .col(ColumnDef::new(LogsRuns::Kept).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_logs_runs_channel")
                    .table(LogsRuns::Table)
                    .col(LogsRuns::ChannelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogsRuns::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LogsRuns {
    Table,
    Id,
    ChannelId,
    Platform,
    Pulled,
    Kept,
}
