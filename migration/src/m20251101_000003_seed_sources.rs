use sea_orm_migration::prelude::*;

/// `(channel_id, platform, channel_name)` rows inserted on first migration.
/// Elfa channel ids are endpoint query strings relative to the Elfa data API.
pub const SEED_SOURCES: [(&str, &str, &str); 3] = [
    (
        "/event-summary?keywords=hyperliquid&timeWindow=24h",
        "elfa",
        "Hyperliquid",
    ),
    (
        "/event-summary?keywords=tokenised&timeWindow=24h",
        "elfa",
        "tokenised",
    ),
    (
        "/trending-narratives?timeFrame=day&maxNarratives=20",
        "elfa",
        "trending-narratives",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rows already present (schema created before this migrator existed) are left as-is.
        let mut insert = Query::insert();
        insert
            .into_table(Sources::Table)
            .columns([Sources::ChannelId, Sources::Platform, Sources::ChannelName])
            .on_conflict(OnConflict::column(Sources::ChannelId).do_nothing().to_owned());
        for (channel_id, platform, channel_name) in SEED_SOURCES {
            insert
                .values([channel_id.into(), platform.into(), channel_name.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let channel_ids = SEED_SOURCES.iter().map(|(channel_id, _, _)| *channel_id);
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Sources::Table)
                    .and_where(Expr::col(Sources::ChannelId).is_in(channel_ids))
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Sources {
    Table,
    ChannelId,
    Platform,
    ChannelName,
}
