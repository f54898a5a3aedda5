use sea_orm_migration::prelude::*;

const INDEXES: [&str; 4] = [
    "idx_venues_owner_id",
    "idx_events_owner_id",
    "idx_events_venue_id",
    "idx_costs_event_id",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Venues::Table)
                    .col(Venues::OwnerId)
                    .name(INDEXES[0])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Events::Table)
                    .col(Events::OwnerId)
                    .name(INDEXES[1])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Events::Table)
                    .col(Events::VenueId)
                    .name(INDEXES[2])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Costs::Table)
                    .col(Costs::EventId)
                    .col(Costs::CreatedAt)
                    .name(INDEXES[3])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Venues {
    Table,
    OwnerId,
}

#[derive(Iden)]
enum Events {
    Table,
    OwnerId,
    VenueId,
}

#[derive(Iden)]
enum Costs {
    Table,
    EventId,
    CreatedAt,
}
