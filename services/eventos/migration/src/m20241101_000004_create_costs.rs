use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Costs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Costs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Costs::EventId).uuid().not_null())
                    .col(ColumnDef::new(Costs::Description).string_len(255).not_null())
                    .col(ColumnDef::new(Costs::Amount).decimal_len(12, 2).not_null())
                    .col(
                        ColumnDef::new(Costs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Costs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Costs::Table, Costs::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Costs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Costs {
    Table,
    Id,
    EventId,
    Description,
    Amount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
}
