use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Venues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Venues::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Venues::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::Street).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::Number).integer().not_null())
                    .col(ColumnDef::new(Venues::Neighborhood).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::City).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::State).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::PostalCode).string_len(9).not_null())
                    .col(ColumnDef::new(Venues::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Venues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Venues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Venues::Table, Venues::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Venues {
    Table,
    Id,
    OwnerId,
    Name,
    Street,
    Number,
    Neighborhood,
    City,
    State,
    PostalCode,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
