use sea_orm_migration::prelude::*;

mod m20241101_000001_create_users;
mod m20241101_000002_create_venues;
mod m20241101_000003_create_events;
mod m20241101_000004_create_costs;
mod m20241101_000005_add_owner_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_users::Migration),
            Box::new(m20241101_000002_create_venues::Migration),
            Box::new(m20241101_000003_create_events::Migration),
            Box::new(m20241101_000004_create_costs::Migration),
            Box::new(m20241101_000005_add_owner_indexes::Migration),
        ]
    }
}
