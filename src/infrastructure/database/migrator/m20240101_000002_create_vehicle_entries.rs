//! Migration to create vehicle_entries table
//!
//! The unique index on `number_plate` is what keeps two concurrent entry
//! requests for the same plate from both succeeding.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleEntries::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleEntries::NumberPlate)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleEntries::EntryInterchange)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleEntries::EntryDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_entries_number_plate")
                    .table(VehicleEntries::Table)
                    .col(VehicleEntries::NumberPlate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VehicleEntries {
    Table,
    Id,
    NumberPlate,
    EntryInterchange,
    EntryDateTime,
}
