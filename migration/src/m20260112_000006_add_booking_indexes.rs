use sea_orm_migration::prelude::*;

use super::m20260106_000004_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_item_id_start_date")
                    .table(Booking::Table)
                    .col(Booking::ItemId)
                    .col(Booking::StartDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_booker_id_end_date")
                    .table(Booking::Table)
                    .col(Booking::BookerId)
                    .col(Booking::EndDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_booker_id_end_date")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_item_id_start_date")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await
    }
}
