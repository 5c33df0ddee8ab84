use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000003_create_item_table::Item};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(timestamp_with_time_zone(Booking::StartDate))
                    .col(timestamp_with_time_zone(Booking::EndDate))
                    .col(integer(Booking::ItemId))
                    .col(integer(Booking::BookerId))
                    .col(string_len(Booking::Status, 16).default("WAITING"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_id")
                            .from(Booking::Table, Booking::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_booker_id")
                            .from(Booking::Table, Booking::BookerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    StartDate,
    EndDate,
    ItemId,
    BookerId,
    Status,
}
