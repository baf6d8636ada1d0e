use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParcelBookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParcelBookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParcelBookings::SenderName).string())
                    .col(
                        ColumnDef::new(ParcelBookings::SenderEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParcelBookings::SenderPhone).string())
                    .col(ColumnDef::new(ParcelBookings::ParcelType).string())
                    .col(ColumnDef::new(ParcelBookings::ParcelWeight).double())
                    .col(ColumnDef::new(ParcelBookings::ReceiverName).string())
                    .col(ColumnDef::new(ParcelBookings::ReceiverPhone).string())
                    .col(ColumnDef::new(ParcelBookings::DeliveryAddress).string())
                    .col(ColumnDef::new(ParcelBookings::RequestedDeliveryDate).string())
                    .col(ColumnDef::new(ParcelBookings::ApproximateDeliveryDate).string())
                    .col(ColumnDef::new(ParcelBookings::Latitude).double())
                    .col(ColumnDef::new(ParcelBookings::Longitude).double())
                    .col(
                        ColumnDef::new(ParcelBookings::Price)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(ParcelBookings::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(ParcelBookings::DeliveryManId).uuid())
                    .col(
                        ColumnDef::new(ParcelBookings::BookingDate)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parcel_bookings_sender_email")
                    .table(ParcelBookings::Table)
                    .col(ParcelBookings::SenderEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parcel_bookings_delivery_man_id")
                    .table(ParcelBookings::Table)
                    .col(ParcelBookings::DeliveryManId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParcelBookings::Table).to_owned())
            .await
    }
}

/// Reference to the "parcel_bookings" table
#[derive(Iden)]
enum ParcelBookings {
    Table,
    Id,
    SenderName,
    SenderEmail,
    SenderPhone,
    ParcelType,
    ParcelWeight,
    ReceiverName,
    ReceiverPhone,
    DeliveryAddress,
    RequestedDeliveryDate,
    ApproximateDeliveryDate,
    Latitude,
    Longitude,
    Price,
    Status,
    DeliveryManId,
    BookingDate,
}
