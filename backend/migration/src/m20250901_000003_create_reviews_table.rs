use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reviews::DeliveryManId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewerName).string())
                    .col(ColumnDef::new(Reviews::ReviewerPhoto).string())
                    .col(
                        ColumnDef::new(Reviews::Rating)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reviews::Feedback).text())
                    .col(
                        ColumnDef::new(Reviews::ReviewDate)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_delivery_man_id")
                    .table(Reviews::Table)
                    .col(Reviews::DeliveryManId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

/// Reference to the "reviews" table
#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    DeliveryManId,
    ReviewerName,
    ReviewerPhoto,
    Rating,
    Feedback,
    ReviewDate,
}
