use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // testimonials
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Testimonials::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Testimonials::ClientName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Testimonials::ClientPosition)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testimonials::ClientCompany)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Testimonials::ClientPhoto).text())
                    .col(ColumnDef::new(Testimonials::Testimonial).text().not_null())
                    .col(
                        ColumnDef::new(Testimonials::Rating)
                            .small_integer()
                            .not_null()
                            .default(5)
                            .check(Expr::col(Testimonials::Rating).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Testimonials::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Testimonials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // contact_messages (write-once apart from is_read)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).string_len(100).not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string_len(254).not_null())
                    .col(ColumnDef::new(ContactMessages::Subject).string_len(200).not_null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // newsletter_subscribers
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscribers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // The unique constraint is the source of truth for deduplication
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::SubscribedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsletterSubscribers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    ClientName,
    ClientPosition,
    ClientCompany,
    ClientPhoto,
    Testimonial,
    Rating,
    SortOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum NewsletterSubscribers {
    Table,
    Id,
    Email,
    IsActive,
    SubscribedAt,
}
