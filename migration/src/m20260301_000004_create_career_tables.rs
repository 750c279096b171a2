use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // experiences + achievements
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Experiences::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Company).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    // NULL means current position
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Technologies)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Achievements::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Achievements::ExperienceId).uuid().not_null())
                    .col(ColumnDef::new(Achievements::Description).text().not_null())
                    .col(
                        ColumnDef::new(Achievements::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_achievements_experience_id")
                            .from(Achievements::Table, Achievements::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_achievements_experience_id
                ON achievements (experience_id, sort_order);
                "#,
            )
            .await?;

        // =====================================================
        // education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Education::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Education::Degree).string_len(200).not_null())
                    .col(ColumnDef::new(Education::Institution).string_len(200).not_null())
                    .col(ColumnDef::new(Education::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Education::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Education::IconName)
                            .string_len(50)
                            .not_null()
                            .default("graduation-cap"),
                    )
                    .col(ColumnDef::new(Education::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Education::IsActive).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // timeline_entries
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TimelineEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimelineEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimelineEntries::Year).integer().not_null())
                    .col(ColumnDef::new(TimelineEntries::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(TimelineEntries::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TimelineEntries::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TimelineEntries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimelineEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
    Technologies,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    ExperienceId,
    Description,
    SortOrder,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Year,
    Description,
    IconName,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum TimelineEntries {
    Table,
    Id,
    Year,
    Title,
    Description,
    SortOrder,
    IsActive,
}
