use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared by every table that tracks updated_at
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // personal_info (singleton)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PersonalInfo::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PersonalInfo::Name).string_len(100).not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::Tagline).string_len(500).not_null())
                    .col(ColumnDef::new(PersonalInfo::HeroDescription).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::AboutHeading).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::AboutDescription).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::AboutDetail).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Email).string_len(254).not_null())
                    .col(ColumnDef::new(PersonalInfo::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(PersonalInfo::Location).string_len(100).not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::AvailabilityStatus)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PersonalInfo::YearsExperience).integer().not_null())
                    .col(ColumnDef::new(PersonalInfo::ProjectsCompleted).integer().not_null())
                    .col(ColumnDef::new(PersonalInfo::AwardsWon).integer().not_null())
                    .col(ColumnDef::new(PersonalInfo::HappyClients).integer().not_null())
                    .col(ColumnDef::new(PersonalInfo::LinkedinUrl).text())
                    .col(ColumnDef::new(PersonalInfo::GithubUrl).text())
                    .col(ColumnDef::new(PersonalInfo::TwitterUrl).text())
                    .col(ColumnDef::new(PersonalInfo::DribbbleUrl).text())
                    .col(ColumnDef::new(PersonalInfo::ResumePdf).text())
                    .col(ColumnDef::new(PersonalInfo::FooterTagline).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::CopyrightText).string_len(200).not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active row. The application checks first; this index settles races.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_personal_info_single_active
                ON personal_info ((is_active))
                WHERE is_active;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_personal_info_updated_at
                BEFORE UPDATE ON personal_info
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        // =====================================================
        // core_expertise
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CoreExpertise::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CoreExpertise::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CoreExpertise::Title).string_len(100).not_null())
                    .col(ColumnDef::new(CoreExpertise::IconName).string_len(50).not_null())
                    .col(
                        ColumnDef::new(CoreExpertise::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CoreExpertise::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // site_settings (singleton)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SiteSettings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SiteSettings::SiteTitle).string_len(200).not_null())
                    .col(ColumnDef::new(SiteSettings::SiteDescription).text().not_null())
                    .col(ColumnDef::new(SiteSettings::Favicon).text())
                    .col(ColumnDef::new(SiteSettings::Logo).text())
                    .col(
                        ColumnDef::new(SiteSettings::MetaKeywords)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::GoogleAnalyticsId)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::PrimaryColor)
                            .string_len(7)
                            .not_null()
                            .default("#D4AF37"),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_site_settings_single_active
                ON site_settings ((is_active))
                WHERE is_active;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_personal_info_updated_at ON personal_info;
                DROP INDEX IF EXISTS idx_personal_info_single_active;
                DROP INDEX IF EXISTS idx_site_settings_single_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CoreExpertise::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Name,
    Title,
    Tagline,
    HeroDescription,
    AboutHeading,
    AboutDescription,
    AboutDetail,
    Email,
    Phone,
    Location,
    AvailabilityStatus,
    YearsExperience,
    ProjectsCompleted,
    AwardsWon,
    HappyClients,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
    DribbbleUrl,
    ResumePdf,
    FooterTagline,
    CopyrightText,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CoreExpertise {
    Table,
    Id,
    Title,
    IconName,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    SiteTitle,
    SiteDescription,
    Favicon,
    Logo,
    MetaKeywords,
    GoogleAnalyticsId,
    PrimaryColor,
    IsActive,
}
