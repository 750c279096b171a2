use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // project_categories
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectCategories::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ProjectCategories::Slug)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectCategories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Projects::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Projects::Slug)
                            .string_len(220)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::ShortDescription)
                            .string_len(300)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::FullDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Projects::Thumbnail).text())
                    .col(ColumnDef::new(Projects::FeaturedImage).text())
                    // Comma-delimited, split on read
                    .col(ColumnDef::new(Projects::Technologies).string_len(500).not_null())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::CaseStudyUrl).text())
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::SortOrder).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_category_id")
                            .from(Projects::Table, Projects::CategoryId)
                            .to(ProjectCategories::Table, ProjectCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_category_id
                ON projects (category_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_listing
                ON projects (sort_order, created_at DESC)
                WHERE is_active;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                DROP INDEX IF EXISTS idx_projects_category_id;
                DROP INDEX IF EXISTS idx_projects_listing;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectCategories {
    Table,
    Id,
    Name,
    Slug,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    CategoryId,
    Title,
    Slug,
    ShortDescription,
    FullDescription,
    Thumbnail,
    FeaturedImage,
    Technologies,
    LiveUrl,
    GithubUrl,
    CaseStudyUrl,
    IsFeatured,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
