use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    // frontend | backend | design | mobile | uiux | tools
                    .col(ColumnDef::new(Skills::Category).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Skills::Proficiency).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Skills::IconName)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Skills::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Skills::IsActive).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_category_order
                ON skills (category, sort_order)
                WHERE is_active;
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tools::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Tools::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Tools::IsActive).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Proficiency,
    IconName,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum Tools {
    Table,
    Id,
    Name,
    SortOrder,
    IsActive,
}
