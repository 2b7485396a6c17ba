use sea_orm_migration::prelude::*;

use crate::labels::SKILL_CATEGORIES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(skills_table()).await?;

        // Listing groups by category, strongest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_category_level
                ON skills (category, level DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).if_exists().to_owned())
            .await
    }
}

fn skills_table() -> TableCreateStatement {
    Table::create()
        .table(Skills::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Skills::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Skills::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Skills::Category)
                .string_len(20)
                .not_null()
                .check(Expr::col(Skills::Category).is_in(SKILL_CATEGORIES.iter().copied())),
        )
        .col(
            ColumnDef::new(Skills::Level)
                .small_integer()
                .not_null()
                .check(
                    Expr::col(Skills::Level)
                        .gte(0)
                        .and(Expr::col(Skills::Level).lte(100)),
                ),
        )
        .col(ColumnDef::new(Skills::Description).string_len(200).not_null())
        .col(ColumnDef::new(Skills::Icon).text())
        .col(ColumnDef::new(Skills::Color).text())
        .col(
            ColumnDef::new(Skills::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Skills::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Level,
    Description,
    Icon,
    Color,
    CreatedAt,
    UpdatedAt,
}
