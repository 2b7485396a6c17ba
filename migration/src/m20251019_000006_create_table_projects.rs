use sea_orm_migration::prelude::*;

use crate::labels::{PROJECT_CATEGORIES, PROJECT_STATUSES};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(projects_table()).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_projects_display_order")
                    .table(Projects::Table)
                    .col(Projects::DisplayOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).if_exists().to_owned())
            .await
    }
}

fn projects_table() -> TableCreateStatement {
    Table::create()
        .table(Projects::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Projects::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Projects::Title).string_len(100).not_null())
        .col(
            ColumnDef::new(Projects::Category)
                .string()
                .not_null()
                .check(Expr::col(Projects::Category).is_in(PROJECT_CATEGORIES.iter().copied())),
        )
        .col(
            ColumnDef::new(Projects::Description)
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(Projects::LongDescription)
                .string_len(1000)
                .not_null(),
        )
        .col(ColumnDef::new(Projects::Tech).json_binary().not_null())
        .col(
            ColumnDef::new(Projects::Status)
                .string()
                .not_null()
                .check(Expr::col(Projects::Status).is_in(PROJECT_STATUSES.iter().copied())),
        )
        .col(ColumnDef::new(Projects::Href).text())
        .col(ColumnDef::new(Projects::DemoHref).text())
        .col(ColumnDef::new(Projects::Metrics).json_binary().not_null())
        .col(ColumnDef::new(Projects::Features).json_binary().not_null())
        .col(ColumnDef::new(Projects::Image).text())
        .col(
            ColumnDef::new(Projects::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Projects::Featured)
                .boolean()
                .not_null()
                .default(false),
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
        .to_owned()
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Category,
    Description,
    LongDescription,
    Tech,
    Status,
    Href,
    DemoHref,
    Metrics,
    Features,
    Image,
    DisplayOrder,
    Featured,
    CreatedAt,
    UpdatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::sea_query::PostgresQueryBuilder;

    #[test]
    fn category_and_status_are_restricted_to_known_labels() {
        let sql = projects_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"CHECK ("category" IN ("#), "{sql}");
        assert!(sql.contains(r#"CHECK ("status" IN ("#), "{sql}");
        for label in PROJECT_CATEGORIES.iter().chain(PROJECT_STATUSES) {
            assert!(sql.contains(&format!("'{label}'")), "{label} missing in {sql}");
        }
    }
}
