use sea_orm_migration::prelude::*;

use crate::labels::EMPLOYMENT_TYPES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(experiences_table()).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_experiences_display_order")
                    .table(Experiences::Table)
                    .col(Experiences::DisplayOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).if_exists().to_owned())
            .await
    }
}

fn experiences_table() -> TableCreateStatement {
    Table::create()
        .table(Experiences::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Experiences::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Experiences::Role).string_len(100).not_null())
        .col(ColumnDef::new(Experiences::Company).string_len(100).not_null())
        .col(ColumnDef::new(Experiences::Period).string().not_null())
        .col(ColumnDef::new(Experiences::Duration).string().not_null())
        .col(ColumnDef::new(Experiences::Location).string().not_null())
        .col(
            ColumnDef::new(Experiences::EmploymentType)
                .string()
                .not_null()
                .check(
                    Expr::col(Experiences::EmploymentType)
                        .is_in(EMPLOYMENT_TYPES.iter().copied()),
                ),
        )
        .col(
            ColumnDef::new(Experiences::Description)
                .string_len(300)
                .not_null(),
        )
        .col(
            ColumnDef::new(Experiences::LongDescription)
                .string_len(1000)
                .not_null(),
        )
        .col(
            ColumnDef::new(Experiences::Achievements)
                .json_binary()
                .not_null(),
        )
        .col(
            ColumnDef::new(Experiences::Technologies)
                .json_binary()
                .not_null(),
        )
        .col(ColumnDef::new(Experiences::Metrics).json_binary().not_null())
        .col(ColumnDef::new(Experiences::Color).string())
        .col(ColumnDef::new(Experiences::BgColor).string())
        .col(ColumnDef::new(Experiences::BorderColor).string())
        .col(
            ColumnDef::new(Experiences::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Experiences::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Experiences::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    Role,
    Company,
    Period,
    Duration,
    Location,
    EmploymentType,
    Description,
    LongDescription,
    Achievements,
    Technologies,
    Metrics,
    Color,
    BgColor,
    BorderColor,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
