use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Abouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Abouts::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Abouts::Bio).text().not_null())
                    .col(ColumnDef::new(Abouts::Photo).text().not_null())
                    .col(
                        ColumnDef::new(Abouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Abouts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Readers take the most recent entry
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_abouts_created_at")
                    .table(Abouts::Table)
                    .col(Abouts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_abouts_updated_at
                BEFORE UPDATE ON abouts
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_abouts_updated_at ON abouts")
            .await?;

        manager
            .drop_table(Table::drop().table(Abouts::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
enum Abouts {
    Table,
    Id,
    Name,
    Bio,
    Photo,
    CreatedAt,
    UpdatedAt,
}
