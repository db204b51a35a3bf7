use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE reviews
                ADD CONSTRAINT chk_reviews_media_type
                CHECK (media_type IN ('tv', 'movie'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_reviews_user_created
                ON reviews (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Per-media review listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_reviews_media
                ON reviews (media_type, media_id);
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
                DROP INDEX IF EXISTS idx_reviews_user_created;
                DROP INDEX IF EXISTS idx_reviews_media;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Reviews::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Reviews::UserId).uuid().not_null())
        .col(ColumnDef::new(Reviews::Content).text().not_null())
        .col(ColumnDef::new(Reviews::MediaType).string_len(10).not_null())
        .col(ColumnDef::new(Reviews::MediaId).text().not_null())
        .col(ColumnDef::new(Reviews::MediaTitle).text().not_null())
        .col(ColumnDef::new(Reviews::MediaPoster).text().not_null())
        .col(
            ColumnDef::new(Reviews::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Reviews::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_reviews_user_id")
                .from(Reviews::Table, Reviews::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    UserId,
    Content,
    MediaType,
    MediaId,
    MediaTitle,
    MediaPoster,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_media_columns_have_no_length_cap() {
        let sql = create_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#""media_id" text NOT NULL"#), "{sql}");
        assert!(sql.contains(r#""content" text NOT NULL"#), "{sql}");
        assert!(!sql.contains("varchar(64)"), "{sql}");
    }
}
