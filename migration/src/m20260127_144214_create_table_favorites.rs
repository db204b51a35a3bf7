use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create favorites table
        // =====================================================
        manager.create_table(create_table()).await?;

        // =====================================================
        // Constraints & indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE favorites
                ADD CONSTRAINT chk_favorites_media_type
                CHECK (media_type IN ('tv', 'movie'));
                "#,
            )
            .await?;

        // Listing is always "my favorites, newest first"
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_favorites_user_created
                ON favorites (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Duplicate check on add-favorite
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_favorites_user_media
                ON favorites (user_id, media_id);
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
                DROP INDEX IF EXISTS idx_favorites_user_created;
                DROP INDEX IF EXISTS idx_favorites_user_media;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Favorites::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Favorites::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Favorites::UserId).uuid().not_null())
        .col(ColumnDef::new(Favorites::MediaType).string_len(10).not_null())
        .col(ColumnDef::new(Favorites::MediaId).text().not_null())
        .col(ColumnDef::new(Favorites::MediaTitle).text().not_null())
        .col(ColumnDef::new(Favorites::MediaPoster).text().not_null())
        .col(ColumnDef::new(Favorites::MediaRate).double().not_null())
        .col(
            ColumnDef::new(Favorites::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Favorites::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_favorites_user_id")
                .from(Favorites::Table, Favorites::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    MediaType,
    MediaId,
    MediaTitle,
    MediaPoster,
    MediaRate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
