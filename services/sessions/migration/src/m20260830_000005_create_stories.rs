use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stories::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Stories::Description).string_len(100))
                    // Deliberately unconstrained: negative, zero, and large
                    // estimates are all valid.
                    .col(ColumnDef::new(Stories::StoryPoints).integer().not_null())
                    .col(ColumnDef::new(Stories::SessionId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Stories::Table, Stories::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Stories {
    Table,
    Id,
    Title,
    Description,
    StoryPoints,
    SessionId,
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
}
