use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::Title).string_len(30).not_null())
                    .col(ColumnDef::new(Sessions::Description).string_len(100))
                    // "R" or "P"; nullable for untyped sessions.
                    .col(ColumnDef::new(Sessions::Kind).string_len(1))
                    .col(ColumnDef::new(Sessions::OwnerId).big_integer())
                    // A session survives its owner's deletion with owner
                    // nulled out.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sessions::Table, Sessions::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
    Title,
    Description,
    Kind,
    OwnerId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
