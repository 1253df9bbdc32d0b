use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SessionMembers::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionMembers::MemberId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SessionMembers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // RESTRICT: a session or user with roster rows cannot be
                    // deleted out from under them.
                    .foreign_key(
                        ForeignKey::create()
                            .from(SessionMembers::Table, SessionMembers::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SessionMembers::Table, SessionMembers::MemberId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // One roster row per (session, member).
        manager
            .create_index(
                Index::create()
                    .table(SessionMembers::Table)
                    .col(SessionMembers::SessionId)
                    .col(SessionMembers::MemberId)
                    .unique()
                    .name("uq_session_members_session_id_member_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionMembers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SessionMembers {
    Table,
    Id,
    SessionId,
    MemberId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
