use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(SessionMembers::Table)
                    .col(SessionMembers::MemberId)
                    .name("idx_session_members_member_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(RetroActionItems::Table)
                    .col(RetroActionItems::SessionId)
                    .name("idx_retro_action_items_session_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(RetroActionItems::Table)
                    .col(RetroActionItems::OwnerId)
                    .name("idx_retro_action_items_owner_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Stories::Table)
                    .col(Stories::SessionId)
                    .name("idx_stories_session_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_stories_session_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_retro_action_items_owner_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_retro_action_items_session_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_session_members_member_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum SessionMembers {
    Table,
    MemberId,
}

#[derive(Iden)]
enum RetroActionItems {
    Table,
    SessionId,
    OwnerId,
}

#[derive(Iden)]
enum Stories {
    Table,
    SessionId,
}
