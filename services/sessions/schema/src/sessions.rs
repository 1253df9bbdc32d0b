use sea_orm::entity::prelude::*;

/// Collaborative room record. `kind` holds the stored code ("R" retro,
/// "P" poker) and is decoded at the application boundary. `owner_id` is
/// nulled when the owning user is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub owner_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::session_members::Entity")]
    SessionMembers,
    #[sea_orm(has_many = "super::retro_action_items::Entity")]
    RetroActionItems,
    #[sea_orm(has_many = "super::stories::Entity")]
    Stories,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::session_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionMembers.def()
    }
}

impl Related<super::retro_action_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RetroActionItems.def()
    }
}

impl Related<super::stories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
