use sea_orm::entity::prelude::*;

/// User account record. Email is the unique login identifier; the username
/// is a display name and may collide.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
    #[sea_orm(has_many = "super::session_members::Entity")]
    SessionMembers,
    #[sea_orm(has_many = "super::retro_action_items::Entity")]
    RetroActionItems,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
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

impl ActiveModelBehavior for ActiveModel {}
