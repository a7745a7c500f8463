use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub show_on_home: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_collections::Entity")]
    ProductCollections,
}

impl Related<super::product_collections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCollections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
