use sea_orm::entity::prelude::*;

/// Single-row table; the row always has id 1.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "store_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub store_name: String,
    pub logo_url: String,
    pub contact_phone: String,
    pub address: String,
    pub currency: String,
    pub announcement_text: String,
    pub announcement_active: bool,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub base_delivery_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub free_delivery_above: Option<Decimal>,
    pub delivery_text: String,
    pub primary_color: String,
    pub font_family: String,
    pub size_guide_html: String,
    pub cta_title: String,
    pub cta_subtitle: String,
    pub cta_image_url: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
