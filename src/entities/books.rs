use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub isbn: String,

    pub title: String,

    pub author: String,

    pub category: Option<String>,

    pub publisher: Option<String>,

    pub issue_date: Option<Date>,

    /// Format and page count, free text
    #[sea_orm(column_type = "Text", nullable)]
    pub detail: Option<String>,

    pub price: Option<i32>,

    pub cover_image_url: Option<String>,

    pub created_at: String,

    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
