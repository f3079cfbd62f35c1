use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub wholesale_price: i64,
    pub retail_price: i64,
    pub owner_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemPublic {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub wholesale_price: i64,
    pub retail_price: i64,
    pub owner_id: i64,
}

impl From<&ItemModel> for ItemPublic {
    fn from(item: &ItemModel) -> Self {
        ItemPublic {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            wholesale_price: item.wholesale_price,
            retail_price: item.retail_price,
            owner_id: item.owner_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemCreate {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub wholesale_price: i64,
    #[serde(default)]
    pub retail_price: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub wholesale_price: Option<i64>,
    pub retail_price: Option<i64>,
}

impl ItemUpdate {
    pub fn apply(&self, item: &mut ItemModel) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
        if let Some(wholesale_price) = self.wholesale_price {
            item.wholesale_price = wholesale_price;
        }
        if let Some(retail_price) = self.retail_price {
            item.retail_price = retail_price;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsPublic {
    pub data: Vec<ItemPublic>,
    pub count: i64,
}
