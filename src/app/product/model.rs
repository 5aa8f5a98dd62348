//! 产品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `createdAt` 的输出格式
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// products 表的一行
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// 已校验的新建产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

/// 部分更新；`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available.is_none()
    }

    /// 把变更应用到实体上，`id` 与 `created_at` 不变
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(available) = self.available {
            product.available = available;
        }
    }
}

/// 对外输出的产品表示
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub created_at: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            created_at: product.created_at.format(CREATED_AT_FORMAT).to_string(),
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Product {
        Product {
            id: 7,
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: 19.5,
            available: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_view_formats_created_at() {
        let view = ProductView::from(sample());
        assert_eq!(view.created_at, "2024-03-09 08:05:01");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["createdAt"], "2024-03-09 08:05:01");
        assert_eq!(json["price"], 19.5);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_apply_changes_keeps_identity() {
        let mut product = sample();
        let changes = ProductChanges {
            price: Some(25.0),
            available: Some(false),
            ..Default::default()
        };

        changes.apply_to(&mut product);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.description, "Desk lamp");
        assert_eq!(product.price, 25.0);
        assert!(!product.available);
        assert_eq!(product.created_at, sample().created_at);
    }

    #[test]
    fn test_empty_changes() {
        assert!(ProductChanges::default().is_empty());
        assert!(!ProductChanges {
            name: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
