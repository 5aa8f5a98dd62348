//! 产品请求体
//!
//! 必填字段按“真值”判断：空字符串与 `price == 0` 视为缺失，
//! `available` 只要求出现，`false` 也是有效值。

use serde::Deserialize;
use validator::Validate;

use super::model::{NewProduct, ProductChanges};
use crate::core::error::CoreError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub price: Option<f64>,

    pub available: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

fn is_blank_price(price: f64) -> bool {
    price == 0.0
}

impl CreateProductRequest {
    /// 校验并转换为 `NewProduct`，任一必填字段缺失都返回 `Invalid data`
    pub fn into_new_product(self) -> Result<NewProduct, CoreError> {
        self.validate().map_err(|_| CoreError::invalid_data())?;

        let (Some(name), Some(description), Some(price), Some(available)) =
            (self.name, self.description, self.price, self.available)
        else {
            return Err(CoreError::invalid_data());
        };
        if is_blank_price(price) {
            return Err(CoreError::invalid_data());
        }

        Ok(NewProduct {
            name,
            description,
            price,
            available,
        })
    }
}

impl UpdateProductRequest {
    /// 只保留有值的字段，空字符串与零价格被忽略
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name.filter(|s| !s.is_empty()),
            description: self.description.filter(|s| !s.is_empty()),
            price: self.price.filter(|p| !is_blank_price(*p)),
            available: self.available,
        }
    }
}
