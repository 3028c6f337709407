use chrono::NaiveDate;
use sea_orm::{DbErr, QueryResult};

use crate::domain::pantry::entities::{StockEntry, UserDietaryProfile};

pub fn stock_entry_from_row(row: &QueryResult) -> Result<StockEntry, DbErr> {
    let ingredient_name: String = row.try_get("", "ingredient_name")?;
    let is_available: bool = row.try_get("", "is_available")?;
    let quantity: Option<String> = row.try_get("", "quantity")?;
    let expires_on: Option<NaiveDate> = row.try_get("", "expires_on")?;

    Ok(StockEntry {
        ingredient_name,
        is_available,
        quantity,
        expires_on,
    })
}

pub fn profile_from_row(row: &QueryResult) -> Result<UserDietaryProfile, DbErr> {
    let diet: Option<String> = row.try_get("", "diet")?;
    let allergies: Vec<String> = row.try_get("", "allergies")?;

    Ok(UserDietaryProfile { diet, allergies })
}
