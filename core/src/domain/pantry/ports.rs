use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::entities::{UserDietaryProfile, UserIngredientStock},
};

#[cfg_attr(test, mockall::automock)]
pub trait StockRepository: Send + Sync {
    fn get_user_stock(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserIngredientStock, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// `None` when the user never created a profile.
    fn get_user_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserDietaryProfile>, CoreError>> + Send;
}
