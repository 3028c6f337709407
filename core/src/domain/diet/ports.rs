use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, diet::value_objects::DietSelection};

#[cfg_attr(test, mockall::automock)]
pub trait DietService: Send + Sync {
    /// Catalog diets that users can pick, split into hard and soft.
    fn diet_options(&self) -> impl Future<Output = Result<DietSelection, CoreError>> + Send;
}
