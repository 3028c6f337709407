use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shopping::value_objects::{AugmentShoppingListInput, ShoppingListAugmentation},
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingService: Send + Sync {
    /// Ingredients the selected recipes need that the user does not have.
    fn augment_shopping_list(
        &self,
        input: AugmentShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingListAugmentation, CoreError>> + Send;
}
