use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{entities::UserDietaryProfile, ports::ProfileRepository},
    rules::entities::DietaryRules,
};

/// Aggregate that the domain service traits are implemented on.
///
/// Holds one adapter per port plus the dietary rules, which are loaded once and
/// shared read-only between every request.
#[derive(Clone)]
pub struct Service<RR, IC, SR, PR, RS> {
    pub(crate) recipe_repository: RR,
    pub(crate) ingredient_catalog: IC,
    pub(crate) stock_repository: SR,
    pub(crate) profile_repository: PR,
    pub(crate) recipe_suggester: RS,
    pub(crate) rules: Arc<DietaryRules>,
    pub(crate) suggestion_top_n: usize,
}

impl<RR, IC, SR, PR, RS> Service<RR, IC, SR, PR, RS> {
    pub fn new(
        recipe_repository: RR,
        ingredient_catalog: IC,
        stock_repository: SR,
        profile_repository: PR,
        recipe_suggester: RS,
        rules: Arc<DietaryRules>,
    ) -> Self {
        Self {
            recipe_repository,
            ingredient_catalog,
            stock_repository,
            profile_repository,
            recipe_suggester,
            rules,
            suggestion_top_n: 3,
        }
    }

    pub fn with_suggestion_top_n(mut self, top_n: usize) -> Self {
        self.suggestion_top_n = top_n.max(1);
        self
    }

    pub fn rules(&self) -> &DietaryRules {
        &self.rules
    }
}

impl<RR, IC, SR, PR, RS> Service<RR, IC, SR, PR, RS>
where
    PR: ProfileRepository,
{
    /// The user's profile, or no restrictions when they have none.
    pub(crate) async fn dietary_profile(
        &self,
        user_id: Uuid,
    ) -> Result<UserDietaryProfile, CoreError> {
        let profile = self.profile_repository.get_user_profile(user_id).await?;

        Ok(profile.unwrap_or_else(|| {
            debug!(%user_id, "no dietary profile, applying no restrictions");
            UserDietaryProfile::unrestricted()
        }))
    }
}
