use std::sync::Arc;

use anyhow::Result;

use crate::auth::Principal;
use crate::user::entity::User;
use crate::user::lookup::UserLookupService;

/// Resolves the current request's user for the rendering layer.
///
/// # Overview
///
/// `CurrentUserResolver` turns an optional request identity into the
/// `User` value the view layer renders:
///
/// - No principal → the anonymous placeholder, without touching the
///   lookup service
/// - A principal → whatever the [`UserLookupService`] returns, unmodified
///
/// The collaborator is supplied at construction, so any test double can
/// stand in without a framework runtime.
///
/// # Responsibilities
///
/// - Guarantee that resolution always yields a `User` value
/// - Delegate authenticated lookups to the injected service
///
/// # Non-Responsibilities
///
/// - Authentication (the principal is produced upstream)
/// - Error translation: lookup failures propagate unchanged
/// - Caching or retrying lookups
///
/// # Typical Usage
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use pld_web::user::{CurrentUserResolver, UserLookupService};
///
/// fn wire(lookup: Arc<dyn UserLookupService>) -> Arc<CurrentUserResolver> {
///     Arc::new(CurrentUserResolver::new(lookup))
/// }
/// ```
pub struct CurrentUserResolver {
    lookup: Arc<dyn UserLookupService>,
}

impl CurrentUserResolver {
    /// Constructs a resolver around the given lookup service.
    pub fn new(lookup: Arc<dyn UserLookupService>) -> Self {
        Self { lookup }
    }

    /// Resolves the user for the current request.
    ///
    /// ## Arguments
    ///
    /// - `principal`: The authenticated identity, or `None` for an
    ///   anonymous request.
    ///
    /// ## Returns
    ///
    /// A `User` value in every successful case. The anonymous path cannot
    /// fail and performs no external call.
    ///
    /// ## Errors
    ///
    /// Returns whatever error the lookup service produced, unchanged.
    pub async fn resolve(&self, principal: Option<&Principal>) -> Result<User> {
        match principal {
            None => Ok(User::anonymous()),
            Some(principal) => self.lookup.find_by_principal(principal).await,
        }
    }
}
