use thiserror::Error;

/// A requested entity was not found.
///
/// Intended for user-lookup implementations to signal that an
/// authenticated subject has no matching account record. It carries no
/// infrastructure detail and can cross layer boundaries unchanged.
///
/// # Example
/// ```
/// use pld_web::error::entity::NotFoundError;
///
/// let err = NotFoundError::new("User");
/// assert_eq!(err.to_string(), "User not found");
/// ```
#[derive(Debug, Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Name of the entity that was not found (e.g. `"User"`).
    pub entity: &'static str,
}

impl NotFoundError {
    /// Create a new `NotFoundError` for the specified entity.
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }
}

/// A backing service could not be reached.
///
/// Intended for user-lookup implementations whose store is temporarily
/// down. Callers propagate it as-is; the surrounding framework decides
/// what the requester sees.
///
/// # Example
/// ```
/// use pld_web::error::entity::UnavailableError;
///
/// let err = UnavailableError::new("user store");
/// assert_eq!(err.to_string(), "user store unavailable");
/// ```
#[derive(Debug, Error)]
#[error("{service} unavailable")]
pub struct UnavailableError {
    /// Name of the unreachable service (e.g. `"user store"`).
    pub service: &'static str,
}

impl UnavailableError {
    /// Create a new `UnavailableError` for the specified service.
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }
}
