use anyhow::Result;
use async_trait::async_trait;

use crate::auth::Principal;
use crate::user::entity::User;

/// Port trait for resolving an authenticated principal to a full user
/// record.
///
/// This trait represents an **abstraction over the user store**.
/// Implementations may resolve the principal via:
///
/// - A relational database
/// - A session store
/// - Token introspection against an identity provider
///
/// ## Design notes
///
/// - This trait is intentionally **minimal**:
///   - It receives the [`Principal`] explicitly
///   - It returns a generic `Result<User>`
///
/// - The trait does **not**:
///   - Decide how anonymous requests are handled (the resolver does)
///   - Cache or retry lookups
///   - Know about configuration sources
///
/// Failure semantics are owned entirely by the implementation. Typed
/// errors such as [`NotFoundError`](crate::error::entity::NotFoundError)
/// and [`UnavailableError`](crate::error::entity::UnavailableError) are
/// available for common cases; callers propagate whatever is returned.
///
/// ## Thread safety
///
/// Implementations must be:
/// - `Send`: usable across thread boundaries
/// - `Sync`: safely shared via `Arc`
///
/// This allows a lookup service to be injected into async runtimes,
/// middleware, background tasks, etc.
#[async_trait]
pub trait UserLookupService: Send + Sync {
    /// Resolves the given principal to a user record.
    ///
    /// ## Arguments
    ///
    /// - `principal`: The authenticated identity for the current request.
    ///
    /// ## Returns
    ///
    /// - `Ok(User)` with the record the rendering layer should see
    /// - `Err(_)` if the store is unreachable or the identity is unknown
    async fn find_by_principal(&self, principal: &Principal) -> Result<User>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A test double for `UserLookupService`.
    ///
    /// Records every principal passed to it and returns a fixed user,
    /// allowing tests to verify that:
    ///
    /// - `find_by_principal` is called
    /// - The correct `Principal` is passed
    ///
    /// No I/O or external systems are involved.
    struct RecordingLookup {
        user: User,
        seen: Mutex<Vec<String>>,
    }

    impl RecordingLookup {
        fn returning(user: User) -> Self {
            Self {
                user,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserLookupService for RecordingLookup {
        async fn find_by_principal(&self, principal: &Principal) -> Result<User> {
            self.seen.lock().unwrap().push(principal.subject.clone());
            Ok(self.user.clone())
        }
    }

    #[tokio::test]
    async fn lookup_contract_passes_principal_through() {
        let lookup = RecordingLookup::returning(User::new("alice"));

        let found = lookup
            .find_by_principal(&Principal::new("alice"))
            .await
            .expect("lookup should succeed");

        assert_eq!(found, User::new("alice"));

        let seen = lookup.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["alice"]);
    }

    #[tokio::test]
    async fn lookup_can_be_shared_across_owners() {
        let lookup: Arc<dyn UserLookupService> =
            Arc::new(RecordingLookup::returning(User::new("bob")));
        let lookup_clone = lookup.clone();

        lookup.find_by_principal(&Principal::new("bob")).await.unwrap();
        lookup_clone
            .find_by_principal(&Principal::new("bob"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn lookup_failures_are_plain_errors() {
        struct FailingLookup;

        #[async_trait]
        impl UserLookupService for FailingLookup {
            async fn find_by_principal(&self, _principal: &Principal) -> Result<User> {
                Err(anyhow::anyhow!("user store unavailable"))
            }
        }

        let err = FailingLookup
            .find_by_principal(&Principal::new("bob"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "user store unavailable");
    }
}
