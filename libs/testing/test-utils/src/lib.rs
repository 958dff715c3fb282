//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the workspace migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("user", "main");
//!     let email = builder.email("main", "example.com");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique display name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(42);
    /// assert_eq!(builder.name("user", "main"), "test-user-42-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a unique email address on `domain`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(42);
    /// assert_eq!(builder.email("alice", "example.com"), "alice-42@example.com");
    /// ```
    pub fn email(&self, local: &str, domain: &str) -> String {
        format!("{}-{}@{}", local, self.seed, domain)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::collections::BTreeSet;
    use std::fmt::Debug;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two collections hold the same items, ignoring order
    pub fn assert_same_items<T, K>(actual: &[T], expected: &[K], key: impl Fn(&T) -> K, context: &str)
    where
        K: Ord + Debug + Clone,
    {
        let actual: BTreeSet<K> = actual.iter().map(key).collect();
        let expected: BTreeSet<K> = expected.iter().cloned().collect();
        assert_eq!(actual, expected, "{}", context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("user", "test"), builder2.name("user", "test"));
        assert_eq!(
            builder1.email("a", "example.com"),
            builder2.email("a", "example.com")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(
            builder1.email("a", "example.com"),
            builder2.email("a", "example.com")
        );
    }

    #[test]
    fn test_assert_same_items_ignores_order() {
        let actual = vec![(2, "b"), (1, "a")];
        assertions::assert_same_items(&actual, &[1, 2], |(id, _)| *id, "ids");
    }

    #[test]
    #[should_panic(expected = "expected Some")]
    fn test_assert_some_panics_on_none() {
        assertions::assert_some::<i32>(None, "lookup");
    }
}
