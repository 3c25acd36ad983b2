//! Shared test infrastructure for the domain crates.
//!
//! - `TestMongo`: throwaway MongoDB container, one fresh database per instance
//! - `TestDataBuilder`: deterministic names derived from the test name
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let repo = MongoProductRepository::new(&mongo.database());
//!     let name = TestDataBuilder::from_test_name("my_mongo_test").name("product", "main");
//! }
//! ```

mod mongo;

pub use mongo::TestMongo;

/// Deterministic test data keyed by a seed
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name, so reruns produce the same data
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-{prefix}-{seed}-{suffix}`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A user name unique to this test
    pub fn user_name(&self, suffix: &str) -> String {
        format!("user_{}_{}", self.seed, suffix)
    }
}
