//! Call Counter Wrapper
//!
//! Counts invocations of an operation in the store.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::store::SharedStore;
use crate::tracking::Operation;

// == Counted ==
/// Increments the counter keyed by the inner operation's qualified name,
/// then runs the inner operation.
///
/// The increment happens before the call, so failed calls are counted too.
pub struct Counted<O> {
    inner: O,
    store: SharedStore,
}

impl<O: Operation> Counted<O> {
    pub fn new(inner: O, store: SharedStore) -> Self {
        Self { inner, store }
    }

    /// Returns the wrapped operation.
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

#[async_trait]
impl<O: Operation> Operation for Counted<O> {
    type Args = O::Args;
    type Output = O::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output> {
        let name = self.inner.qualified_name();
        let count = self.store.incr(name).await?;
        debug!("{} call #{}", name, count);
        self.inner.call(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KvStore, MemoryStore};
    use crate::tracking::test_support::Echo;
    use crate::tracking::OperationExt;
    use crate::value::Value;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_counts_each_call() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::new().counted(store.clone());

        for _ in 0..3 {
            op.call(Value::from("x")).await.unwrap();
        }

        assert_eq!(store.get("Echo.call").await.unwrap(), Some(b"3".to_vec()));
        assert_eq!(op.inner().calls(), 3);
    }

    #[tokio::test]
    async fn test_returns_inner_result_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::new().counted(store);

        assert_eq!(op.call(Value::from(42i64)).await.unwrap(), "42");
        assert_eq!(op.qualified_name(), "Echo.call");
    }

    #[tokio::test]
    async fn test_counts_failed_calls() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::failing_on("bad").counted(store.clone());

        assert!(op.call(Value::from("bad")).await.is_err());

        assert_eq!(store.get("Echo.call").await.unwrap(), Some(b"1".to_vec()));
    }

    #[tokio::test]
    async fn test_counter_failure_skips_call() {
        let store = Arc::new(MemoryStore::new());
        store.rpush("Echo.call", b"not a counter").await.unwrap();
        let op = Echo::new().counted(store);

        assert!(op.call(Value::from("x")).await.is_err());
        assert_eq!(op.inner().calls(), 0);
    }
}
