//! History Recorder Wrapper
//!
//! Appends each call's arguments and result to two store lists.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::store::SharedStore;
use crate::tracking::{CallArgs, Operation, Record};

/// List key holding rendered call arguments for `name`.
pub fn inputs_key(name: &str) -> String {
    format!("{}:inputs", name)
}

/// List key holding call results for `name`.
pub fn outputs_key(name: &str) -> String {
    format!("{}:outputs", name)
}

// == Recorded ==
/// Records the arguments of every call before running the inner operation,
/// and its result after.
///
/// The i-th input pairs with the i-th output only by list position. Calls
/// running concurrently can interleave their appends and break that pairing,
/// and a failed call leaves an input without an output.
pub struct Recorded<O> {
    inner: O,
    store: SharedStore,
}

impl<O: Operation> Recorded<O> {
    pub fn new(inner: O, store: SharedStore) -> Self {
        Self { inner, store }
    }

    /// Returns the wrapped operation.
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

#[async_trait]
impl<O> Operation for Recorded<O>
where
    O: Operation,
    O::Output: Record,
{
    type Args = O::Args;
    type Output = O::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output> {
        let name = self.inner.qualified_name();
        let input = args.repr();

        self.store.rpush(&inputs_key(name), input.as_bytes()).await?;

        let output = self.inner.call(args).await?;

        self.store.rpush(&outputs_key(name), &output.to_record()).await?;
        debug!("{}(*{}) recorded", name, input);

        Ok(output)
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
    async fn test_records_inputs_and_outputs_in_order() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::new().recorded(store.clone());

        op.call(Value::from("a")).await.unwrap();
        op.call(Value::from(7i64)).await.unwrap();

        let inputs = store.lrange("Echo.call:inputs", 0, -1).await.unwrap();
        let outputs = store.lrange("Echo.call:outputs", 0, -1).await.unwrap();

        assert_eq!(inputs, vec![b"('a',)".to_vec(), b"(7,)".to_vec()]);
        assert_eq!(outputs, vec![b"a".to_vec(), b"7".to_vec()]);
    }

    #[tokio::test]
    async fn test_failed_call_records_input_only() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::failing_on("bad").recorded(store.clone());

        assert!(op.call(Value::from("bad")).await.is_err());

        assert_eq!(store.lrange("Echo.call:inputs", 0, -1).await.unwrap().len(), 1);
        assert!(store
            .lrange("Echo.call:outputs", 0, -1)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_stacks_with_counter() {
        let store = Arc::new(MemoryStore::new());
        let op = Echo::new()
            .counted(store.clone())
            .recorded(store.clone());

        op.call(Value::from("x")).await.unwrap();
        op.call(Value::from("y")).await.unwrap();

        assert_eq!(op.qualified_name(), "Echo.call");
        assert_eq!(store.get("Echo.call").await.unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.lrange("Echo.call:outputs", 0, -1).await.unwrap().len(), 2);
        assert_eq!(op.inner().inner().calls(), 2);
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(inputs_key("Cache.store"), "Cache.store:inputs");
        assert_eq!(outputs_key("Cache.store"), "Cache.store:outputs");
    }
}
