//! Tracking Module
//!
//! Instrumentation wrappers around store-backed operations:
//! - [`Counted`] increments a per-operation call counter
//! - [`Recorded`] appends call arguments and results to history lists
//! - [`replay`] reads both back into a [`ReplayReport`]
//!
//! Wrappers take an [`Operation`] and are themselves operations with the same
//! arguments and output, so they stack:
//!
//! ```ignore
//! let op = raw_store.counted(store.clone()).recorded(store.clone());
//! ```

mod counter;
mod history;
mod report;

use async_trait::async_trait;

use crate::error::Result;
use crate::store::SharedStore;
use crate::value::Value;

pub use counter::Counted;
pub use history::{inputs_key, outputs_key, Recorded};
pub use report::{replay, ReplayReport};

// == Operation ==
/// A named asynchronous operation that tracking wrappers can decorate.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Positional arguments of one call.
    type Args: CallArgs + Send + 'static;
    /// Result of one call.
    type Output: Send + 'static;

    /// Stable identifier used to key counters and history lists.
    fn qualified_name(&self) -> &str;

    /// Runs the operation.
    async fn call(&self, args: Self::Args) -> Result<Self::Output>;
}

// == Operation Extensions ==
/// Fluent constructors for wrapper stacks.
pub trait OperationExt: Operation + Sized {
    /// Wraps `self` with a call counter kept in `store`.
    fn counted(self, store: SharedStore) -> Counted<Self> {
        Counted::new(self, store)
    }

    /// Wraps `self` with a call history kept in `store`.
    fn recorded(self, store: SharedStore) -> Recorded<Self> {
        Recorded::new(self, store)
    }
}

impl<O: Operation> OperationExt for O {}

// == Call Arguments ==
/// Renders a call's positional arguments as a tuple literal.
pub trait CallArgs {
    fn repr(&self) -> String;
}

/// Formats literals as a tuple, with the trailing comma of a 1-tuple.
fn tuple_repr<I: IntoIterator<Item = String>>(items: I) -> String {
    let items: Vec<String> = items.into_iter().collect();
    match items.len() {
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}

impl CallArgs for () {
    fn repr(&self) -> String {
        "()".to_string()
    }
}

impl CallArgs for Value {
    fn repr(&self) -> String {
        tuple_repr([self.literal()])
    }
}

impl CallArgs for Vec<Value> {
    fn repr(&self) -> String {
        tuple_repr(self.iter().map(Value::literal))
    }
}

impl CallArgs for String {
    fn repr(&self) -> String {
        Value::Str(self.clone()).repr()
    }
}

// == Record ==
/// Converts an operation result to the bytes kept in its history list.
pub trait Record {
    fn to_record(&self) -> Vec<u8>;
}

impl Record for String {
    fn to_record(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Record for Vec<u8> {
    fn to_record(&self) -> Vec<u8> {
        self.clone()
    }
}

impl Record for i64 {
    fn to_record(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl Record for Value {
    fn to_record(&self) -> Vec<u8> {
        self.to_bytes()
    }
}
