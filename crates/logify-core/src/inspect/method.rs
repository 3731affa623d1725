//! Named-member lookup for method inspection
//!
//! A type opts into method inspection by implementing [`Inspectable`]: given
//! a member name it reports whether that member is invocable, and if so hands
//! back a function pointer taking the instance and the captured arguments.
//!
//! ```
//! use logify_core::inspect::{arg, Inspectable, MemberLookup};
//! use serde_json::{json, Value};
//!
//! struct Counter {
//!     count: i64,
//! }
//!
//! impl Counter {
//!     fn add(&mut self, args: &[Value]) -> anyhow::Result<Value> {
//!         self.count += arg::<i64>(args, 0)?;
//!         Ok(json!(self.count))
//!     }
//! }
//!
//! impl Inspectable for Counter {
//!     fn lookup(&self, member: &str) -> MemberLookup<Self> {
//!         match member {
//!             "add" => MemberLookup::Sync(Counter::add),
//!             "count" => MemberLookup::NotInvocable,
//!             _ => MemberLookup::NotFound,
//!         }
//!     }
//! }
//! ```

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Synchronous member
pub type Method<T> = fn(&mut T, &[Value]) -> anyhow::Result<Value>;

/// Asynchronous member, borrowing the instance until it settles
pub type AsyncMethod<T> =
    for<'a> fn(&'a mut T, &'a [Value]) -> BoxFuture<'a, anyhow::Result<Value>>;

/// Result of resolving a member name on an instance
pub enum MemberLookup<T: ?Sized> {
    Sync(Method<T>),
    Async(AsyncMethod<T>),
    /// The member exists but holds data, not behaviour
    NotInvocable,
    NotFound,
}

impl<T: ?Sized> std::fmt::Debug for MemberLookup<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MemberLookup::Sync(_) => "Sync",
            MemberLookup::Async(_) => "Async",
            MemberLookup::NotInvocable => "NotInvocable",
            MemberLookup::NotFound => "NotFound",
        };
        f.write_str(name)
    }
}

/// Capability for exposing named members to the inspection wrappers.
pub trait Inspectable {
    fn lookup(&self, member: &str) -> MemberLookup<Self>;

    /// Name used in usage errors
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Deserialize the argument at `index`.
///
/// # Errors
///
/// When the argument is missing or does not have the expected shape.
pub fn arg<T: DeserializeOwned>(args: &[Value], index: usize) -> anyhow::Result<T> {
    let value = args
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("missing argument {index} (got {})", args.len()))?;
    serde_json::from_value(value.clone())
        .map_err(|e| anyhow::anyhow!("argument {index} has the wrong shape: {e}"))
}
