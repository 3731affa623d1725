//! Call inspection wrappers
//!
//! Each wrapper invokes a target, describes its arguments and result, and
//! writes one trace line on the logger's debug channel:
//!
//! ```text
//! [FnInspection] add <number, number> => 5 <number>
//! ```
//!
//! The eight public entry points cover three axes: free function or named
//! method, synchronous or asynchronous, shallow or detailed descriptions.
//!
//! Failures of the target (an `Err` return or a panic) are absorbed: the
//! logger's error channel receives the message and diagnostic trace, and the
//! wrapper returns `None`. The wrapper never panics or errors because of the
//! target. Method wrappers additionally reject unknown or non-invocable
//! members with an error before anything is invoked.

mod args;
mod method;
mod outcome;

pub use args::{capture_value, ArgList, Callable};
pub use method::{arg, AsyncMethod, Inspectable, Method, MemberLookup};
pub use outcome::IntoOutcome;

use crate::errors::{LogifyError, Result, TargetInvocationError};
use crate::logger::Logger;
use crate::shape::{Captured, Depth, JsonShapeFormatter, TypeFormatter};
use crate::{log_op_end, log_op_error, log_op_start};
use futures::FutureExt;
use logify_core_types::schema::OP_INSPECT;
use logify_core_types::LogLevel;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

/// Which wrapper produced a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionKind {
    Fn,
    AsyncFn,
    Method,
    AsyncMethod,
}

impl InspectionKind {
    /// Bracketed tag at the start of the trace line
    pub fn tag(self) -> &'static str {
        match self {
            InspectionKind::Fn => "FnInspection",
            InspectionKind::AsyncFn => "AsyncFnInspection",
            InspectionKind::Method => "MethodInspection",
            InspectionKind::AsyncMethod => "AsyncMethodInspection",
        }
    }
}

/// One successful inspection, rendered with `Display` as the trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: InspectionKind,
    pub name: String,
    pub arg_types: Vec<String>,
    pub result: String,
    pub result_type: String,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} <{}> => {} <{}>",
            self.kind.tag(),
            self.name,
            self.arg_types.join(", "),
            self.result,
            self.result_type
        )
    }
}

/// Runs inspections against a logger with a chosen type formatter.
///
/// The free functions in this module use [`JsonShapeFormatter`].
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'a> {
    logger: &'a Logger,
    formatter: &'a dyn TypeFormatter,
}

impl<'a> Inspector<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            formatter: &JsonShapeFormatter,
        }
    }

    pub fn with_formatter(mut self, formatter: &'a dyn TypeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Invoke `func` with `args` and trace it.
    pub fn call<F, A>(
        &self,
        depth: Depth,
        name: &str,
        func: F,
        args: A,
    ) -> Option<<F::Output as IntoOutcome>::Value>
    where
        A: ArgList,
        F: Callable<A>,
        F::Output: IntoOutcome,
    {
        let kind = InspectionKind::Fn;
        let started = self.start(kind, name);
        let captured = args.capture();

        let outcome = catch_unwind(AssertUnwindSafe(|| func.call(args)))
            .map_err(|payload| TargetInvocationError::from_panic(payload.as_ref()))
            .and_then(IntoOutcome::into_outcome);

        self.finish(kind, depth, name, &captured, outcome, started)
    }

    /// Invoke `func` with `args`, await its future and trace it.
    pub async fn call_async<F, A, Fut>(
        &self,
        depth: Depth,
        name: &str,
        func: F,
        args: A,
    ) -> Option<<Fut::Output as IntoOutcome>::Value>
    where
        A: ArgList,
        F: Callable<A, Output = Fut>,
        Fut: Future,
        Fut::Output: IntoOutcome,
    {
        let kind = InspectionKind::AsyncFn;
        let started = self.start(kind, name);
        let captured = args.capture();

        let outcome = match catch_unwind(AssertUnwindSafe(|| func.call(args))) {
            Ok(future) => AssertUnwindSafe(future)
                .catch_unwind()
                .await
                .map_err(|payload| TargetInvocationError::from_panic(payload.as_ref()))
                .and_then(IntoOutcome::into_outcome),
            Err(payload) => Err(TargetInvocationError::from_panic(payload.as_ref())),
        };

        self.finish(kind, depth, name, &captured, outcome, started)
    }

    /// Resolve `member` on `target`, invoke it with `args` and trace it.
    ///
    /// # Errors
    ///
    /// `MemberNotFound` or `MemberNotInvocable` when `member` cannot be
    /// invoked synchronously; the target is not touched in that case.
    pub fn call_method<T, A>(
        &self,
        depth: Depth,
        target: &mut T,
        member: &str,
        args: A,
    ) -> Result<Option<Value>>
    where
        T: Inspectable + ?Sized,
        A: ArgList,
    {
        let method = match target.lookup(member) {
            MemberLookup::Sync(method) => method,
            other => return Err(usage_error(&*target, member, &other)),
        };

        let kind = InspectionKind::Method;
        let started = self.start(kind, member);
        let captured = args.capture();
        let values: Vec<Value> = captured.iter().map(Captured::to_value).collect();

        let outcome = catch_unwind(AssertUnwindSafe(|| method(target, &values)))
            .map_err(|payload| TargetInvocationError::from_panic(payload.as_ref()))
            .and_then(IntoOutcome::into_outcome);

        Ok(self.finish(kind, depth, member, &captured, outcome, started))
    }

    /// Resolve `member` on `target`, await it with `args` and trace it.
    ///
    /// # Errors
    ///
    /// `MemberNotFound` or `MemberNotInvocable` when `member` cannot be
    /// invoked asynchronously; the target is not touched in that case.
    pub async fn call_method_async<T, A>(
        &self,
        depth: Depth,
        target: &mut T,
        member: &str,
        args: A,
    ) -> Result<Option<Value>>
    where
        T: Inspectable + ?Sized,
        A: ArgList,
    {
        let method = match target.lookup(member) {
            MemberLookup::Async(method) => method,
            other => return Err(usage_error(&*target, member, &other)),
        };

        let kind = InspectionKind::AsyncMethod;
        let started = self.start(kind, member);
        let captured = args.capture();
        let values: Vec<Value> = captured.iter().map(Captured::to_value).collect();

        // The member is called on first poll, so a panic before it returns
        // its future is caught by the same guard.
        let outcome = AssertUnwindSafe(async { method(target, &values).await })
            .catch_unwind()
            .await
            .map_err(|payload| TargetInvocationError::from_panic(payload.as_ref()))
            .and_then(IntoOutcome::into_outcome);

        Ok(self.finish(kind, depth, member, &captured, outcome, started))
    }

    /// Build the record for a successful call.
    pub fn record(
        &self,
        kind: InspectionKind,
        depth: Depth,
        name: &str,
        args: &[Captured],
        result: &Captured,
    ) -> TraceRecord {
        TraceRecord {
            kind,
            name: name.to_string(),
            arg_types: args
                .iter()
                .map(|arg| self.formatter.describe_captured(arg, depth))
                .collect(),
            result: self.formatter.render_captured(result),
            result_type: self.formatter.describe_captured(result, depth),
        }
    }

    fn start(&self, kind: InspectionKind, name: &str) -> Instant {
        log_op_start!(OP_INSPECT, callable = name, inspection_kind = kind.tag());
        Instant::now()
    }

    fn finish<V: serde::Serialize>(
        &self,
        kind: InspectionKind,
        depth: Depth,
        name: &str,
        args: &[Captured],
        outcome: std::result::Result<V, TargetInvocationError>,
        started: Instant,
    ) -> Option<V> {
        let duration_ms = started.elapsed().as_millis() as u64;
        match outcome {
            Ok(value) => {
                let record = self.record(kind, depth, name, args, &capture_value(&value));
                self.logger.debug(&record.to_string());
                log_op_end!(OP_INSPECT, duration_ms = duration_ms, callable = name);
                Some(value)
            }
            Err(err) => {
                self.logger
                    .log_with(LogLevel::Error, err.message(), &[&err.trace()]);
                log_op_error!(OP_INSPECT, &err, duration_ms = duration_ms, callable = name);
                None
            }
        }
    }
}

fn usage_error<T: Inspectable + ?Sized>(
    target: &T,
    member: &str,
    lookup: &MemberLookup<T>,
) -> LogifyError {
    let target = target.type_name().to_string();
    let member = member.to_string();
    match lookup {
        MemberLookup::NotFound => LogifyError::MemberNotFound { target, member },
        _ => LogifyError::MemberNotInvocable { target, member },
    }
}

/// Trace a synchronous function with shallow type tags.
pub fn inspect_fn<F, A>(
    logger: &Logger,
    name: &str,
    func: F,
    args: A,
) -> Option<<F::Output as IntoOutcome>::Value>
where
    A: ArgList,
    F: Callable<A>,
    F::Output: IntoOutcome,
{
    Inspector::new(logger).call(Depth::Shallow, name, func, args)
}

/// Trace a synchronous function with structural type descriptions.
pub fn inspect_fn_detailed<F, A>(
    logger: &Logger,
    name: &str,
    func: F,
    args: A,
) -> Option<<F::Output as IntoOutcome>::Value>
where
    A: ArgList,
    F: Callable<A>,
    F::Output: IntoOutcome,
{
    Inspector::new(logger).call(Depth::Detailed, name, func, args)
}

/// Trace an asynchronous function with shallow type tags.
pub async fn inspect_fn_async<F, A, Fut>(
    logger: &Logger,
    name: &str,
    func: F,
    args: A,
) -> Option<<Fut::Output as IntoOutcome>::Value>
where
    A: ArgList,
    F: Callable<A, Output = Fut>,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    Inspector::new(logger)
        .call_async(Depth::Shallow, name, func, args)
        .await
}

/// Trace an asynchronous function with structural type descriptions.
pub async fn inspect_fn_async_detailed<F, A, Fut>(
    logger: &Logger,
    name: &str,
    func: F,
    args: A,
) -> Option<<Fut::Output as IntoOutcome>::Value>
where
    A: ArgList,
    F: Callable<A, Output = Fut>,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    Inspector::new(logger)
        .call_async(Depth::Detailed, name, func, args)
        .await
}

/// Trace a synchronous member of `target` with shallow type tags.
///
/// # Errors
///
/// `MemberNotFound` or `MemberNotInvocable`, before invocation.
pub fn inspect_method<T, A>(
    logger: &Logger,
    target: &mut T,
    member: &str,
    args: A,
) -> Result<Option<Value>>
where
    T: Inspectable + ?Sized,
    A: ArgList,
{
    Inspector::new(logger).call_method(Depth::Shallow, target, member, args)
}

/// Trace a synchronous member of `target` with structural type descriptions.
///
/// # Errors
///
/// `MemberNotFound` or `MemberNotInvocable`, before invocation.
pub fn inspect_method_detailed<T, A>(
    logger: &Logger,
    target: &mut T,
    member: &str,
    args: A,
) -> Result<Option<Value>>
where
    T: Inspectable + ?Sized,
    A: ArgList,
{
    Inspector::new(logger).call_method(Depth::Detailed, target, member, args)
}

/// Trace an asynchronous member of `target` with shallow type tags.
///
/// # Errors
///
/// `MemberNotFound` or `MemberNotInvocable`, before invocation.
pub async fn inspect_method_async<T, A>(
    logger: &Logger,
    target: &mut T,
    member: &str,
    args: A,
) -> Result<Option<Value>>
where
    T: Inspectable + ?Sized,
    A: ArgList,
{
    Inspector::new(logger)
        .call_method_async(Depth::Shallow, target, member, args)
        .await
}

/// Trace an asynchronous member of `target` with structural type descriptions.
///
/// # Errors
///
/// `MemberNotFound` or `MemberNotInvocable`, before invocation.
pub async fn inspect_method_async_detailed<T, A>(
    logger: &Logger,
    target: &mut T,
    member: &str,
    args: A,
) -> Result<Option<Value>>
where
    T: Inspectable + ?Sized,
    A: ArgList,
{
    Inspector::new(logger)
        .call_method_async(Depth::Detailed, target, member, args)
        .await
}
