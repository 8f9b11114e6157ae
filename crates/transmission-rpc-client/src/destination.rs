//! Destinations the `arguments` of a successful response are decoded into.
//!
//! The caller picks one per exchange:
//!
//! - [`Discard`] for fire-and-forget methods,
//! - [`StringSink`] when `arguments` is a JSON string to be written out raw,
//! - [`Typed`] to decode `arguments` structurally into a `serde` type.
//!
//! The decoded value is returned by value, so a failed exchange never leaves a
//! partially populated destination behind.

use std::{fmt, io::Write, marker::PhantomData};

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use transmission_rpc_types::RpcError;

/// Receives the raw `arguments` of a successful response.
pub trait Destination {
    /// Value produced once the arguments are accepted.
    type Output;

    /// Consumes the raw `arguments` of a `method` response, `None` when the daemon omitted them.
    fn accept(self, method: &str, arguments: Option<&RawValue>) -> Result<Self::Output, RpcError>;
}

/// Ignores the response arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Destination for Discard {
    type Output = ();

    fn accept(self, _method: &str, _arguments: Option<&RawValue>) -> Result<(), RpcError> {
        Ok(())
    }
}

/// Writes the response arguments, which must be a JSON string, to a writer.
#[derive(Debug)]
pub struct StringSink<W>(pub W);

impl<W: Write> Destination for StringSink<W> {
    type Output = W;

    fn accept(self, method: &str, arguments: Option<&RawValue>) -> Result<W, RpcError> {
        let Self(mut sink) = self;
        let raw = arguments.ok_or_else(|| RpcError::decode(method, "missing arguments"))?;
        let value: String =
            serde_json::from_str(raw.get()).map_err(|e| RpcError::decode(method, e))?;
        sink.write_all(value.as_bytes())
            .map_err(|e| RpcError::Io(e.to_string()))?;
        Ok(sink)
    }
}

/// Decodes the response arguments into `T`.
pub struct Typed<T>(PhantomData<fn() -> T>);

impl<T> Typed<T> {
    /// Destination decoding into `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Typed")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> Destination for Typed<T> {
    type Output = T;

    fn accept(self, method: &str, arguments: Option<&RawValue>) -> Result<T, RpcError> {
        let raw = arguments.ok_or_else(|| RpcError::decode(method, "missing arguments"))?;
        serde_json::from_str(raw.get()).map_err(|e| RpcError::decode(method, e))
    }
}
