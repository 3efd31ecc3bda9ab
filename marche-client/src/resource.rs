//! Three-state result for UI consumption
//!
//! Every facade call can be observed as a stream that yields `Loading`
//! first, then exactly one terminal `Success` or `Error`.

use crate::error::{ClientResult, ErrorKind};
use futures::stream::{self, Stream, StreamExt};
use shared::Locale;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error { kind: ErrorKind, message: String },
}

impl<T> Resource<T> {
    pub fn from_result(result: ClientResult<T>, locale: Locale) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error {
                kind: e.kind(),
                message: e.user_message(locale),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(data) => Resource::Success(f(data)),
            Self::Error { kind, message } => Resource::Error { kind, message },
        }
    }
}

/// Observe `call` as `Loading` followed by its single terminal state
pub fn track<T, F>(call: F, locale: Locale) -> impl Stream<Item = Resource<T>>
where
    F: Future<Output = ClientResult<T>>,
{
    stream::once(async { Resource::Loading })
        .chain(stream::once(async move { Resource::from_result(call.await, locale) }))
}
