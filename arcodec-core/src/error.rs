// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by every buffer operation and serializer.
//!
//! Error constructors sit on the path of every primitive read, so they are
//! marked `#[cold]` and `#[inline(always)]` to keep the successful path tight.

use std::borrow::Cow;

use thiserror::Error;

/// Set `ARCODEC_PANIC_ON_ERROR=1` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("ARCODEC_PANIC_ON_ERROR").is_some();

/// Check if `ARCODEC_PANIC_ON_ERROR` was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for arcodec serialization and deserialization.
///
/// # Always use the constructor functions
///
/// Construct errors through [`Error::insufficient_data`], [`Error::decode_error`]
/// and friends instead of the enum variants. The constructors accept anything
/// convertible into `Cow<'static, str>` and honor `ARCODEC_PANIC_ON_ERROR`.
///
/// ```rust
/// use arcodec_core::error::Error;
///
/// let err = Error::decode_error("collection count is negative");
/// let err = Error::unsupported_version(9999, "Mesh");
/// let err = Error::unknown_type(format!("type id {} is not registered", 77));
/// ```
///
/// ## Debug mode: ARCODEC_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 ARCODEC_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// With the switch on, every constructor panics with the error message so the
/// backtrace points at the exact place the stream went wrong.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The stream ended before the expected number of bytes was available.
    ///
    /// Fields are the cursor offset, the number of bytes requested and the
    /// total stream length. Use [`Error::insufficient_data`].
    #[error("Insufficient data: {0} + {1} > {2}")]
    InsufficientData(usize, usize, usize),

    /// Text in the stream is not valid UTF-8. Use [`Error::encoding_error`].
    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    /// The payload is structurally invalid. Use [`Error::decode_error`].
    #[error("{0}")]
    DecodeError(Cow<'static, str>),

    /// A composite carries a format version this build does not know.
    ///
    /// Use [`Error::unsupported_version`].
    #[error("Unsupported format version {0} for {1}")]
    UnsupportedVersion(u16, Cow<'static, str>),

    /// No serializer is registered for the requested type.
    ///
    /// Use [`Error::unknown_type`].
    #[error("{0}")]
    UnknownType(Cow<'static, str>),

    /// A value cannot be represented on the wire. Use [`Error::encode_error`].
    #[error("{0}")]
    EncodeError(Cow<'static, str>),

    /// Polymorphic values nest deeper than the configured limit.
    ///
    /// Use [`Error::depth_exceed`].
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// The operation is not allowed, e.g. registering a reserved type id.
    ///
    /// Use [`Error::not_allowed`].
    #[error("{0}")]
    NotAllowed(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::InsufficientData`].
    ///
    /// ```
    /// use arcodec_core::error::Error;
    ///
    /// let err = Error::insufficient_data(10, 4, 12);
    /// assert_eq!(err.to_string(), "Insufficient data: 10 + 4 > 12");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn insufficient_data(offset: usize, length: usize, capacity: usize) -> Self {
        let err = Error::InsufficientData(offset, length, capacity);
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodingError`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodingError(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DecodeError`].
    ///
    /// ```
    /// use arcodec_core::error::Error;
    ///
    /// let err = Error::decode_error(format!("invalid bool byte {}", 7));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn decode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DecodeError(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnsupportedVersion`] for the composite named `type_name`.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_version<S: Into<Cow<'static, str>>>(version: u16, type_name: S) -> Self {
        let err = Error::UnsupportedVersion(version, type_name.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnknownType`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnknownType(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodeError`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodeError(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::NotAllowed`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn not_allowed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::NotAllowed(s.into());
        if PANIC_ON_ERROR {
            panic!("ARCODEC_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// A bare message becomes an [`Error::DecodeError`].
///
/// ```
/// use arcodec_core::ensure;
/// use arcodec_core::error::Error;
///
/// fn check_count(n: i32) -> Result<(), Error> {
///     ensure!(n >= 0, "count must not be negative");
///     ensure!(n < 10, "count {} too large", n);
///     Ok(())
/// }
/// assert!(check_count(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::decode_error($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::decode_error(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::DecodeError`].
///
/// ```
/// use arcodec_core::bail;
/// use arcodec_core::error::Error;
///
/// fn reject(tag: u8) -> Result<(), Error> {
///     bail!("unexpected tag {}", tag);
/// }
/// assert!(reject(3).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::decode_error($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::decode_error(format!($fmt, $($arg)*)))
    };
}
