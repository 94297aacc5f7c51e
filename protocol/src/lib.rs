#![cfg_attr(not(test), no_std)]

//! Bounded-buffer command acknowledgement.
//!
//! A command is checked against a fixed allow-list and a NUL-terminated
//! response is written into a caller-owned buffer. Every outcome maps to a
//! stable [`StatusCode`], and the buffer is never written past its end.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod owned;
pub mod reply;
pub mod respond;
pub mod status;

#[cfg(feature = "alloc")]
pub use owned::respond_owned;
pub use reply::Reply;
pub use respond::{
    ACK_PREFIX, ALLOW_LIST, AllowList, EMPTY_COMMAND_MESSAGE, INVALID_COMMAND_MESSAGE, NACK_PREFIX,
    Response, Tag, respond, terminated,
};
pub use status::{StatusCode, UnknownStatus};
