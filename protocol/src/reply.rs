use core::str;

use postcard::Error as PostcardError;
use serde::{Deserialize, Serialize};

use crate::respond::terminated;
use crate::status::StatusCode;

/// Status and response text of one call, as carried over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply<'a> {
    pub status: StatusCode,
    #[serde(borrow)]
    pub text: &'a str,
}

impl<'a> Reply<'a> {
    /// Reads the response back out of a buffer that [`respond`](crate::respond) returned `status` for.
    ///
    /// Outcomes that leave no response (including an untouched invalid buffer) read as empty text.
    pub fn from_buffer(status: StatusCode, buffer: &'a [u8]) -> Self {
        let text = if status.is_written() {
            str::from_utf8(terminated(buffer)).unwrap_or_default()
        } else {
            ""
        };
        Self { status, text }
    }
}

/// Serialises `reply` into `output`, returning the number of bytes used.
pub fn encode_into(reply: &Reply<'_>, output: &mut [u8]) -> Result<usize, PostcardError> {
    postcard::to_slice(reply, output).map(|used| used.len())
}

/// Decodes one reply from the front of `input`, returning it with the unread remainder.
pub fn take_from_bytes(input: &[u8]) -> Result<(Reply<'_>, &[u8]), PostcardError> {
    postcard::take_from_bytes(input)
}
