pub use cmdack_protocol::{
    ACK_PREFIX, ALLOW_LIST, AllowList, EMPTY_COMMAND_MESSAGE, INVALID_COMMAND_MESSAGE, NACK_PREFIX,
    Reply, Response, StatusCode, Tag, UnknownStatus, respond, respond_owned, terminated,
};
use postcard::{self, Error as PostcardError};
use std::collections::TryReserveError;

pub mod ffi;

/// Owned counterpart of [`Reply`] for host code that outlives the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedReply {
    pub status: StatusCode,
    pub text: String,
}

impl OwnedReply {
    pub fn as_reply(&self) -> Reply<'_> {
        Reply {
            status: self.status,
            text: &self.text,
        }
    }
}

impl From<Reply<'_>> for OwnedReply {
    fn from(reply: Reply<'_>) -> Self {
        Self {
            status: reply.status,
            text: reply.text.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyCodecError {
    Encode(PostcardError),
    Decode(PostcardError),
}

/// Runs `command` against a zeroed buffer of `capacity` bytes.
///
/// A capacity of zero takes the invalid-buffer path. A capacity that cannot
/// be allocated is returned as an error instead of aborting.
pub fn respond_with_capacity(
    command: Option<&[u8]>,
    capacity: usize,
) -> Result<OwnedReply, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity)?;
    buffer.resize(capacity, 0u8);
    let status = respond(command, Some(buffer.as_mut_slice()));
    Ok(Reply::from_buffer(status, &buffer).into())
}

pub fn encode_reply(reply: &OwnedReply) -> Result<Vec<u8>, ReplyCodecError> {
    postcard::to_allocvec(&reply.as_reply()).map_err(ReplyCodecError::Encode)
}

/// Decodes one reply from the front of `buffer`.
///
/// Returns `Ok(None)` while the frame is still incomplete, otherwise the reply and the bytes consumed.
pub fn try_decode_reply(buffer: &[u8]) -> Result<Option<(OwnedReply, usize)>, ReplyCodecError> {
    match cmdack_protocol::reply::take_from_bytes(buffer) {
        Ok((reply, remaining)) => {
            let consumed = buffer.len() - remaining.len();
            Ok(Some((reply.into(), consumed)))
        }
        Err(PostcardError::DeserializeUnexpectedEnd) => Ok(None),
        Err(err) => Err(ReplyCodecError::Decode(err)),
    }
}
