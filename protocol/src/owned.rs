//! Owned-return form of the responder for callers without a fixed buffer.
//!
//! There is no capacity here, so only two outcomes remain: the formatted text
//! or an allocation failure. ACK and NACK are told apart by the text itself.

use alloc::collections::TryReserveError;
use alloc::string::String;

use crate::respond::Response;

pub fn respond_owned(command: Option<&[u8]>) -> Result<String, TryReserveError> {
    let response = Response::for_command(command);
    let mut text = String::new();
    text.try_reserve_exact(response.formatted_len())?;
    text.push_str(response.tag().prefix());
    text.push_str(response.body());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_buffer_responses() {
        assert_eq!(respond_owned(Some(&b"AUTH"[..])).unwrap(), "ACK: AUTH");
        assert_eq!(respond_owned(None).unwrap(), "ACK: (null or empty command)");
        assert_eq!(respond_owned(Some(&b"auth"[..])).unwrap(), "NACK: Invalid command");
    }

    #[test]
    fn allocates_exactly_the_response() {
        let text = respond_owned(Some(&b"STATUS"[..])).unwrap();
        assert_eq!(text.len(), "ACK: STATUS".len());
    }
}
