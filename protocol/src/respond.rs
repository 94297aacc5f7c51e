use crate::status::StatusCode;

pub const ACK_PREFIX: &str = "ACK: ";
pub const NACK_PREFIX: &str = "NACK: ";
pub const EMPTY_COMMAND_MESSAGE: &str = "(null or empty command)";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command";

/// Commands acknowledged by [`respond`].
pub const ALLOW_LIST: AllowList = AllowList(&["PING", "STATUS", "AUTH"]);

/// Ordered set of recognised command names. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowList(&'static [&'static str]);

impl AllowList {
    /// Returns the allow-list entry equal to `command`, if any.
    pub fn find(&self, command: &[u8]) -> Option<&'static str> {
        self.0
            .iter()
            .copied()
            .find(|name| name.as_bytes() == command)
    }

    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ack,
    Nack,
}

impl Tag {
    pub const fn prefix(self) -> &'static str {
        match self {
            Tag::Ack => ACK_PREFIX,
            Tag::Nack => NACK_PREFIX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Empty,
    Known,
    Unknown,
}

/// A classified command: prefix tag plus body, serialised as `prefix + body + NUL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    kind: Kind,
    body: &'static str,
}

impl Response {
    /// Classifies `command`. Bytes after the first NUL are ignored.
    ///
    /// The body never borrows from `command`: a known command is echoed through
    /// its allow-list entry, which is byte-identical.
    pub fn for_command(command: Option<&[u8]>) -> Self {
        let command = command.map(until_nul).unwrap_or_default();
        if command.is_empty() {
            return Self {
                kind: Kind::Empty,
                body: EMPTY_COMMAND_MESSAGE,
            };
        }

        match ALLOW_LIST.find(command) {
            Some(name) => Self {
                kind: Kind::Known,
                body: name,
            },
            None => Self {
                kind: Kind::Unknown,
                body: INVALID_COMMAND_MESSAGE,
            },
        }
    }

    pub const fn tag(&self) -> Tag {
        match self.kind {
            Kind::Empty | Kind::Known => Tag::Ack,
            Kind::Unknown => Tag::Nack,
        }
    }

    pub const fn body(&self) -> &'static str {
        self.body
    }

    /// Length of `prefix + body`, excluding the terminator.
    pub const fn formatted_len(&self) -> usize {
        self.tag().prefix().len() + self.body.len()
    }

    /// Exact-fit test: the formatted text plus its terminator must fit in `capacity`.
    pub const fn fits(&self, capacity: usize) -> bool {
        self.formatted_len() < capacity
    }

    /// Status reported when the response was written.
    pub const fn written_status(&self) -> StatusCode {
        match self.kind {
            Kind::Empty | Kind::Known => StatusCode::Success,
            Kind::Unknown => StatusCode::RejectedWritten,
        }
    }

    /// Status reported when the response did not fit.
    pub const fn overflow_status(&self) -> StatusCode {
        match self.kind {
            Kind::Empty => StatusCode::NullCommandOverflow,
            Kind::Known => StatusCode::AckOverflow,
            Kind::Unknown => StatusCode::NackOverflow,
        }
    }

    /// Writes `prefix + body + NUL` to the start of `buffer`.
    ///
    /// Returns `false` without touching `buffer` when it does not fit.
    pub fn write_into(&self, buffer: &mut [u8]) -> bool {
        if !self.fits(buffer.len()) {
            return false;
        }

        let prefix = self.tag().prefix().as_bytes();
        let body = self.body.as_bytes();
        let end = prefix.len() + body.len();

        buffer[..prefix.len()].copy_from_slice(prefix);
        buffer[prefix.len()..end].copy_from_slice(body);
        buffer[end] = 0;
        true
    }
}

/// Validates `command` and writes the formatted response into `buffer`.
///
/// `None` for `buffer` stands for a null pointer and an empty slice for zero
/// capacity; both return [`StatusCode::InvalidBuffer`] without writing. Any
/// other buffer is left NUL-terminated: holding the response on
/// [`StatusCode::Success`] and [`StatusCode::RejectedWritten`], empty otherwise.
pub fn respond(command: Option<&[u8]>, buffer: Option<&mut [u8]>) -> StatusCode {
    let Some(buffer) = buffer else {
        return StatusCode::InvalidBuffer;
    };
    let Some(first) = buffer.first_mut() else {
        return StatusCode::InvalidBuffer;
    };
    *first = 0;

    let response = Response::for_command(command);
    if response.write_into(buffer) {
        response.written_status()
    } else {
        response.overflow_status()
    }
}

/// The bytes of `buffer` before its first NUL, or all of it when unterminated.
pub fn terminated(buffer: &[u8]) -> &[u8] {
    until_nul(buffer)
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POISON: u8 = 0xAA;

    fn run(command: Option<&[u8]>, capacity: usize) -> (StatusCode, Vec<u8>) {
        let mut buffer = vec![POISON; capacity];
        let status = respond(command, Some(buffer.as_mut_slice()));
        (status, buffer)
    }

    fn text(buffer: &[u8]) -> &str {
        core::str::from_utf8(terminated(buffer)).unwrap()
    }

    #[test]
    fn null_buffer_is_invalid() {
        assert_eq!(respond(Some(&b"PING"[..]), None), StatusCode::InvalidBuffer);
    }

    #[test]
    fn zero_capacity_is_invalid_and_untouched() {
        let mut backing = [POISON; 4];
        let status = respond(Some(&b"PING"[..]), Some(&mut backing[..0]));
        assert_eq!(status, StatusCode::InvalidBuffer);
        assert_eq!(backing, [POISON; 4]);
    }

    #[test]
    fn absent_and_empty_commands_are_acknowledged() {
        for command in [None, Some(&b""[..])] {
            let (status, buffer) = run(command, 1024);
            assert_eq!(status, StatusCode::Success);
            assert_eq!(text(&buffer), "ACK: (null or empty command)");
        }
    }

    #[test]
    fn empty_command_overflow_leaves_buffer_empty() {
        let needed = "ACK: (null or empty command)".len();
        let (status, buffer) = run(None, needed);
        assert_eq!(status, StatusCode::NullCommandOverflow);
        assert_eq!(buffer[0], 0);
        assert!(buffer[1..].iter().all(|&b| b == POISON));
    }

    #[test]
    fn allowed_commands_are_echoed() {
        for name in ALLOW_LIST.iter() {
            let (status, buffer) = run(Some(name.as_bytes()), 1024);
            assert_eq!(status, StatusCode::Success);
            assert_eq!(text(&buffer), format!("ACK: {name}"));
        }
    }

    #[test]
    fn exact_fit_succeeds() {
        let capacity = "ACK: PING".len() + 1;
        let (status, buffer) = run(Some(&b"PING"[..]), capacity);
        assert_eq!(status, StatusCode::Success);
        assert_eq!(&buffer[..], b"ACK: PING\0");
    }

    #[test]
    fn one_byte_short_overflows() {
        let (status, buffer) = run(Some(&b"PING"[..]), "ACK: PING".len());
        assert_eq!(status, StatusCode::AckOverflow);
        assert_eq!(text(&buffer), "");
    }

    #[test]
    fn unknown_command_is_rejected() {
        let (status, buffer) = run(Some(&b"BOGUS"[..]), 1024);
        assert_eq!(status, StatusCode::RejectedWritten);
        assert_eq!(text(&buffer), "NACK: Invalid command");
    }

    #[test]
    fn rejection_overflow_leaves_buffer_empty() {
        let (status, buffer) = run(Some(&b"BOGUS"[..]), "NACK: Invalid command".len());
        assert_eq!(status, StatusCode::NackOverflow);
        assert_eq!(text(&buffer), "");
    }

    #[test]
    fn matching_is_exact() {
        for command in [&b" PING"[..], b"PING ", b"ping", b"PINGS", b"STAT"] {
            let (status, buffer) = run(Some(command), 1024);
            assert_eq!(status, StatusCode::RejectedWritten, "{command:?}");
            assert_eq!(text(&buffer), "NACK: Invalid command");
        }
    }

    #[test]
    fn long_unknown_command_is_not_echoed() {
        let command = vec![b'X'; 10_000];
        let (status, buffer) = run(Some(command.as_slice()), 1024);
        assert_eq!(status, StatusCode::RejectedWritten);
        assert_eq!(text(&buffer), "NACK: Invalid command");
        assert!(buffer[22..].iter().all(|&b| b == POISON));
    }

    #[test]
    fn embedded_nul_truncates_command() {
        let (status, buffer) = run(Some(&b"AUTH\0trailing"[..]), 64);
        assert_eq!(status, StatusCode::Success);
        assert_eq!(text(&buffer), "ACK: AUTH");

        let (status, buffer) = run(Some(&b"\0PING"[..]), 64);
        assert_eq!(status, StatusCode::Success);
        assert_eq!(text(&buffer), "ACK: (null or empty command)");
    }

    #[test]
    fn single_byte_buffer_is_cleared() {
        for command in [None, Some(&b"PING"[..]), Some(&b"BOGUS"[..])] {
            let (status, buffer) = run(command, 1);
            assert!(status.is_error());
            assert_eq!(buffer, vec![0]);
        }
    }

    #[test]
    fn response_reports_its_shape() {
        let response = Response::for_command(Some(&b"STATUS"[..]));
        assert_eq!(response.tag(), Tag::Ack);
        assert_eq!(response.body(), "STATUS");
        assert_eq!(response.formatted_len(), "ACK: STATUS".len());
        assert!(response.fits(12));
        assert!(!response.fits(11));

        let response = Response::for_command(Some(&b"reboot"[..]));
        assert_eq!(response.tag(), Tag::Nack);
        assert_eq!(response.overflow_status(), StatusCode::NackOverflow);
    }

    #[test]
    fn terminated_handles_unterminated_slices() {
        assert_eq!(terminated(b"abc"), b"abc");
        assert_eq!(terminated(b"ab\0c"), b"ab");
        assert_eq!(terminated(b""), b"");
    }
}
