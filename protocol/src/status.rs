use core::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single [`respond`](crate::respond) call.
///
/// The discriminants are part of the C ABI and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum StatusCode {
    /// `"ACK: <command>"` or `"ACK: (null or empty command)"` was written.
    Success = 0,
    /// Null buffer or zero capacity. Nothing was written.
    InvalidBuffer = -1,
    /// The empty-command acknowledgement did not fit. Buffer left empty.
    NullCommandOverflow = -2,
    /// The acknowledgement of a valid command did not fit. Buffer left empty.
    AckOverflow = -3,
    /// `"NACK: Invalid command"` was written. The call completed; the command was rejected.
    RejectedWritten = -4,
    /// The rejection did not fit. Buffer left empty.
    NackOverflow = -5,
}

impl StatusCode {
    pub const ALL: [StatusCode; 6] = [
        StatusCode::Success,
        StatusCode::InvalidBuffer,
        StatusCode::NullCommandOverflow,
        StatusCode::AckOverflow,
        StatusCode::RejectedWritten,
        StatusCode::NackOverflow,
    ];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            StatusCode::Success => "Success",
            StatusCode::InvalidBuffer => "InvalidBuffer",
            StatusCode::NullCommandOverflow => "NullCommandOverflow",
            StatusCode::AckOverflow => "AckOverflow",
            StatusCode::RejectedWritten => "RejectedWritten",
            StatusCode::NackOverflow => "NackOverflow",
        }
    }

    /// Readable explanation of the outcome, suitable for showing to an operator.
    pub const fn description(self) -> &'static str {
        match self {
            StatusCode::Success => "Success",
            StatusCode::InvalidBuffer => "Invalid buffer or buffer size is zero",
            StatusCode::NullCommandOverflow => "Null/empty command message does not fit in buffer",
            StatusCode::AckOverflow => "ACK response does not fit in buffer",
            StatusCode::RejectedWritten => "NACK written successfully (invalid command)",
            StatusCode::NackOverflow => "NACK response does not fit in buffer",
        }
    }

    /// True when the buffer holds a formatted response (ACK or NACK).
    pub const fn is_written(self) -> bool {
        matches!(self, StatusCode::Success | StatusCode::RejectedWritten)
    }

    pub const fn is_error(self) -> bool {
        !self.is_written()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl From<StatusCode> for i32 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

/// A numeric code outside the six known outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub i32);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status code {}", self.0)
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = UnknownStatus;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        StatusCode::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(UnknownStatus(code))
    }
}
