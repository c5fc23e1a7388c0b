use core::fmt;

/// Failure reported by the transport collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No response within the transport timeout
    Timeout,
    /// Device answered with a non-success acknowledgment
    Rejected,
    /// Transport is not ready (node unreachable, queue full)
    Unavailable,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => f.write_str("transport timed out"),
            TransportError::Rejected => f.write_str("command rejected by device"),
            TransportError::Unavailable => f.write_str("transport unavailable"),
        }
    }
}

/// Failure of an explicit color, temperature or mode write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// Outbound command failed to send
    Transport(TransportError),
    /// `Unknown` can't be requested as a mode
    UnknownMode,
}

impl From<TransportError> for ControllerError {
    fn from(error: TransportError) -> Self {
        ControllerError::Transport(error)
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Transport(error) => write!(f, "send failed: {error}"),
            ControllerError::UnknownMode => f.write_str("unknown mode can't be requested"),
        }
    }
}
