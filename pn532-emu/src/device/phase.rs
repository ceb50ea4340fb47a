// pn532-emu/src/device/phase.rs

//! Top-level exchange state of the emulated controller.
//!
//! - `Idle`: receiver accepts bytes, reads return the ready byte
//! - `AckPending`: a frame was accepted and the ACK is being read out
//! - `ProcessingPending`: ACK drained, waiting for the processing delay
//! - `ResponsePending`: the response frame is being read out
//!
//! Transitions: Idle → AckPending → (ProcessingPending →) ResponsePending →
//! Idle. A suppressed command returns straight to Idle. The processing delay
//! may expire while the ACK is still being read; `delay_elapsed` records it
//! and the command runs as soon as the ACK is drained.

use derive_more::Display;

use crate::protocol::InboundFrame;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AckPending {
        frame: InboundFrame,
        delay_elapsed: bool,
    },
    ProcessingPending {
        frame: InboundFrame,
    },
    ResponsePending,
}

/// Fieldless view of [`Phase`] for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PhaseKind {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "ack pending")]
    AckPending,
    #[display(fmt = "processing pending")]
    ProcessingPending,
    #[display(fmt = "response pending")]
    ResponsePending,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::AckPending { .. } => PhaseKind::AckPending,
            Self::ProcessingPending { .. } => PhaseKind::ProcessingPending,
            Self::ResponsePending => PhaseKind::ResponsePending,
        }
    }

    /// True while an exchange is in flight; inbound bytes are dropped.
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The command waiting to be processed, if any.
    pub fn frame(&self) -> Option<&InboundFrame> {
        match self {
            Self::AckPending { frame, .. } | Self::ProcessingPending { frame } => Some(frame),
            _ => None,
        }
    }
}
