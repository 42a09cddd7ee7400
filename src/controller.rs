//! Controller transport boundary for EIR writes.
//!
//! The host side hands fully built EIR payloads to the controller through
//! [`ControllerInterface`]. Production implementations wrap the real
//! host-controller transport; tests inject fakes satisfying the same
//! contract.

use smallvec::SmallVec;

/// Significant part of an EIR payload in bytes.
pub const EIR_MAX_PAYLOAD: usize = 240;

/// Upper bound on 16-bit service UUIDs the stack advertises in EIR.
pub const MAX_UUID16: usize = 16;

/// Transient EIR payload buffer.
///
/// Passed to [`ControllerInterface::write_eir`] by value: from that point
/// the controller owns it and releases it on every exit path, success or
/// failure. The producer never touches it again.
pub type EirBuffer = SmallVec<[u8; EIR_MAX_PAYLOAD]>;

/// Bounded list of 16-bit service UUIDs supplied by the controller stack.
pub type Uuid16List = heapless::Vec<u16, MAX_UUID16>;

/// Immediate status for a controller command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TxStatus {
   /// Command completed.
   Success,
   /// Command queued; real completion arrives later through the
   /// transport's event path.
   CommandStarted,
   /// Controller cannot take the command right now.
   Busy,
   /// No controller buffers available for the write.
   NoResources,
   /// Payload rejected by the controller.
   IllegalValue,
   /// Controller is not in a mode that accepts EIR writes.
   WrongMode,
}

impl TxStatus {
   pub const fn is_ok(self) -> bool {
      matches!(self, Self::Success | Self::CommandStarted)
   }
}

/// Host-to-controller entry points the EIR core depends on.
pub trait ControllerInterface {
   /// Hands `buf` to the controller for transmission.
   ///
   /// Ownership of the buffer moves to the implementation, which consumes
   /// it on every path and returns an immediate status. A non-success
   /// status is reported to the caller as-is; this core never retries.
   fn write_eir(&mut self, buf: EirBuffer) -> TxStatus;

   /// Writes the stack-known 16-bit service UUIDs already represented in
   /// EIR into `out`, up to its capacity, and returns the count written.
   ///
   /// Returns 0 when no 16-bit services apply.
   fn eir_supported_services(&self, out: &mut Uuid16List) -> u8;
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_status_families() {
      assert!(TxStatus::Success.is_ok());
      assert!(TxStatus::CommandStarted.is_ok());
      assert!(!TxStatus::Busy.is_ok());
      assert!(!TxStatus::NoResources.is_ok());
      assert!(!TxStatus::IllegalValue.is_ok());
      assert!(!TxStatus::WrongMode.is_ok());
   }

   #[test]
   fn test_status_display() {
      assert_eq!(TxStatus::CommandStarted.to_string(), "CommandStarted");
      assert_eq!(TxStatus::NoResources.to_string(), "NoResources");
   }
}
