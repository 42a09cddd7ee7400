//! EIR payload encoder.
//!
//! Builds the length/type/value data elements of an Extended Inquiry
//! Response: local name, TX power, the stack's 16-bit service UUID list
//! and the registry's custom 128-bit service UUIDs.

use log::debug;
use smallvec::SmallVec;

use crate::{
   controller::{EIR_MAX_PAYLOAD, EirBuffer, Uuid16List},
   eir::registry::CustomUuidRegistry,
   error::{EirError, Result},
};

// Assigned AD type numbers used in EIR payloads
const COMPLETE_LIST_16_BIT_SERVICE_UUIDS: u8 = 0x03;
const COMPLETE_LIST_128_BIT_SERVICE_UUIDS: u8 = 0x07;
const SHORTENED_LOCAL_NAME: u8 = 0x08;
const COMPLETE_LOCAL_NAME: u8 = 0x09;
const TX_POWER_LEVEL: u8 = 0x0a;

/// Encoder for one EIR payload.
///
/// Elements are appended in call order; [`EirBuilder::finish`] yields the
/// buffer ready for the controller.
pub struct EirBuilder {
   buf: EirBuffer,
}

impl Default for EirBuilder {
   fn default() -> Self {
      Self::new()
   }
}

impl EirBuilder {
   pub fn new() -> Self {
      Self {
         buf: SmallVec::new(),
      }
   }

   fn remaining(&self) -> usize {
      EIR_MAX_PAYLOAD - self.buf.len()
   }

   /// Appends one length/type/value element.
   fn append(&mut self, ad_type: u8, payload: &[u8]) -> Result<()> {
      let needed = payload.len() + 2;
      if needed > self.remaining() {
         return Err(EirError::PayloadOverflow {
            needed,
            capacity: self.remaining(),
         });
      }
      self.buf.push((payload.len() + 1) as u8);
      self.buf.push(ad_type);
      self.buf.extend_from_slice(payload);
      Ok(())
   }

   /// Local name element: complete when the name fits the remaining
   /// space, otherwise truncated and tagged shortened.
   pub fn local_name(&mut self, name: &str) -> Result<()> {
      let bytes = name.as_bytes();
      if bytes.len() + 2 <= self.remaining() {
         self.append(COMPLETE_LOCAL_NAME, bytes)
      } else {
         let take = self.remaining().saturating_sub(2);
         self.append(SHORTENED_LOCAL_NAME, &bytes[..take])
      }
   }

   pub fn tx_power(&mut self, level: i8) -> Result<()> {
      self.append(TX_POWER_LEVEL, &[level as u8])
   }

   /// Complete 16-bit service UUID list, little-endian on the wire. An
   /// empty list emits no element.
   pub fn uuid16_list(&mut self, uuids: &Uuid16List) -> Result<()> {
      if uuids.is_empty() {
         return Ok(());
      }
      let mut bytes = SmallVec::<[u8; 32]>::new();
      for uuid in uuids {
         bytes.extend_from_slice(&uuid.to_le_bytes());
      }
      self.append(COMPLETE_LIST_16_BIT_SERVICE_UUIDS, &bytes)
   }

   /// Complete 128-bit service UUID list built from the registry's
   /// occupied slots in positional order, each UUID reversed into wire
   /// byte order. An empty registry emits no element.
   pub fn custom_uuids(&mut self, registry: &CustomUuidRegistry) -> Result<()> {
      let mut bytes = SmallVec::<[u8; 128]>::new();
      for slot in registry.occupied() {
         let mut wire = *slot.uuid.as_bytes();
         wire.reverse();
         bytes.extend_from_slice(&wire);
      }
      if bytes.is_empty() {
         return Ok(());
      }
      self.append(COMPLETE_LIST_128_BIT_SERVICE_UUIDS, &bytes)
   }

   /// Finishes the payload and yields the buffer.
   pub fn finish(self) -> EirBuffer {
      debug!(
         "EIR payload ({} bytes): {}",
         self.buf.len(),
         hex::encode(&self.buf)
      );
      self.buf
   }
}
