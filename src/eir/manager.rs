//! EIR synchronization manager.
//!
//! This module owns the custom UUID registry and keeps the controller's
//! EIR buffer consistent with it: every registry mutation rebuilds the
//! full payload and hands it to the controller before returning.

use log::{debug, warn};

use crate::{
   config::Config,
   controller::{ControllerInterface, TxStatus, Uuid16List},
   eir::{
      builder::EirBuilder,
      registry::{CustomUuidRegistry, CustomUuidSlot},
   },
   error::Result,
};

/// Registry owner and EIR synchronizer.
///
/// Mutations take `&mut self` and run to completion in a serialized
/// context; buffers are dispatched in mutation order, exactly one per
/// call, with no batching.
pub struct EirManager<C> {
   controller: C,
   registry: CustomUuidRegistry,
   config: Config,
}

impl<C: ControllerInterface> EirManager<C> {
   pub fn new(controller: C, config: Config) -> Self {
      Self {
         controller,
         registry: CustomUuidRegistry::new(),
         config,
      }
   }

   /// Registers or clears a custom UUID slot, then synchronizes the
   /// controller's EIR buffer with the result.
   ///
   /// The registry is written first; a downstream transmission failure
   /// leaves the mutation in place. Returns the controller's immediate
   /// status for the EIR write.
   ///
   /// # Panics
   /// A slot index past [`MAX_CUSTOM_UUID`](crate::eir::registry::MAX_CUSTOM_UUID)
   /// is a caller contract violation and panics.
   pub fn update_custom_uuid(
      &mut self,
      slot: usize,
      entry: CustomUuidSlot,
      is_add: bool,
   ) -> Result<TxStatus> {
      if is_add {
         debug!("slot {slot}: add {} (handle {})", entry.uuid, entry.handle);
      } else {
         debug!("slot {slot}: remove {}", self.registry.slot(slot).uuid);
      }
      self.registry.update(slot, entry, is_add);
      self.sync()
   }

   /// Current contents of a registry slot.
   pub fn custom_uuid(&self, slot: usize) -> &CustomUuidSlot {
      self.registry.slot(slot)
   }

   /// Rebuilds the EIR payload from current state and pushes it without
   /// mutating the registry.
   pub fn refresh(&mut self) -> Result<TxStatus> {
      self.sync()
   }

   /// Clears the registry and pushes the resulting payload.
   pub fn reset(&mut self) -> Result<TxStatus> {
      self.registry.clear();
      self.sync()
   }

   pub fn registry(&self) -> &CustomUuidRegistry {
      &self.registry
   }

   fn sync(&mut self) -> Result<TxStatus> {
      let mut uuid16 = Uuid16List::new();
      let count = self.controller.eir_supported_services(&mut uuid16);
      debug!("{count} stack-known 16-bit services in EIR");

      let mut builder = EirBuilder::new();
      if !self.config.local_name.is_empty() {
         builder.local_name(&self.config.local_name)?;
      }
      if let Some(level) = self.config.tx_power_level {
         builder.tx_power(level)?;
      }
      builder.uuid16_list(&uuid16)?;
      builder.custom_uuids(&self.registry)?;

      let status = self.controller.write_eir(builder.finish());
      if !status.is_ok() {
         warn!("EIR write rejected by controller: {status}");
      }
      Ok(status)
   }
}
