//! Custom 128-bit service UUID registry.
//!
//! Fixed-capacity slot array addressed by position. Profiles register a
//! (UUID, handle) pair into a slot; removal clears the UUID back to the
//! nil sentinel.

use uuid::Uuid;

/// Number of custom UUID slots the EIR payload can carry.
pub const MAX_CUSTOM_UUID: usize = 8;

/// One registry entry: a 128-bit service UUID and its owning handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomUuidSlot {
   pub uuid: Uuid,
   pub handle: u32,
}

impl CustomUuidSlot {
   pub const EMPTY: Self = Self {
      uuid: Uuid::nil(),
      handle: 0,
   };

   pub const fn new(uuid: Uuid, handle: u32) -> Self {
      Self { uuid, handle }
   }

   /// True when the slot holds no UUID.
   pub const fn is_empty(&self) -> bool {
      self.uuid.is_nil()
   }
}

/// Ordered, fixed-size sequence of custom UUID slots.
///
/// All slots start empty; addressing is purely positional, there is no
/// handle-to-slot search.
#[derive(Debug, Clone)]
pub struct CustomUuidRegistry {
   slots: [CustomUuidSlot; MAX_CUSTOM_UUID],
}

impl Default for CustomUuidRegistry {
   fn default() -> Self {
      Self::new()
   }
}

impl CustomUuidRegistry {
   pub const fn new() -> Self {
      Self {
         slots: [CustomUuidSlot::EMPTY; MAX_CUSTOM_UUID],
      }
   }

   /// Current contents of a slot.
   ///
   /// # Panics
   /// An index past [`MAX_CUSTOM_UUID`] is a caller contract violation
   /// and panics.
   pub fn slot(&self, index: usize) -> &CustomUuidSlot {
      &self.slots[index]
   }

   /// Writes or clears a slot.
   ///
   /// On add the entry is stored verbatim, overwriting prior contents.
   /// On remove only the UUID is cleared to the nil sentinel; the handle
   /// carried by `entry` is ignored and the stored handle is left as-is.
   ///
   /// # Panics
   /// An index past [`MAX_CUSTOM_UUID`] is a caller contract violation
   /// and panics.
   pub fn update(&mut self, index: usize, entry: CustomUuidSlot, is_add: bool) {
      if is_add {
         self.slots[index] = entry;
      } else {
         self.slots[index].uuid = Uuid::nil();
      }
   }

   /// Non-empty slots in positional order.
   pub fn occupied(&self) -> impl Iterator<Item = &CustomUuidSlot> {
      self.slots.iter().filter(|slot| !slot.is_empty())
   }

   /// Clears every slot back to the initial empty state.
   pub fn clear(&mut self) {
      self.slots = [CustomUuidSlot::EMPTY; MAX_CUSTOM_UUID];
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   fn test_uuid(last: u8) -> Uuid {
      Uuid::from_bytes([
         0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
         last,
      ])
   }

   #[test]
   fn test_starts_empty() {
      let registry = CustomUuidRegistry::new();
      for i in 0..MAX_CUSTOM_UUID {
         assert!(registry.slot(i).is_empty(), "slot {i} not empty");
      }
      assert_eq!(registry.occupied().count(), 0);
   }

   #[test]
   fn test_add_then_lookup_round_trip() {
      let mut registry = CustomUuidRegistry::new();
      let entry = CustomUuidSlot::new(test_uuid(0xff), 7);

      registry.update(3, entry, true);

      let slot = registry.slot(3);
      assert_eq!(slot.uuid, test_uuid(0xff));
      assert_eq!(slot.handle, 7);
   }

   #[test]
   fn test_add_overwrites_prior_contents() {
      let mut registry = CustomUuidRegistry::new();
      registry.update(0, CustomUuidSlot::new(test_uuid(0x01), 1), true);
      registry.update(0, CustomUuidSlot::new(test_uuid(0x02), 2), true);

      let slot = registry.slot(0);
      assert_eq!(slot.uuid, test_uuid(0x02));
      assert_eq!(slot.handle, 2);
   }

   #[test]
   fn test_remove_ignores_handle() {
      let mut registry = CustomUuidRegistry::new();
      registry.update(1, CustomUuidSlot::new(test_uuid(0x01), 1), true);

      // Remove with a handle that never matched anything stored
      registry.update(1, CustomUuidSlot::new(Uuid::nil(), 0xdead), false);

      let slot = registry.slot(1);
      assert!(slot.uuid.is_nil());
      // The stored handle is untouched by removal
      assert_eq!(slot.handle, 1);
   }

   #[test]
   fn test_remove_empty_slot_is_idempotent() {
      let mut registry = CustomUuidRegistry::new();
      registry.update(2, CustomUuidSlot::EMPTY, false);
      registry.update(2, CustomUuidSlot::EMPTY, false);
      assert!(registry.slot(2).is_empty());
   }

   #[test]
   fn test_occupied_preserves_positional_order() {
      let mut registry = CustomUuidRegistry::new();
      registry.update(5, CustomUuidSlot::new(test_uuid(0x05), 5), true);
      registry.update(1, CustomUuidSlot::new(test_uuid(0x01), 1), true);
      registry.update(3, CustomUuidSlot::new(test_uuid(0x03), 3), true);

      let handles: Vec<u32> = registry.occupied().map(|slot| slot.handle).collect();
      assert_eq!(handles, vec![1, 3, 5]);
   }

   #[test]
   fn test_clear_resets_all_slots() {
      let mut registry = CustomUuidRegistry::new();
      for i in 0..MAX_CUSTOM_UUID {
         registry.update(i, CustomUuidSlot::new(test_uuid(i as u8), i as u32), true);
      }
      registry.clear();
      assert_eq!(registry.occupied().count(), 0);
   }
}
