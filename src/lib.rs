//! EIR custom service UUID registry and controller synchronization.
//!
//! Host-side profiles register up to [`MAX_CUSTOM_UUID`] 128-bit service
//! UUIDs to be advertised during discovery. Every registry mutation
//! rebuilds the Extended Inquiry Response payload and hands it to the
//! controller transport before returning, so the controller's EIR buffer
//! always reflects the registry's current contents.

pub mod config;
pub mod controller;
pub mod eir;
pub mod error;

pub use config::Config;
pub use controller::{ControllerInterface, EirBuffer, TxStatus, Uuid16List};
pub use eir::{
   manager::EirManager,
   registry::{CustomUuidRegistry, CustomUuidSlot, MAX_CUSTOM_UUID},
};
pub use error::{EirError, Result};
