//! Validator registry for the epoch dashboard.
//!
//! A [`ValidatorRegistry`] is built fresh for every rendering pass. The
//! assembly layer feeds it the current-epoch validators, next-epoch
//! validators, pending proposals, previous-epoch kickouts and the per-epoch
//! role timelines, in any order. Each account ends up with exactly one
//! [`ValidatorRecord`], whatever combination of lists it appeared in.
//!
//! ```
//! use epochview_registry::{NextEpochInfo, ValidatorRegistry};
//! use epochview_types::{AccountId, ShardId, ValidatorRole};
//!
//! let mut registry = ValidatorRegistry::new(3);
//! let alice = AccountId::from("alice");
//!
//! registry.set_next(&alice, NextEpochInfo { pledge: 10.0, shards: vec![ShardId(0)] });
//! registry.set_role(&alice, 0, ValidatorRole::BlockProducer).unwrap();
//!
//! let view = registry.sorted_view();
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].roles.len(), 3);
//! ```

mod record;
mod registry;

pub use record::{CurrentEpochInfo, NextEpochInfo, ValidatorRecord};
pub use registry::{RegistryError, ValidatorRegistry};
