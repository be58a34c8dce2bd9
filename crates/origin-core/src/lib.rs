//! # Origin Core
//!
//! Ordered, indexed enumerations of reference-data constants.
//!
//! This crate provides the registry every Origin catalog is built on:
//!
//! - **Constant**: one member pairing a machine value with a display label
//! - **Constants**: the ordered registry with value and label indexes
//! - **ConstantsBuilder**: explicit, declaration-ordered registration
//! - **Macros**: `constants!`, `constant_type!` and `impl_member!`
//!
//! ## Design Philosophy
//!
//! - **Declared Order**: members iterate and render in the order written
//! - **Frozen By Default**: registries are immutable once built
//! - **Fail Fast**: duplicate values are a declaration error, lookups never panic
//!
//! ## Example
//!
//! ```rust
//! use origin_core::prelude::*;
//!
//! origin_core::constants! {
//!     /// Day count conventions.
//!     pub struct DayCounts<Constant<String>> {
//!         act_365 = Constant::new("Actual365Fixed", "ACT/365F"),
//!         act_360 = Constant::new("Actual360", "ACT/360"),
//!     }
//! }
//!
//! let day_counts = DayCounts::global();
//! assert_eq!(day_counts.iter().next().unwrap().label(), "ACT/365F");
//! assert_eq!(day_counts.to_choices()[1], ("Actual360".to_string(), "ACT/360".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::doc_markdown)]

mod builder;
mod constant;
pub mod error;
mod macros;
mod operand;
mod registry;

pub use builder::ConstantsBuilder;
pub use constant::{Constant, ConstantValue, Member};
pub use error::{RegistryError, RegistryResult};
pub use operand::{perform_on_constant, Operand};
pub use registry::{Choice, ChoiceFilter, Constants, Enumerated};

#[doc(hidden)]
pub use serde;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::ConstantsBuilder;
    pub use crate::constant::{Constant, ConstantValue, Member};
    pub use crate::error::{RegistryError, RegistryResult};
    pub use crate::operand::{perform_on_constant, Operand};
    pub use crate::registry::{Choice, ChoiceFilter, Constants, Enumerated};
}
