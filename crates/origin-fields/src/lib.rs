//! # Origin Fields
//!
//! Persistence and form adapters for the Origin catalogs.
//!
//! - **Model fields**: [`ConstantField`] stores a member by its raw value and
//!   loads it back as the shared member
//! - **Serializer fields**: [`ChoiceField`] and [`MultipleChoiceField`]
//!   validate request input against a catalog or plain pairs
//! - **Options**: [`FieldOptions`] read from TOML or JSON and validated
//!
//! ## Example
//!
//! ```rust
//! use origin_constants::prelude::*;
//! use origin_fields::prelude::*;
//!
//! let field = CurrencyField::new();
//! let usd = field
//!     .to_python(FieldInput::Value("USD".to_string()))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(usd.symbol(), "$");
//! assert_eq!(field.get_prep_value(FieldInput::Constant(&*usd)), Some("USD".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod choice_field;
pub mod config;
pub mod error;
pub mod model_field;

pub use choice_field::{
    ChoiceField, ChoiceInput, ChoiceValue, Choices, MultipleChoiceField, PlainChoiceField,
};
pub use config::{ConfigError, ConfigResult, FieldOptions, Validate, ValidationError};
pub use error::{FieldError, FieldResult};
pub use model_field::{ConstantField, Deconstructed, FieldInput, FieldValue, StorageType};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::choice_field::{
        ChoiceField, ChoiceInput, ChoiceValue, Choices, MultipleChoiceField, PlainChoiceField,
    };
    pub use crate::config::{FieldOptions, Validate};
    pub use crate::error::{FieldError, FieldResult};
    pub use crate::model_field::{
        AdjustmentField, BusinessDayConventionField, CalendarField, ConstantField, CurrencyField,
        DayCountField, FieldInput, FundingBasisField, PaymentFrequencyField, TenorField,
    };
}
