//! # wings-form
//!
//! Field validation engine for the Personal Wings admin console.
//!
//! - [`FieldRule`] / [`RuleSet`]: declarative per-field rules, evaluated in a
//!   fixed order where the first failure wins.
//! - [`FormController`]: values, errors and touched flags of one form, with
//!   change/blur/validate-all/reset operations.
//! - [`RuleSetSchema`]: rule sets as JSON or TOML data.
//!
//! ```rust,ignore
//! use wings_form::prelude::*;
//!
//! let rules = RuleSet::new()
//!     .field("email", FieldRule::new().required().email())
//!     .field("password", FieldRule::new().required().min_length(6));
//!
//! let mut form = FormController::new(
//!     form_values! { "email" => "", "password" => "abc" },
//!     rules,
//! );
//! assert!(!form.submit());
//! assert_eq!(form.error("email"), Some("email is required"));
//! ```

pub mod controller;
pub mod error;
pub mod rule;
pub mod schema;
pub mod state;
pub mod value;

pub use controller::FormController;
pub use error::RuleError;
pub use rule::{CustomCheck, FieldRule, MatchField, Required, RuleSet};
pub use schema::{Bound, FieldRuleSchema, MatchSchema, RuleSetSchema, Toggle};
pub use state::{FormErrors, TouchedSet};
pub use value::{FieldValue, FormValues};

pub mod prelude {
    pub use crate::controller::FormController;
    pub use crate::error::RuleError;
    pub use crate::form_values;
    pub use crate::rule::{FieldRule, RuleSet};
    pub use crate::schema::RuleSetSchema;
    pub use crate::state::{FormErrors, TouchedSet};
    pub use crate::value::{FieldValue, FormValues};
}
