//! Built-in validators
//!
//! # Categories
//!
//! - **String**: length bounds, email, regular expression
//! - **Numeric**: inclusive lower / upper bounds
//!
//! # Examples
//!
//! ```rust,ignore
//! use wings_validator::prelude::*;
//!
//! let password = min_length(6).and(max_length(64));
//! let age = min(18.0).and(max(120.0));
//! let slug = matches_regex(r"^[a-z0-9-]+$")?;
//! ```

pub mod content;
pub mod length;
pub mod range;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use range::{Max, Min, max, min};
