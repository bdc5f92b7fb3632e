#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod clip;
pub mod config;
pub mod cos;
pub mod errors;
pub mod led;
pub mod logging;
pub mod lookup;

pub use clip::{Accumulator, Saturate, clip_signed, clip_unsigned};
pub use errors::{MccError, MccResult};
pub use lookup::{Table, lookup, lookup_sxsy, lookup_sxuy, lookup_uxsy, lookup_uxuy};
