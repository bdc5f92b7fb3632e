//! `log` on the host, `defmt` on the target. `log` wins if both are enabled so `--all-features` tests still link.
#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(not(any(feature = "defmt", feature = "log")))]
compile_error!("mcc-core needs either the \"log\" or the \"defmt\" feature");
