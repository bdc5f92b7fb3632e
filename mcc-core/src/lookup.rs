//! 1-D piecewise-linear interpolation over a descending key table.
//!
//! Index 0 holds the highest key. Inputs at or past either end return that end's value; nothing is extrapolated.
//! Everything is integer math in an [`Accumulator`] and the result always goes through [`Saturate::saturate`].
//!
//! The tables are caller-owned calibration data. A malformed table (unsorted keys, mismatched lengths) gives a wrong
//! but deterministic answer instead of an error. [`Table::validate`] exists for checking tables once at startup.
use itertools::Itertools;

use crate::clip::{Accumulator, Saturate};
use crate::errors::{MccError, MccResult};

/// A key type for the `xarray` side of a table.
pub trait TableKey: Copy + PartialOrd + Into<Accumulator> {}

impl TableKey for u16 {}
impl TableKey for i16 {}

/// Interpolate `xin` over parallel `keys` and `values`.
///
/// Only the first `min(keys.len(), values.len())` pairs are used. An empty table returns `Y::saturate(0)`.
pub fn lookup<X: TableKey, Y: Saturate>(xin: X, keys: &[X], values: &[Y]) -> Y {
    let num_pairs = keys.len().min(values.len());
    let keys = &keys[..num_pairs];
    let values = &values[..num_pairs];

    let (Some(&x_high), Some(&x_low)) = (keys.first(), keys.last()) else {
        return Y::saturate(0);
    };

    let yout: Accumulator = if xin >= x_high {
        values[0].into()
    } else if xin <= x_low {
        values[num_pairs - 1].into()
    } else {
        let xi = bracket(xin, keys);

        interpolate(xin, (keys[xi - 1], values[xi - 1]), (keys[xi], values[xi]))
    };

    Y::saturate(yout)
}

/// Index of the low end of the interval holding `xin`. The interval is `[keys[xi], keys[xi - 1]]`.
///
/// This is the last index (after 0) whose key is still above `xin`, plus one. Searching from the back gives the same
/// answer as a forward scan that keeps overwriting its match, even when the keys are not sorted.
///
/// Callers must have already handled `xin >= keys[0]` and `xin <= keys[last]`, which keeps the result in `1..len`.
#[inline]
fn bracket<X: TableKey>(xin: X, keys: &[X]) -> usize {
    keys[1..]
        .iter()
        .rposition(|&key| xin < key)
        // +1 because the search skipped index 0, +1 again to step past the match
        .map_or(1, |i| i + 2)
}

/// `(xin - x_low) * (y_high - y_low) / (x_high - x_low) + y_low`, truncating toward zero.
#[inline]
fn interpolate<X: TableKey, Y: Saturate>(xin: X, high: (X, Y), low: (X, Y)) -> Accumulator {
    let (x_high, y_high): (Accumulator, Accumulator) = (high.0.into(), high.1.into());
    let (x_low, y_low): (Accumulator, Accumulator) = (low.0.into(), low.1.into());

    // equal neighbouring keys divide by 1 instead of 0
    let dx = match x_high - x_low {
        0 => 1,
        dx => dx,
    };
    let dy = y_high - y_low;

    // a full range u16 table overflows 32 bits here, so multiply in 64.
    // |offset| < |dx|, so the quotient is smaller than |dy| and fits back in an Accumulator
    let xin: Accumulator = xin.into();
    let offset = xin - x_low;
    let scaled = i64::from(offset) * i64::from(dy) / i64::from(dx);

    scaled as Accumulator + y_low
}

/// unsigned keys, unsigned values
pub fn lookup_uxuy(xin: u16, num_pairs: u16, xarray: &[u16], yarray: &[u16]) -> u16 {
    lookup(xin, head(xarray, num_pairs), head(yarray, num_pairs))
}

/// unsigned keys, signed values
pub fn lookup_uxsy(xin: u16, num_pairs: u16, xarray: &[u16], yarray: &[i16]) -> i16 {
    lookup(xin, head(xarray, num_pairs), head(yarray, num_pairs))
}

/// signed keys, unsigned values
pub fn lookup_sxuy(xin: i16, num_pairs: u16, xarray: &[i16], yarray: &[u16]) -> u16 {
    lookup(xin, head(xarray, num_pairs), head(yarray, num_pairs))
}

/// signed keys, signed values
pub fn lookup_sxsy(xin: i16, num_pairs: u16, xarray: &[i16], yarray: &[i16]) -> i16 {
    lookup(xin, head(xarray, num_pairs), head(yarray, num_pairs))
}

/// the first `num_pairs` items, or the whole slice if it is shorter
#[inline]
fn head<T>(x: &[T], num_pairs: u16) -> &[T] {
    &x[..x.len().min(usize::from(num_pairs))]
}

/// A calibration table. Build these as `static`s so a length mismatch fails at compile time.
///
/// ```
/// use mcc_core::Table;
///
/// static VOLTS_TO_PERCENT: Table<u16, u16> = Table::new(&[4200, 3700, 3300], &[100, 40, 0]);
///
/// assert_eq!(VOLTS_TO_PERCENT.lookup(3950), 70);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, X, Y> {
    keys: &'a [X],
    values: &'a [Y],
}

impl<'a, X, Y> Table<'a, X, Y> {
    /// # Panics
    ///
    /// If `keys` and `values` are different lengths.
    pub const fn new(keys: &'a [X], values: &'a [Y]) -> Self {
        assert!(
            keys.len() == values.len(),
            "lookup table keys and values must be the same length"
        );

        Self { keys, values }
    }

    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub const fn keys(&self) -> &'a [X] {
        self.keys
    }

    pub const fn values(&self) -> &'a [Y] {
        self.values
    }
}

impl<X: TableKey, Y: Saturate> Table<'_, X, Y> {
    #[inline]
    pub fn lookup(&self, xin: X) -> Y {
        lookup(xin, self.keys, self.values)
    }

    /// Check the table once at startup. [`Table::lookup`] never calls this.
    pub fn validate(&self) -> MccResult<()> {
        validate(self.keys, self.values)
    }
}

/// Check that a pair of slices is a usable table: not empty, equal lengths, and keys never going up.
///
/// Equal neighbouring keys are allowed.
pub fn validate<X: TableKey, Y>(keys: &[X], values: &[Y]) -> MccResult<()> {
    if keys.len() != values.len() {
        return Err(MccError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    if keys.is_empty() {
        return Err(MccError::EmptyTable);
    }

    if let Some(i) = keys.iter().tuple_windows().position(|(a, b)| b > a) {
        return Err(MccError::KeysNotDescending { index: i + 1 });
    }

    Ok(())
}
