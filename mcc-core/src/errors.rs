use thiserror::Error;

/// startup-time problems only. clip, lookup, and slot dispatch never return errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MccError {
    #[error("task list is full ({capacity} tasks)")]
    TaskListFull { capacity: usize },
    #[error("lookup table has no pairs")]
    EmptyTable,
    #[error("lookup table has {keys} keys but {values} values")]
    LengthMismatch { keys: usize, values: usize },
    #[error("lookup table keys must descend. key {index} is above the one before it")]
    KeysNotDescending { index: usize },
}

pub type MccResult<T> = Result<T, MccError>;
