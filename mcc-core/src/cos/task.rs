use core::fmt;
use core::ops::Deref;

use heapless::Vec;

use super::rate::TaskRate;
use crate::errors::{MccError, MccResult};
use crate::logging::debug;

/// One entry in the task table. `C` is whatever state the tasks share (pins, timers, controllers).
///
/// Tasks must return quickly. Every other task in the slot waits on them.
pub struct Task<C> {
    pub run: fn(&mut C),
    pub rate: TaskRate,
}

impl<C> Task<C> {
    pub const fn new(run: fn(&mut C), rate: TaskRate) -> Self {
        Self { run, rate }
    }
}

// derive would require `C: Clone`
impl<C> Clone for Task<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Task<C> {}

impl<C> fmt::Debug for Task<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("run", &(self.run as *const ()))
            .field("rate", &self.rate)
            .finish()
    }
}

/// Build the task table at startup when it can't be a `const` array. Nothing can be added once the COS has it.
pub struct TaskList<C, const N: usize> {
    tasks: Vec<Task<C>, N>,
}

impl<C, const N: usize> Default for TaskList<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> TaskList<C, N> {
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn push(&mut self, run: fn(&mut C), rate: TaskRate) -> MccResult<()> {
        self.tasks
            .push(Task::new(run, rate))
            .map_err(|_| MccError::TaskListFull { capacity: N })?;

        debug!("registered task {} at {:?}", self.tasks.len(), rate);

        Ok(())
    }
}

impl<C, const N: usize> Deref for TaskList<C, N> {
    type Target = [Task<C>];

    fn deref(&self) -> &Self::Target {
        &self.tasks
    }
}
