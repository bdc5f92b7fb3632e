//! Cooperative operating system (COS): a fixed table of tasks, each run in the slots its [`TaskRate`] picks.
//!
//! There is no preemption. Something outside (a ticker, a timer interrupt) calls [`Cos::run_slot`] once per slot
//! and every due task runs to completion in table order.
#[cfg(any(feature = "std", feature = "embassy"))]
mod budget;
mod rate;
mod task;

#[cfg(any(feature = "std", feature = "embassy"))]
pub use budget::SlotBudget;
pub use rate::{SLOTS_PER_FRAME, TaskRate};
pub use task::{Task, TaskList};

use crate::logging::{info, trace};

pub struct Cos<'a, C> {
    tasks: &'a [Task<C>],
    slot: u8,
}

impl<'a, C> Cos<'a, C> {
    pub fn new(tasks: &'a [Task<C>]) -> Self {
        info!("COS running {} tasks", tasks.len());

        Self { tasks, slot: 0 }
    }

    /// run every task due in the current slot, then move to the next slot. returns how many tasks ran
    pub fn run_slot(&mut self, ctx: &mut C) -> usize {
        let slot = self.slot;
        let mut ran = 0;

        for task in self.tasks.iter().filter(|task| task.rate.runs_in(slot)) {
            (task.run)(ctx);
            ran += 1;
        }

        trace!("slot {}: {} tasks", slot, ran);

        self.slot = (slot + 1) % SLOTS_PER_FRAME;

        ran
    }

    /// the slot the next `run_slot` will run
    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn tasks(&self) -> &'a [Task<C>] {
        self.tasks
    }
}
