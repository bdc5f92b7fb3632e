/// the slot counter wraps after this many slots. every rate class repeats within one frame
pub const SLOTS_PER_FRAME: u8 = 4;

/// How often a task runs, and in which slot.
///
/// The half and quarter speed classes are split across slots so slow tasks don't all land in the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskRate {
    EverySlot,
    HalfSpeedS1,
    HalfSpeedS2,
    QuarterSpeedS1,
    QuarterSpeedS2,
    QuarterSpeedS3,
    QuarterSpeedS4,
}

impl TaskRate {
    pub const fn runs_in(self, slot: u8) -> bool {
        let slot = slot % SLOTS_PER_FRAME;

        match self {
            Self::EverySlot => true,
            Self::HalfSpeedS1 => slot % 2 == 0,
            Self::HalfSpeedS2 => slot % 2 == 1,
            Self::QuarterSpeedS1 => slot == 0,
            Self::QuarterSpeedS2 => slot == 1,
            Self::QuarterSpeedS3 => slot == 2,
            Self::QuarterSpeedS4 => slot == 3,
        }
    }

    /// slots between runs
    pub const fn divider(self) -> u8 {
        match self {
            Self::EverySlot => 1,
            Self::HalfSpeedS1 | Self::HalfSpeedS2 => 2,
            Self::QuarterSpeedS1
            | Self::QuarterSpeedS2
            | Self::QuarterSpeedS3
            | Self::QuarterSpeedS4 => 4,
        }
    }
}
