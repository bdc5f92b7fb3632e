pub struct Config {
    /// how often the COS runs one slot
    pub slot_period_ms: u16,
    /// one full breath (dark -> bright -> dark). counted in slots so it follows `slot_period_ms`
    pub breath_period_slots: u16,
    pub pwm_frequency_hz: u32,
    /// the duty that means "fully on". the firmware overwrites this with the timer's real max duty
    pub max_duty: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_period_ms: 10,
            // 4 seconds at 10ms per slot
            breath_period_slots: 400,
            pwm_frequency_hz: 10_000,
            max_duty: 1000,
        }
    }
}
