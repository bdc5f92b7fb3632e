//! Breathing status LED.
//!
//! `control` runs every COS slot and works out the next duty. The PWM timer's period interrupt calls
//! `set_timer_flag` and `pwm` hands the duty over once per flag, so the compare register only changes on a period
//! boundary.
use crate::clip::{Accumulator, clip_unsigned};
use crate::config::Config;
use crate::logging::trace;
use crate::lookup::Table;

/// brightness and duty are both in permille before scaling to the timer
const PERMILLE: Accumulator = 1000;

/// How far up the ramp (permille) -> brightness (permille). Roughly x^2 so the dim end lingers.
pub static BREATH_CURVE: Table<u16, u16> = Table::new(
    &[1000, 875, 750, 625, 500, 375, 250, 125, 0],
    &[1000, 766, 563, 391, 250, 141, 63, 16, 0],
);

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathingLed {
    period_slots: u16,
    phase: u16,
    max_duty: u16,
    duty: u16,
    timer_flag: bool,
}

impl BreathingLed {
    /// a period under 2 slots can't go up and down, so it is raised to 2
    pub fn new(period_slots: u16, max_duty: u16) -> Self {
        Self {
            period_slots: period_slots.max(2),
            phase: 0,
            max_duty,
            duty: 0,
            timer_flag: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.breath_period_slots, config.max_duty)
    }

    /// the timer decides what full brightness is
    pub fn set_max_duty(&mut self, max_duty: u16) {
        self.max_duty = max_duty;
        self.duty = self.duty.min(max_duty);
    }

    /// One slot of breathing.
    pub fn control(&mut self) {
        let brightness = BREATH_CURVE.lookup(self.ramp());

        let duty = Accumulator::from(brightness) * Accumulator::from(self.max_duty) / PERMILLE;
        self.duty = clip_unsigned(duty, 0, self.max_duty);

        trace!("breath phase {} duty {}", self.phase, self.duty);

        self.phase = (self.phase + 1) % self.period_slots;
    }

    /// the PWM period ended
    pub fn set_timer_flag(&mut self) {
        self.timer_flag = true;
    }

    /// The duty to write, once per timer flag.
    pub fn pwm(&mut self) -> Option<u16> {
        if core::mem::take(&mut self.timer_flag) {
            Some(self.duty)
        } else {
            None
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn phase(&self) -> u16 {
        self.phase
    }

    /// permille of the way from dark to full at the current phase. up for the first half, down for the second
    fn ramp(&self) -> u16 {
        let period = Accumulator::from(self.period_slots);
        let half = period / 2;
        let phase = Accumulator::from(self.phase);

        let climbed = if phase < half { phase } else { period - phase };

        clip_unsigned(climbed * PERMILLE / half, 0, PERMILLE as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::{BREATH_CURVE, BreathingLed};
    use crate::config::Config;

    /// run `control` until the phase that was just used is `phase`
    fn at_phase(led: &mut BreathingLed, phase: u16) -> u16 {
        while led.phase() != phase {
            led.control();
        }
        led.control();
        led.duty()
    }

    #[test]
    fn test_curve_is_valid() {
        assert_eq!(BREATH_CURVE.validate(), Ok(()));
    }

    #[test]
    fn test_ramp() {
        let mut led = BreathingLed::new(400, 1000);

        assert_eq!(led.ramp(), 0);

        for _ in 0..100 {
            led.control();
        }
        assert_eq!(led.ramp(), 500);

        for _ in 0..100 {
            led.control();
        }
        assert_eq!(led.ramp(), 1000);

        for _ in 0..100 {
            led.control();
        }
        assert_eq!(led.ramp(), 500);
    }

    #[test_log::test]
    fn test_breath_shape() {
        let mut led = BreathingLed::new(400, 1000);

        assert_eq!(at_phase(&mut led, 0), 0);
        assert_eq!(at_phase(&mut led, 100), 250);
        assert_eq!(at_phase(&mut led, 200), 1000);
        assert_eq!(at_phase(&mut led, 300), 250);
        assert_eq!(at_phase(&mut led, 399), 0);

        // wrapped around
        assert_eq!(led.phase(), 0);
    }

    #[test]
    fn test_breath_is_symmetric() {
        let mut led = BreathingLed::new(400, 999);

        let mut duties = [0u16; 400];
        for duty in duties.iter_mut() {
            led.control();
            *duty = led.duty();
        }

        for p in 1..200 {
            assert_eq!(duties[p], duties[400 - p], "phase {}", p);
        }
    }

    #[test]
    fn test_rising_half_never_dims() {
        let mut led = BreathingLed::new(400, 4095);

        let mut last = 0;
        for _ in 0..=200 {
            led.control();
            assert!(led.duty() >= last);
            last = led.duty();
        }
        assert_eq!(last, 4095);
    }

    #[test]
    fn test_max_duty_scales() {
        let mut led = BreathingLed::new(4, 1000);

        assert_eq!(at_phase(&mut led, 2), 1000);

        led.set_max_duty(200);
        assert_eq!(led.duty(), 200);

        assert_eq!(at_phase(&mut led, 2), 200);
        assert_eq!(at_phase(&mut led, 1), 50);
    }

    #[test]
    fn test_tiny_period() {
        let mut led = BreathingLed::new(0, 100);

        led.control();
        assert_eq!(led.duty(), 0);
        led.control();
        assert_eq!(led.duty(), 100);
        led.control();
        assert_eq!(led.duty(), 0);
    }

    #[test]
    fn test_pwm_waits_for_timer() {
        let mut led = BreathingLed::from_config(&Config::default());

        led.control();
        assert_eq!(led.pwm(), None);

        led.set_timer_flag();
        assert_eq!(led.pwm(), Some(0));
        assert_eq!(led.pwm(), None);
    }
}
