//! MCC15325 firmware: a breathing status LED driven from the COS task table.
#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]
#![feature(impl_trait_in_assoc_type)]

use embassy_executor::Spawner;
use embassy_stm32::gpio::OutputType;
use embassy_stm32::peripherals::TIM1;
use embassy_stm32::time::hz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_time::{Duration, Ticker};
use mcc_core::config::Config;
use mcc_core::cos::{Cos, SlotBudget, Task, TaskRate};
use mcc_core::led::{BREATH_CURVE, BreathingLed};
use mcc_core::logging::{debug, error, info};
use {defmt_rtt as _, panic_probe as _};

/// everything the tasks share. owned by main and lent to one task at a time
struct Board {
    led: BreathingLed,
    pwm: SimplePwm<'static, TIM1>,
}

fn breath_led_control(board: &mut Board) {
    board.led.control();
}

fn led2_pwm(board: &mut Board) {
    if let Some(duty) = board.led.pwm() {
        board.pwm.ch1().set_duty_cycle(duty);
    }
}

/// order matters. the duty is computed before it is written in the same slot
static TASKS: [Task<Board>; 2] = [
    Task::new(breath_led_control, TaskRate::EverySlot),
    Task::new(led2_pwm, TaskRate::EverySlot),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let config = Config::default();

    let peripheral_config = Default::default();

    let p = embassy_stm32::init(peripheral_config);

    info!("MCC15325 booting");

    match BREATH_CURVE.validate() {
        Ok(()) => debug!("breath curve has {} points", BREATH_CURVE.len()),
        Err(err) => error!("breath curve is broken: {}", err),
    }

    // TIM1 CH1 on PA8
    let led_pin = PwmPin::new_ch1(p.PA8, OutputType::PushPull);
    let mut pwm = SimplePwm::new(
        p.TIM1,
        Some(led_pin),
        None,
        None,
        None,
        hz(config.pwm_frequency_hz),
        Default::default(),
    );
    pwm.ch1().enable();

    let mut led = BreathingLed::from_config(&config);
    led.set_max_duty(pwm.max_duty_cycle());
    info!("pwm max duty: {}", pwm.max_duty_cycle());

    let mut board = Board { led, pwm };

    let mut cos = Cos::new(&TASKS);

    let slot_period = Duration::from_millis(config.slot_period_ms.into());
    let mut budget = SlotBudget::new(slot_period);
    let mut ticker = Ticker::every(slot_period);

    loop {
        ticker.next().await;

        // the pwm period is far shorter than a slot, so at least one has ended since the last tick
        board.led.set_timer_flag();

        budget.start();
        cos.run_slot(&mut board);
        budget.finish();
    }
}
