//! Motor driver module for the LineKick robot.
//!
//! Drives two DC motors through a TB6612FNG dual H-bridge: one PWM channel
//! per motor for magnitude plus two GPIO direction inputs per bridge.

use embassy_stm32::gpio::{Level, Output, OutputType, Speed};
use embassy_stm32::peripherals::{PA8, PA9, PB4, PB5, PB6, PB10, TIM1};
use embassy_stm32::time::hz;
use embassy_stm32::timer::Channel;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embedded_hal::Pwm;

use linekick_control::{Direction, Wheel};

/// PWM frequency for motor control (20kHz - inaudible)
const PWM_FREQUENCY: u32 = 20_000;

/// Dual DC motor driver via TB6612FNG.
///
/// Uses TIM1 channels:
/// - CH1 (PA8): PWMA, right motor magnitude
/// - CH2 (PA9): PWMB, left motor magnitude
///
/// Direction inputs:
/// - PB5 (AIN1) / PB4 (AIN2): right motor
/// - PB10 (BIN1) / PB6 (BIN2): left motor
pub struct MotorDriver<'d> {
    pwm: SimplePwm<'d, TIM1>,
    max_duty: u32,
    right_in1: Output<'d>,
    right_in2: Output<'d>,
    left_in1: Output<'d>,
    left_in2: Output<'d>,
}

impl<'d> MotorDriver<'d> {
    /// Create a new motor driver.
    ///
    /// # Arguments
    /// * `tim1` - TIM1 peripheral
    /// * `pa8` - PWM pin for the right motor (PWMA)
    /// * `pa9` - PWM pin for the left motor (PWMB)
    /// * `pb5`, `pb4` - right bridge direction inputs (AIN1/AIN2)
    /// * `pb10`, `pb6` - left bridge direction inputs (BIN1/BIN2)
    pub fn new(
        tim1: TIM1,
        pa8: PA8,
        pa9: PA9,
        pb5: PB5,
        pb4: PB4,
        pb10: PB10,
        pb6: PB6,
    ) -> Self {
        let pwm_right = PwmPin::new_ch1(pa8, OutputType::PushPull);
        let pwm_left = PwmPin::new_ch2(pa9, OutputType::PushPull);

        let mut pwm = SimplePwm::new(
            tim1,
            Some(pwm_right),
            Some(pwm_left),
            None,
            None,
            hz(PWM_FREQUENCY),
            CountingMode::EdgeAlignedUp,
        );

        let max_duty = pwm.get_max_duty();

        pwm.enable(Channel::Ch1);
        pwm.enable(Channel::Ch2);

        // Start with motors stopped
        pwm.set_duty(Channel::Ch1, 0);
        pwm.set_duty(Channel::Ch2, 0);

        Self {
            pwm,
            max_duty,
            right_in1: Output::new(pb5, Level::Low, Speed::Low),
            right_in2: Output::new(pb4, Level::Low, Speed::Low),
            left_in1: Output::new(pb10, Level::Low, Speed::Low),
            left_in2: Output::new(pb6, Level::Low, Speed::Low),
        }
    }

    /// Drive one wheel at a direction and magnitude.
    ///
    /// # Arguments
    /// * `wheel` - Which wheel to drive
    /// * `direction` - Rotation sense
    /// * `magnitude` - PWM magnitude (0-255)
    pub fn set_wheel(&mut self, wheel: Wheel, direction: Direction, magnitude: u8) {
        let duty = self.max_duty * magnitude as u32 / 255;

        let (channel, in1, in2) = match wheel {
            Wheel::Right => (Channel::Ch1, &mut self.right_in1, &mut self.right_in2),
            Wheel::Left => (Channel::Ch2, &mut self.left_in1, &mut self.left_in2),
        };

        match direction {
            Direction::Forward => {
                in1.set_high();
                in2.set_low();
            }
            Direction::Reverse => {
                in1.set_low();
                in2.set_high();
            }
        }

        self.pwm.set_duty(channel, duty);
    }

    /// Stop both motors immediately. Direction pins are left as-is; only the
    /// PWM magnitudes drop to zero.
    pub fn stop_all(&mut self) {
        self.pwm.set_duty(Channel::Ch1, 0);
        self.pwm.set_duty(Channel::Ch2, 0);
    }
}
