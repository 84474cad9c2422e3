#![no_std]
#![no_main]

mod motors;
mod sensors;
mod serial;

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::usart::{Config as UartConfig, Uart};

use embassy_stm32::Config;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use linekick_control::{
    Command, Direction, Params, RobotContext, RobotMode, TurnKind, Wheel, state, steer,
};
use motors::MotorDriver;
use sensors::LineSensors;
use serial::SerialLink;

bind_interrupts!(struct Irqs {
    USART6 => embassy_stm32::usart::InterruptHandler<embassy_stm32::peripherals::USART6>;
});

defmt::timestamp!("{=u64}", { embassy_time::Instant::now().as_millis() });

/// Idle delay between control cycles.
const CYCLE_MS: u64 = 10;

#[embassy_executor::task]
async fn blink_task(mut led: Output<'static>) {
    loop {
        led.toggle();
        Timer::after_millis(500).await;
    }
}

/// One complete timed turn: full-power kick pulse to break static friction,
/// then the sustain phase at the maneuver's own tuning, then motors off.
/// Blocks until both phases have run; nothing can preempt it.
async fn run_turn(motors: &mut MotorDriver<'_>, params: &Params, kind: TurnKind) {
    let (right_dir, left_dir) = kind.wheel_directions();

    motors.set_wheel(Wheel::Right, right_dir, params.kick_speed);
    motors.set_wheel(Wheel::Left, left_dir, params.kick_speed);
    Timer::after_millis(params.kick_ms as u64).await;

    motors.set_wheel(Wheel::Right, right_dir, kind.sustain_speed(params));
    motors.set_wheel(Wheel::Left, left_dir, kind.sustain_speed(params));
    Timer::after_millis(kind.sustain_ms(params) as u64).await;

    motors.stop_all();
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Config::default());

    info!("=== LineKick Robot Controller ===");

    // LED blink task
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    spawner.spawn(blink_task(led)).unwrap();

    // Motor driver: TIM1 PWM on PA8/PA9, direction pins PB5/PB4 + PB10/PB6
    let mut motors = MotorDriver::new(p.TIM1, p.PA8, p.PA9, p.PB5, p.PB4, p.PB10, p.PB6);
    info!("Motors initialized");

    // Line detectors (digital): PC0=right, PC1=left
    let sensors = LineSensors::new(
        Input::new(p.PC0, Pull::None),
        Input::new(p.PC1, Pull::None),
    );
    info!("Sensors initialized");

    // Command link (USART6): PC6=TX, PC7=RX
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600; // HC-05 default baud rate

    let uart = Uart::new(
        p.USART6,
        p.PC7, // RX
        p.PC6, // TX
        Irqs,
        p.DMA2_CH6, // TX DMA
        p.DMA2_CH1, // RX DMA
        uart_config,
    )
    .unwrap();

    let mut link = SerialLink::new(uart);
    info!("Serial link initialized (9600 baud)");

    let mut ctx = RobotContext::default();

    // Announce the power-on mode before the first cycle.
    let _ = link.send_line(ctx.mode.report()).await;
    info!("Ready, boot mode reported");

    loop {
        // Drain and dispatch every complete line before the drive cycle. A
        // turn maneuver blocks right here until it finishes.
        while let Some(cmd) = link.next_command().await {
            match cmd {
                Command::Set { key, value } => {
                    let stored = ctx.params.set(key, value);
                    info!("param {} set to {}", key, stored);
                    let _ = link.send_ack(key, stored).await;
                }
                Command::Go => {
                    if let Some(report) = ctx.mode.go() {
                        info!("GO: line-following resumed");
                        let _ = link.send_line(report).await;
                    }
                }
                Command::Stop => {
                    motors.stop_all();
                    let report = ctx.mode.stop();
                    info!("ST: motors halted");
                    let _ = link.send_line(report).await;
                    let _ = link.send_line(state::STOP_DONE).await;
                }
                Command::Turn(kind) => {
                    // Turns are only honored while stopped.
                    if ctx.mode == RobotMode::Stopped {
                        info!("turn {} started", kind);
                        run_turn(&mut motors, &ctx.params, kind).await;
                        info!("turn {} complete", kind);
                        let _ = link.send_line(kind.done_marker()).await;
                    }
                }
                Command::Unrecognized => {}
            }
        }

        if ctx.mode == RobotMode::Running {
            let decision = steer(
                sensors.read_right(),
                sensors.read_left(),
                ctx.params.line_speed,
            );
            motors.set_wheel(Wheel::Right, Direction::Forward, decision.right);
            motors.set_wheel(Wheel::Left, Direction::Forward, decision.left);
        }

        Timer::after_millis(CYCLE_MS).await;
    }
}
