//! Hardware-independent control core for the LineKick robot.
//!
//! Everything that does not touch a peripheral lives here: the serial
//! command protocol, the tunable parameter store, the stop/go mode machine,
//! the line-follow steering table, and the timed-turn maneuver plans. The
//! firmware crate wires these to the motor driver, sensors, and UART.
//!
//! The crate is `no_std` with no HAL dependency, so the whole protocol and
//! decision logic is testable on a host.

#![no_std]

pub mod command;
pub mod drive;
pub mod params;
pub mod state;

pub use command::{Command, CommandReader};
pub use drive::{Direction, Steer, TurnKind, Wheel, steer};
pub use params::{AckLine, ParamKey, Params, ack_line};
pub use state::{RobotContext, RobotMode};
