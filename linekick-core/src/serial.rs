//! Command link over USART6 (HC-05 class serial adapter, 9600 baud).
//!
//! Pins:
//! - PC6: TX (to adapter RX)
//! - PC7: RX (from adapter TX)
//!
//! Inbound traffic is LF-terminated ASCII lines fed through
//! [`CommandReader`]; outbound lines are the protocol payloads terminated
//! with CRLF.

use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Uart};
use embassy_time::{Duration, with_timeout};

use linekick_control::{Command, CommandReader, ParamKey, ack_line};

/// How long a drain waits for the next byte before deciding the line is
/// idle. Comfortably above one byte time at 9600 baud (~1 ms).
const POLL_TIMEOUT: Duration = Duration::from_millis(5);

/// Serial command link: owns the UART and the line accumulator.
pub struct SerialLink<'d> {
    uart: Uart<'d, Async>,
    reader: CommandReader,
}

impl<'d> SerialLink<'d> {
    pub fn new(uart: Uart<'d, Async>) -> Self {
        Self {
            uart,
            reader: CommandReader::new(),
        }
    }

    /// Drain pending bytes without blocking the control loop. Returns the
    /// next completed command, or `None` once the link has gone idle.
    pub async fn next_command(&mut self) -> Option<Command> {
        loop {
            let mut buf = [0u8; 1];
            match with_timeout(POLL_TIMEOUT, self.uart.read(&mut buf)).await {
                Ok(Ok(())) => {
                    if let Some(cmd) = self.reader.feed(buf[0]) {
                        return Some(cmd);
                    }
                }
                Ok(Err(_)) => {
                    // Framing/overrun noise; drop it and let the line buffer
                    // resynchronize on the next terminator.
                    return None;
                }
                Err(_) => return None,
            }
        }
    }

    /// Send one protocol line (payload + CRLF).
    pub async fn send_line(&mut self, payload: &str) -> Result<(), usart::Error> {
        self.uart.write(payload.as_bytes()).await?;
        self.uart.write(b"\r\n").await
    }

    /// Acknowledge a parameter write with its stored value.
    pub async fn send_ack(&mut self, key: ParamKey, value: u16) -> Result<(), usart::Error> {
        self.send_line(ack_line(key, value).as_str()).await
    }
}
