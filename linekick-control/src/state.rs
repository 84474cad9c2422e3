//! Robot operating mode and the owned runtime context.

use crate::params::Params;

/// Report payload for the running mode.
pub const REPORT_RUNNING: &str = "RX_GO";
/// Report payload for the stopped mode.
pub const REPORT_STOPPED: &str = "RX_ST";
/// Completion marker emitted after a stop command, following the report.
pub const STOP_DONE: &str = "D_ST";

/// Operating mode: `Running` enables the line-follow loop, `Stopped`
/// suspends it and enables the timed turn commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotMode {
    Stopped,
    Running,
}

impl Default for RobotMode {
    /// The robot powers up in `Running`, matching the state report it sends
    /// at boot.
    fn default() -> Self {
        RobotMode::Running
    }
}

impl RobotMode {
    /// The state-report payload for the current mode.
    pub fn report(self) -> &'static str {
        match self {
            RobotMode::Running => REPORT_RUNNING,
            RobotMode::Stopped => REPORT_STOPPED,
        }
    }

    /// Handle `GO`: returns the report line to emit, or `None` when already
    /// running (silent no-op).
    pub fn go(&mut self) -> Option<&'static str> {
        if *self == RobotMode::Running {
            return None;
        }
        *self = RobotMode::Running;
        Some(self.report())
    }

    /// Handle `ST`: unconditionally stop. Always returns the stopped report;
    /// the caller halts the motors first and follows with [`STOP_DONE`].
    pub fn stop(&mut self) -> &'static str {
        *self = RobotMode::Stopped;
        self.report()
    }
}

/// The single owned record of all mutable runtime state. One instance lives
/// in the control loop; nothing else writes to it.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RobotContext {
    pub mode: RobotMode,
    pub params: Params,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_running() {
        let ctx = RobotContext::default();
        assert_eq!(ctx.mode, RobotMode::Running);
        assert_eq!(ctx.mode.report(), "RX_GO");
    }

    #[test]
    fn go_while_running_is_silent() {
        let mut mode = RobotMode::Running;
        assert_eq!(mode.go(), None);
        assert_eq!(mode, RobotMode::Running);
    }

    #[test]
    fn go_from_stopped_reports() {
        let mut mode = RobotMode::Stopped;
        assert_eq!(mode.go(), Some("RX_GO"));
        assert_eq!(mode, RobotMode::Running);
    }

    #[test]
    fn stop_always_reports() {
        let mut mode = RobotMode::Running;
        assert_eq!(mode.stop(), "RX_ST");
        assert_eq!(mode, RobotMode::Stopped);
        // Repeated stop re-emits the same report.
        assert_eq!(mode.stop(), "RX_ST");
    }
}
