//! Wheel-level drive decisions: the line-follow steering table and the
//! timed-turn maneuver plans.
//!
//! The right wheel is H-bridge channel A, the left wheel channel B; the
//! steering table below fixes that assignment.

use crate::params::Params;

/// Wheel identifier for the motor driver interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wheel {
    Right,
    Left,
}

/// Wheel rotation sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
}

/// One line-follow decision: forward magnitude per wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steer {
    pub right: u8,
    pub left: u8,
}

/// The reactive two-sensor steering table, one lookup per control cycle.
///
/// An asserted sensor means that side has drifted off the line; both low
/// means centered. No smoothing and no history: each cycle stands alone.
pub fn steer(right_off: bool, left_off: bool, speed: u8) -> Steer {
    match (right_off, left_off) {
        // Centered: straight ahead.
        (false, false) => Steer {
            right: speed,
            left: speed,
        },
        // Drifting: drive the off-line side's wheel only, pivoting back on.
        (true, false) => Steer {
            right: speed,
            left: 0,
        },
        (false, true) => Steer {
            right: 0,
            left: speed,
        },
        // Line lost or ambiguous: hold still.
        (true, true) => Steer { right: 0, left: 0 },
    }
}

/// The two timed in-place maneuvers, named by their wire tokens. They rotate
/// in opposite senses: one wheel forward, the other reverse, swapped between
/// the two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnKind {
    Tn,
    Rt,
}

impl TurnKind {
    /// Rotation sense as (right wheel, left wheel) directions, applied to
    /// both the kick pulse and the sustain phase.
    pub fn wheel_directions(self) -> (Direction, Direction) {
        match self {
            TurnKind::Tn => (Direction::Reverse, Direction::Forward),
            TurnKind::Rt => (Direction::Forward, Direction::Reverse),
        }
    }

    /// Sustain-phase magnitude for this maneuver.
    pub fn sustain_speed(self, params: &Params) -> u8 {
        match self {
            TurnKind::Tn => params.tn_speed,
            TurnKind::Rt => params.rt_speed,
        }
    }

    /// Sustain-phase duration for this maneuver.
    pub fn sustain_ms(self, params: &Params) -> u16 {
        match self {
            TurnKind::Tn => params.tn_time_ms,
            TurnKind::Rt => params.rt_time_ms,
        }
    }

    /// Completion marker emitted once the maneuver has finished.
    pub fn done_marker(self) -> &'static str {
        match self {
            TurnKind::Tn => "D_TN",
            TurnKind::Rt => "D_RT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamKey;

    #[test]
    fn steering_table_rows() {
        let s = steer(false, false, 220);
        assert_eq!(s, Steer { right: 220, left: 220 });

        let s = steer(true, false, 220);
        assert_eq!(s, Steer { right: 220, left: 0 });

        let s = steer(false, true, 220);
        assert_eq!(s, Steer { right: 0, left: 220 });

        let s = steer(true, true, 220);
        assert_eq!(s, Steer { right: 0, left: 0 });
    }

    #[test]
    fn turn_kinds_rotate_oppositely() {
        let (tn_r, tn_l) = TurnKind::Tn.wheel_directions();
        let (rt_r, rt_l) = TurnKind::Rt.wheel_directions();
        assert_eq!(tn_r, Direction::Reverse);
        assert_eq!(tn_l, Direction::Forward);
        assert_eq!(rt_r, Direction::Forward);
        assert_eq!(rt_l, Direction::Reverse);
    }

    #[test]
    fn sustain_uses_the_maneuvers_own_tuning() {
        let mut params = Params::default();
        params.set(ParamKey::TnSpeed, 100);
        params.set(ParamKey::RtTimeMs, 900);

        // TN sustain picks up the new speed, independent of the kick tuning.
        assert_eq!(TurnKind::Tn.sustain_speed(&params), 100);
        assert_eq!(TurnKind::Tn.sustain_ms(&params), 1500);
        assert_eq!(TurnKind::Rt.sustain_speed(&params), 240);
        assert_eq!(TurnKind::Rt.sustain_ms(&params), 900);
        assert_eq!(params.kick_speed, 255);
    }

    #[test]
    fn done_markers() {
        assert_eq!(TurnKind::Tn.done_marker(), "D_TN");
        assert_eq!(TurnKind::Rt.done_marker(), "D_RT");
    }
}
