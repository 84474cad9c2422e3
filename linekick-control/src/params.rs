//! Runtime-tunable drive parameters.
//!
//! Every field is written only through [`Params::set`], which clamps to the
//! field's range and reports the stored value, so a parameter can never hold
//! an out-of-range number. Out-of-range input is clamped, not rejected.

use core::fmt::Write;

use heapless::String;

/// Upper bound for all millisecond durations.
pub const TIME_MAX_MS: u16 = 20_000;

/// Formatted `ACK_<KEY>=<value>` payload (longest is `ACK_KICK_SPD=255`).
pub type AckLine = String<24>;

/// The seven tunable parameters, addressed by wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamKey {
    LineSpeed,
    TnSpeed,
    TnTimeMs,
    RtSpeed,
    RtTimeMs,
    KickSpeed,
    KickMs,
}

impl ParamKey {
    /// Look up a key by its wire token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LS_SPD" => Some(Self::LineSpeed),
            "TN_SPD" => Some(Self::TnSpeed),
            "TN_TMS" => Some(Self::TnTimeMs),
            "RT_SPD" => Some(Self::RtSpeed),
            "RT_TMS" => Some(Self::RtTimeMs),
            "KICK_SPD" => Some(Self::KickSpeed),
            "KICK_MS" => Some(Self::KickMs),
            _ => None,
        }
    }

    /// The wire token, as echoed in acknowledgments.
    pub fn token(self) -> &'static str {
        match self {
            Self::LineSpeed => "LS_SPD",
            Self::TnSpeed => "TN_SPD",
            Self::TnTimeMs => "TN_TMS",
            Self::RtSpeed => "RT_SPD",
            Self::RtTimeMs => "RT_TMS",
            Self::KickSpeed => "KICK_SPD",
            Self::KickMs => "KICK_MS",
        }
    }
}

/// Drive parameter store. Speeds are PWM magnitudes (0..=255), durations are
/// milliseconds (0..=20000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Params {
    /// Forward magnitude while line-following.
    pub line_speed: u8,
    /// Sustain magnitude for the TN maneuver.
    pub tn_speed: u8,
    /// Sustain duration for the TN maneuver.
    pub tn_time_ms: u16,
    /// Sustain magnitude for the RT maneuver.
    pub rt_speed: u8,
    /// Sustain duration for the RT maneuver.
    pub rt_time_ms: u16,
    /// Magnitude of the kick pulse that opens every turn.
    pub kick_speed: u8,
    /// Kick pulse duration.
    pub kick_ms: u16,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            line_speed: 220,
            tn_speed: 240,
            tn_time_ms: 1500,
            rt_speed: 240,
            rt_time_ms: 1500,
            kick_speed: 255,
            kick_ms: 60,
        }
    }
}

impl Params {
    /// Clamp `raw` into the field's range, store it, and return the stored
    /// value for acknowledgment.
    pub fn set(&mut self, key: ParamKey, raw: i32) -> u16 {
        match key {
            ParamKey::LineSpeed => {
                self.line_speed = clamp_speed(raw);
                self.line_speed as u16
            }
            ParamKey::TnSpeed => {
                self.tn_speed = clamp_speed(raw);
                self.tn_speed as u16
            }
            ParamKey::TnTimeMs => {
                self.tn_time_ms = clamp_time(raw);
                self.tn_time_ms
            }
            ParamKey::RtSpeed => {
                self.rt_speed = clamp_speed(raw);
                self.rt_speed as u16
            }
            ParamKey::RtTimeMs => {
                self.rt_time_ms = clamp_time(raw);
                self.rt_time_ms
            }
            ParamKey::KickSpeed => {
                self.kick_speed = clamp_speed(raw);
                self.kick_speed as u16
            }
            ParamKey::KickMs => {
                self.kick_ms = clamp_time(raw);
                self.kick_ms
            }
        }
    }
}

fn clamp_speed(raw: i32) -> u8 {
    raw.clamp(0, u8::MAX as i32) as u8
}

fn clamp_time(raw: i32) -> u16 {
    raw.clamp(0, TIME_MAX_MS as i32) as u16
}

/// Format the acknowledgment payload for a stored parameter value.
pub fn ack_line(key: ParamKey, value: u16) -> AckLine {
    let mut line = AckLine::new();
    // Cannot overflow: the longest payload is 18 characters.
    let _ = write!(line, "ACK_{}={}", key.token(), value);
    line
}
