//! End-to-end protocol checks: transport bytes through the reader into the
//! parameter store and mode machine, verifying the exact response payloads.

use linekick_control::{
    ack_line, Command, CommandReader, ParamKey, RobotContext, RobotMode, TurnKind,
};

fn commands(stream: &[u8]) -> Vec<Command> {
    let mut reader = CommandReader::new();
    stream.iter().filter_map(|&b| reader.feed(b)).collect()
}

#[test]
fn tuning_session_clamps_and_acks() {
    let mut ctx = RobotContext::default();
    let mut acks = Vec::new();

    for cmd in commands(b"LS_SPD,300\r\nTN_TMS,-20\r\nKICK_MS,500\r\n") {
        match cmd {
            Command::Set { key, value } => {
                let stored = ctx.params.set(key, value);
                acks.push(ack_line(key, stored).as_str().to_owned());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    assert_eq!(acks, ["ACK_LS_SPD=255", "ACK_TN_TMS=0", "ACK_KICK_MS=500"]);
    assert_eq!(ctx.params.line_speed, 255);
    assert_eq!(ctx.params.tn_time_ms, 0);
    assert_eq!(ctx.params.kick_ms, 500);
}

#[test]
fn mode_round_trip_over_the_wire() {
    let mut ctx = RobotContext::default();
    let mut lines = Vec::new();

    for cmd in commands(b"GO\nST\nGO\n") {
        match cmd {
            Command::Go => {
                if let Some(report) = ctx.mode.go() {
                    lines.push(report);
                }
            }
            Command::Stop => {
                lines.push(ctx.mode.stop());
                lines.push(linekick_control::state::STOP_DONE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    // The first GO arrives while already running and stays silent.
    assert_eq!(lines, ["RX_ST", "D_ST", "RX_GO"]);
    assert_eq!(ctx.mode, RobotMode::Running);
}

#[test]
fn turn_commands_parse_after_noise() {
    // An overlong junk burst, a shape-valid unknown key, and an unknown
    // token must all pass through as Unrecognized without disturbing the
    // commands around them.
    let mut stream = Vec::new();
    stream.extend_from_slice(b"ST\n");
    stream.extend_from_slice(&[b'Z'; 48]);
    stream.extend_from_slice(b"\nSPEED,10\nHELLO\nTN\nRT\n");

    let cmds = commands(&stream);
    assert_eq!(
        cmds,
        [
            Command::Stop,
            Command::Unrecognized,
            Command::Unrecognized,
            Command::Unrecognized,
            Command::Turn(TurnKind::Tn),
            Command::Turn(TurnKind::Rt),
        ]
    );
}

#[test]
fn sustain_tuning_feeds_the_maneuver() {
    let mut ctx = RobotContext::default();

    for cmd in commands(b"TN_SPD,100\n") {
        if let Command::Set { key, value } = cmd {
            assert_eq!(key, ParamKey::TnSpeed);
            ctx.params.set(key, value);
        }
    }

    // The maneuver's sustain phase uses exactly the stored value while the
    // kick keeps its own magnitude.
    assert_eq!(TurnKind::Tn.sustain_speed(&ctx.params), 100);
    assert_eq!(ctx.params.kick_speed, 255);
}
