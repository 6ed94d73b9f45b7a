// src/controllers/osc.rs
// OSC Controller: drive the check view remotely

use nannou_osc as osc;
use std::error::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    Toggle {
        duration_ms: Option<u64>,
    },
    Check {
        duration_ms: Option<u64>,
    },
    Plus {
        duration_ms: Option<u64>,
    },
    Click,
    SetColor {
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    },
    SetStrokeWidth {
        width: f32,
    },
    SetAutoToggle {
        enable: bool,
    },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        debug!(port, "listening for OSC");

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!(addr = %message.addr, "ignoring OSC message"),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Map one OSC message to a command. Unknown addresses and argument shapes
/// give `None`.
pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    match message.addr.as_str() {
        "/checkview/toggle" => Some(OscCommand::Toggle {
            duration_ms: optional_duration(&message.args)?,
        }),
        "/checkview/check" => Some(OscCommand::Check {
            duration_ms: optional_duration(&message.args)?,
        }),
        "/checkview/plus" => Some(OscCommand::Plus {
            duration_ms: optional_duration(&message.args)?,
        }),
        "/checkview/click" => message.args.is_empty().then_some(OscCommand::Click),
        "/checkview/color" => {
            if let [osc::Type::Float(r), osc::Type::Float(g), osc::Type::Float(b), osc::Type::Float(a)] =
                &message.args[..]
            {
                Some(OscCommand::SetColor {
                    r: *r,
                    g: *g,
                    b: *b,
                    a: *a,
                })
            } else {
                None
            }
        }
        "/checkview/stroke" => match &message.args[..] {
            [osc::Type::Float(width)] if *width >= 0.0 => {
                Some(OscCommand::SetStrokeWidth { width: *width })
            }
            _ => None,
        },
        "/checkview/autotoggle" => match &message.args[..] {
            [osc::Type::Int(enable)] => Some(OscCommand::SetAutoToggle {
                enable: *enable != 0,
            }),
            _ => None,
        },
        _ => None,
    }
}

// no argument: default duration. One non-negative int: that many ms.
fn optional_duration(args: &[osc::Type]) -> Option<Option<u64>> {
    match args {
        [] => Some(None),
        [osc::Type::Int(ms)] if *ms >= 0 => Some(Some(*ms as u64)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(addr: &str, args: Vec<osc::Type>) -> osc::Message {
        osc::Message {
            addr: addr.to_string(),
            args,
        }
    }

    #[test]
    fn test_toggle_with_and_without_duration() {
        assert_eq!(
            parse_message(&message("/checkview/toggle", vec![])),
            Some(OscCommand::Toggle { duration_ms: None })
        );
        assert_eq!(
            parse_message(&message("/checkview/toggle", vec![osc::Type::Int(750)])),
            Some(OscCommand::Toggle {
                duration_ms: Some(750)
            })
        );
    }

    #[test]
    fn test_check_and_plus() {
        assert_eq!(
            parse_message(&message("/checkview/check", vec![osc::Type::Int(0)])),
            Some(OscCommand::Check {
                duration_ms: Some(0)
            })
        );
        assert_eq!(
            parse_message(&message("/checkview/plus", vec![])),
            Some(OscCommand::Plus { duration_ms: None })
        );
    }

    #[test]
    fn test_style_commands() {
        let color = message(
            "/checkview/color",
            vec![
                osc::Type::Float(1.0),
                osc::Type::Float(0.5),
                osc::Type::Float(0.25),
                osc::Type::Float(1.0),
            ],
        );
        assert_eq!(
            parse_message(&color),
            Some(OscCommand::SetColor {
                r: 1.0,
                g: 0.5,
                b: 0.25,
                a: 1.0
            })
        );
        assert_eq!(
            parse_message(&message("/checkview/stroke", vec![osc::Type::Float(6.0)])),
            Some(OscCommand::SetStrokeWidth { width: 6.0 })
        );
        assert_eq!(
            parse_message(&message("/checkview/autotoggle", vec![osc::Type::Int(0)])),
            Some(OscCommand::SetAutoToggle { enable: false })
        );
    }

    #[test]
    fn test_rejects_bad_messages() {
        assert_eq!(parse_message(&message("/grid/create", vec![])), None);
        assert_eq!(
            parse_message(&message("/checkview/toggle", vec![osc::Type::Int(-5)])),
            None
        );
        assert_eq!(
            parse_message(&message("/checkview/toggle", vec![osc::Type::Float(1.0)])),
            None
        );
        assert_eq!(
            parse_message(&message("/checkview/click", vec![osc::Type::Int(1)])),
            None
        );
        assert_eq!(
            parse_message(&message("/checkview/color", vec![osc::Type::Float(1.0)])),
            None
        );
        assert_eq!(
            parse_message(&message("/checkview/stroke", vec![osc::Type::Float(-1.0)])),
            None
        );
    }
}
