use crate::error::ParseError;
use crate::fields::{axis_of, fields};
use crate::number::{parse_lenient, parse_strict};
use core_types::{Command, CompletedFrame, FrameKind, ProtocolConfig};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Reject frames with a missing axis, missing argument or non-numeric
    /// argument instead of substituting defaults.
    pub strict: bool,
}

/// Converts completed frames into commands.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    protocol: ProtocolConfig,
    config: ParserConfig,
}

impl Parser {
    pub fn new(protocol: ProtocolConfig, config: ParserConfig) -> Self {
        Self { protocol, config }
    }

    pub fn strict() -> Self {
        Self::new(ProtocolConfig::default(), ParserConfig { strict: true })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Lenient parse. Never fails.
    ///
    /// - An empty axis field yields axis `'\0'`.
    /// - An instruction without an argument, or with a non-numeric one, gets
    ///   value `0.0`.
    /// - Query frames never carry a value, whatever follows the axis.
    pub fn parse(&self, frame: &CompletedFrame) -> Command {
        let mut parts = fields(frame.bytes(), self.protocol.separator);
        let axis = parts.next().and_then(axis_of).unwrap_or('\0');

        match frame.kind() {
            FrameKind::Instruction => {
                let value = parts.next().map(parse_lenient).unwrap_or(0.0);
                Command::instruction(axis, value)
            }
            FrameKind::Query | FrameKind::None => Command::query(axis),
        }
    }

    /// Parse honouring [`ParserConfig::strict`].
    ///
    /// With `strict` off this is `Ok(self.parse(frame))`.
    pub fn try_parse(&self, frame: &CompletedFrame) -> Result<Command, ParseError> {
        if !self.config.strict {
            return Ok(self.parse(frame));
        }

        let mut parts = fields(frame.bytes(), self.protocol.separator);
        let axis = parts
            .next()
            .and_then(axis_of)
            .ok_or(ParseError::MissingAxis)?;

        if frame.kind() != FrameKind::Instruction {
            return Ok(Command::query(axis));
        }

        let field = parts.next().ok_or(ParseError::MissingArgument { axis })?;
        match parse_strict(field) {
            Some(value) => Ok(Command::instruction(axis, value)),
            None => {
                let field = String::from_utf8_lossy(field).into_owned();
                debug!("Rejecting argument {:?} for axis '{}'", field, axis);
                Err(ParseError::InvalidNumber { axis, field })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use framing::{CommandFramer, Framer};

    #[test]
    fn test_instruction_from_wire() {
        let mut framer = CommandFramer::new();
        let frames = framer.push(b"!p,90\r");
        let cmd = Parser::default().parse(&frames[0]);
        assert_eq!(cmd.axis, 'p');
        assert_eq!(cmd.value, Some(90.0));
        assert_eq!(cmd.kind, FrameKind::Instruction);
    }

    #[test]
    fn test_query_from_wire() {
        let mut framer = CommandFramer::new();
        let frames = framer.push(b"?t\r");
        let cmd = Parser::default().parse(&frames[0]);
        assert_eq!(cmd, Command::query('t'));
        assert_eq!(cmd.value_or_sentinel(), Command::ABSENT_VALUE);
    }

    #[test]
    fn test_query_ignores_extra_fields() {
        let cmd = Parser::default().parse(&CompletedFrame::query(b"p,123"));
        assert_eq!(cmd.value, None);
    }

    #[test]
    fn test_only_first_axis_char_counts() {
        let cmd = Parser::default().parse(&CompletedFrame::instruction(b"position,12"));
        assert_eq!(cmd.axis, 'p');
        assert_eq!(cmd.value, Some(12.0));
    }

    #[test]
    fn test_missing_argument_is_zero() {
        let cmd = Parser::default().parse(&CompletedFrame::instruction(b"p"));
        assert_eq!(cmd.value, Some(0.0));
    }

    #[test]
    fn test_garbage_argument_is_zero() {
        let cmd = Parser::default().parse(&CompletedFrame::instruction(b"p,abc"));
        assert_eq!(cmd.value, Some(0.0));
    }

    #[test]
    fn test_empty_frame_lenient() {
        let cmd = Parser::default().parse(&CompletedFrame::query(b""));
        assert_eq!(cmd.axis, '\0');
        let cmd = Parser::default().parse(&CompletedFrame::instruction(b",5"));
        assert_eq!(cmd.axis, '\0');
        assert_eq!(cmd.value, Some(5.0));
    }

    #[test]
    fn test_lenient_try_parse_never_fails() {
        let parser = Parser::default();
        for body in [&b""[..], b"p", b"p,x", b",", b"t,1,2"] {
            assert!(parser.try_parse(&CompletedFrame::instruction(body)).is_ok());
        }
    }

    #[test]
    fn test_strict_rejections() {
        let parser = Parser::strict();
        assert_eq!(
            parser.try_parse(&CompletedFrame::instruction(b"")),
            Err(ParseError::MissingAxis)
        );
        assert_eq!(
            parser.try_parse(&CompletedFrame::instruction(b"p")),
            Err(ParseError::MissingArgument { axis: 'p' })
        );
        assert_eq!(
            parser.try_parse(&CompletedFrame::instruction(b"p,9x")),
            Err(ParseError::InvalidNumber {
                axis: 'p',
                field: "9x".into()
            })
        );
    }

    #[test]
    fn test_strict_accepts_valid_frames() {
        let parser = Parser::strict();
        assert_eq!(
            parser.try_parse(&CompletedFrame::instruction(b"p,45")),
            Ok(Command::instruction('p', 45.0))
        );
        assert_eq!(
            parser.try_parse(&CompletedFrame::query(b"t,ignored")),
            Ok(Command::query('t'))
        );
    }

    #[test]
    fn test_custom_separator() {
        let protocol = ProtocolConfig {
            separator: b':',
            ..ProtocolConfig::default()
        };
        let parser = Parser::new(protocol, ParserConfig::default());
        let cmd = parser.parse(&CompletedFrame::instruction(b"p:30"));
        assert_eq!(cmd.value, Some(30.0));
    }

    #[test]
    fn test_parser_config_serialization() {
        let cfg: ParserConfig = serde_json::from_str("{}").unwrap();
        assert!(!cfg.strict);
        let json = serde_json::to_string(&ParserConfig { strict: true }).unwrap();
        assert_eq!(json, r#"{"strict":true}"#);
    }
}
