use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::fault::fault_report;
use crate::hardware::{Actuator, DualServo, Thermocouple};
use crate::responder::{format_position, format_temperature};
use command::{axis, Parser};
use core_types::{ByteSource, Command, CompletedFrame, FrameKind, Responder};
use framing::{CommandFramer, Framer};
use log::{debug, info, warn};

/// The device's cooperative main loop.
///
/// Each [`poll`](Self::poll) samples the thermocouple, drains whatever bytes
/// the link has buffered and acts on every completed command. Nothing in here
/// blocks; the caller decides how often to poll.
pub struct Controller<S, R, T, A> {
    source: S,
    responder: R,
    thermocouple: T,
    servo: DualServo<A>,
    framer: CommandFramer,
    parser: Parser,
    last_temperature: f32,
}

impl<S, R, T, A> Controller<S, R, T, A>
where
    S: ByteSource,
    R: Responder,
    T: Thermocouple,
    A: Actuator,
{
    /// Assemble a controller. The configuration is validated first, so a
    /// loop that starts never sees colliding framing bytes or an inverted
    /// servo range.
    pub fn new(
        config: &ControllerConfig,
        source: S,
        responder: R,
        thermocouple: T,
        servos: (A, A),
    ) -> Result<Self, ControllerError> {
        config.validate()?;
        let (primary, secondary) = servos;
        Ok(Self {
            source,
            responder,
            thermocouple,
            servo: DualServo::new(primary, secondary, config.servo_min, config.servo_max),
            framer: CommandFramer::with_config(config.protocol),
            parser: Parser::new(config.protocol, config.parser),
            last_temperature: config.initial_temperature,
        })
    }

    /// Bring up the thermocouple. A device without one cannot run, so the
    /// failure is announced on the link before it is returned.
    pub fn begin(&mut self) -> Result<(), ControllerError> {
        if let Err(e) = self.thermocouple.begin() {
            warn!("Thermocouple init failed: {}", e);
            self.responder.respond("Could not initialize thermocouple.")?;
            return Err(ControllerError::ThermocoupleInit(e));
        }
        info!("Controller ready");
        Ok(())
    }

    /// One loop iteration. Returns the commands that were executed.
    pub fn poll(&mut self) -> Result<Vec<Command>, ControllerError> {
        self.sample()?;

        let mut executed = Vec::new();
        for frame in self.receive() {
            if let Some(cmd) = self.interpret(&frame) {
                self.dispatch(&cmd)?;
                executed.push(cmd);
            }
        }
        Ok(executed)
    }

    /// Trigger a conversion and cache the result, or report faults.
    pub fn sample(&mut self) -> Result<(), ControllerError> {
        self.thermocouple.trigger_one_shot();

        if self.thermocouple.data_ready() {
            self.last_temperature = self.thermocouple.read_temperature();
        } else if self.thermocouple.fault_asserted() {
            let faults = self.thermocouple.read_fault();
            for description in faults.descriptions() {
                warn!("Thermocouple fault: {}", description);
                self.responder.respond(&fault_report(description))?;
            }
        }
        Ok(())
    }

    /// Drain the byte source into the framer.
    pub fn receive(&mut self) -> Vec<CompletedFrame> {
        let mut frames = Vec::new();
        while self.source.available() {
            let Some(byte) = self.source.read_byte() else {
                break;
            };
            if let Some(frame) = self.framer.feed(byte) {
                frames.push(frame);
            }
        }
        frames
    }

    fn interpret(&self, frame: &CompletedFrame) -> Option<Command> {
        match self.parser.try_parse(frame) {
            Ok(cmd) => Some(cmd),
            Err(e) => {
                warn!("Dropping frame {:?}: {}", frame.as_text(), e);
                None
            }
        }
    }

    /// Act on one command: answer queries, move the servos for instructions.
    pub fn dispatch(&mut self, cmd: &Command) -> Result<(), ControllerError> {
        match (cmd.kind, cmd.axis) {
            (FrameKind::Query, axis::POSITION) => {
                let pos = self.servo.read();
                self.responder.respond(&format_position(pos))?;
            }
            (FrameKind::Query, axis::TEMPERATURE) => {
                self.responder
                    .respond(&format_temperature(self.last_temperature))?;
            }
            (FrameKind::Instruction, axis::POSITION) => {
                // float to int truncates toward zero
                let target = cmd.value.unwrap_or(0.0) as i32;
                debug!("Moving servos to {}", target);
                self.servo.write(target);
            }
            (kind, other) => debug!("Ignoring {:?} for axis {:?}", kind, other),
        }
        Ok(())
    }

    pub fn last_temperature(&self) -> f32 {
        self.last_temperature
    }

    pub fn servo(&self) -> &DualServo<A> {
        &self.servo
    }

    pub fn servo_mut(&mut self) -> &mut DualServo<A> {
        &mut self.servo
    }

    pub fn framer(&self) -> &CommandFramer {
        &self.framer
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    pub fn thermocouple_mut(&mut self) -> &mut T {
        &mut self.thermocouple
    }
}
