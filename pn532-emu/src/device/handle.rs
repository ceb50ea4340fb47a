// pn532-emu/src/device/handle.rs

use std::mem;

use crate::card::{AuthSession, CardStore, VirtualCard};
use crate::config::EmulatorConfig;
use crate::constants::PN532_I2C_ADDRESS;
use crate::device::phase::{Phase, PhaseKind};
use crate::device::processor::CommandProcessor;
use crate::device::triggers::EdgeDetector;
use crate::hal::{BusDevice, Peripherals};
use crate::protocol::{
    CommandOutcome, FrameOutcome, FrameReceiver, InboundFrame, ResponseTransmitter,
};
use crate::types::Level;
use crate::Result;

/// One emulated controller. All parser, transmitter, card and session state
/// lives here, so any number of emulators can coexist in a process.
///
/// The emulator is passive: it reacts to bus events through [`BusDevice`]
/// and to the expiry of the processing delay through
/// [`Emulator::on_delay_elapsed`].
#[derive(Debug)]
pub struct Emulator<P: Peripherals> {
    config: EmulatorConfig,
    receiver: FrameReceiver,
    transmitter: ResponseTransmitter,
    processor: CommandProcessor,
    phase: Phase,
    edges: EdgeDetector,
    peripherals: P,
}

impl<P: Peripherals> Emulator<P> {
    /// Create an emulator with both cards outside the field and the IRQ line
    /// released.
    pub fn new(config: EmulatorConfig, mut peripherals: P) -> Result<Self> {
        config.validate()?;
        let cards = CardStore::new(config.cards.map(|c| VirtualCard::new(c.uid)));
        let processor = CommandProcessor::new(cards, config.firmware);
        peripherals.set_irq(Level::High);
        for card in processor.cards().cards() {
            log::info!("{} UID: {}", card.card_type(), card.uid());
        }
        Ok(Self {
            config,
            receiver: FrameReceiver::new(),
            transmitter: ResponseTransmitter::new(),
            processor,
            phase: Phase::Idle,
            edges: EdgeDetector::new(),
            peripherals,
        })
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn peripherals(&self) -> &P {
        &self.peripherals
    }

    pub fn peripherals_mut(&mut self) -> &mut P {
        &mut self.peripherals
    }

    pub fn into_peripherals(self) -> P {
        self.peripherals
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn card(&self, slot: usize) -> Option<&VirtualCard> {
        self.processor.cards().card(slot)
    }

    /// Mutable access to a card image, e.g. to preload memory or change keys.
    pub fn card_mut(&mut self, slot: usize) -> Option<&mut VirtualCard> {
        self.processor.cards_mut().card_mut(slot)
    }

    pub fn active_card(&self) -> Option<&VirtualCard> {
        self.processor.cards().active_card()
    }

    pub fn cards(&self) -> &CardStore {
        self.processor.cards()
    }

    pub fn auth_session(&self) -> &AuthSession {
        self.processor.session()
    }

    /// Put the card of `slot` in the field, same as a trigger edge.
    pub fn place_card(&mut self, slot: usize) -> Result<bool> {
        self.processor.cards_mut().place(slot)
    }

    /// Remove every card from the field, same as a reset edge.
    pub fn remove_cards(&mut self) {
        self.processor.cards_mut().remove_all();
    }

    /// Called by the owner of the peripherals when the one-shot processing
    /// delay expires.
    pub fn on_delay_elapsed(&mut self) {
        self.peripherals.set_irq(Level::Low);
        match mem::take(&mut self.phase) {
            Phase::AckPending { frame, .. } => {
                self.phase = Phase::AckPending {
                    frame,
                    delay_elapsed: true,
                };
            }
            Phase::ProcessingPending { frame } => self.run(frame),
            other => {
                log::warn!("processing delay expired while {}", other.kind());
                self.phase = other;
            }
        }
    }

    fn sample_triggers(&mut self) {
        let levels = self.peripherals.sample_triggers();
        let edges = self.edges.update(levels);
        if !edges.any() {
            return;
        }
        let cards = self.processor.cards_mut();
        if edges.reset {
            cards.remove_all();
        }
        for slot in 0..cards.cards().len() {
            if edges.card(slot) {
                if let Err(e) = cards.place(slot) {
                    log::warn!("card trigger ignored: {}", e);
                }
            }
        }
    }

    fn accept(&mut self, frame: InboundFrame) {
        log::debug!(
            "accepted frame: command 0x{:02X}, {} payload bytes",
            frame.opcode,
            frame.payload.len()
        );
        #[cfg(feature = "diagnostics")]
        log::trace!(
            "rx {:02X} {}",
            frame.opcode,
            crate::utils::bytes_to_hex_spaced(&frame.payload)
        );

        if let Err(e) = self.transmitter.queue_ack() {
            log::warn!("dropping frame 0x{:02X}: {}", frame.opcode, e);
            return;
        }
        self.peripherals.set_irq(Level::High);
        self.peripherals.schedule_delay(self.config.processing_delay);
        self.phase = Phase::AckPending {
            frame,
            delay_elapsed: false,
        };
    }

    fn run(&mut self, frame: InboundFrame) {
        match self.processor.handle(frame.opcode, &frame.payload) {
            CommandOutcome::Respond(response) => {
                let out = response.into_frame();
                #[cfg(feature = "diagnostics")]
                log::trace!(
                    "tx {:02X} {}",
                    out.opcode,
                    crate::utils::bytes_to_hex_spaced(&out.payload)
                );
                match self.transmitter.queue_response(out) {
                    Ok(()) => self.phase = Phase::ResponsePending,
                    Err(e) => {
                        log::warn!("response dropped: {}", e);
                        self.finish();
                    }
                }
            }
            CommandOutcome::Suppressed => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Idle;
        self.peripherals.set_irq(Level::High);
    }

    /// Phase change after the transmitter finished a sequence.
    fn on_transmit_done(&mut self) {
        match mem::take(&mut self.phase) {
            Phase::AckPending {
                frame,
                delay_elapsed: true,
            } => self.run(frame),
            Phase::AckPending {
                frame,
                delay_elapsed: false,
            } => self.phase = Phase::ProcessingPending { frame },
            Phase::ResponsePending => self.finish(),
            other => self.phase = other,
        }
    }
}

impl<P: Peripherals> BusDevice for Emulator<P> {
    fn connect(&mut self, address: u8, read: bool) -> bool {
        if address != PN532_I2C_ADDRESS {
            log::debug!("addressed as 0x{:02X}, expected 0x{:02X}", address, PN532_I2C_ADDRESS);
        }
        log::trace!("bus {} transaction", if read { "read" } else { "write" });
        true
    }

    fn write(&mut self, byte: u8) -> bool {
        if self.phase.is_busy() {
            log::trace!("byte 0x{:02X} ignored while {}", byte, self.phase.kind());
            return true;
        }
        match self.receiver.feed(byte) {
            FrameOutcome::FrameReady(frame) => self.accept(frame),
            FrameOutcome::FrameRejected | FrameOutcome::Continue => {}
        }
        true
    }

    fn read(&mut self) -> u8 {
        self.sample_triggers();
        let draining = matches!(
            self.phase.kind(),
            PhaseKind::AckPending | PhaseKind::ResponsePending
        );
        let byte = self.transmitter.next_byte();
        if draining && self.transmitter.is_idle() {
            self.on_transmit_done();
        }
        byte
    }
}
