// pn532-emu/src/device/processor.rs

//! Command execution against the virtual card field.
//!
//! Failures are reported in two different ways. A top-level opcode the
//! firmware does not know yields [`CommandOutcome::Suppressed`] and no frame
//! is sent. Everything else (no card, failed key check, sector not
//! authenticated, unknown card command, unsupported baud rate) yields a
//! well-formed response carrying an error status or a zero target count.

use crate::card::{auth, AuthSession, CardMemory, CardStore};
use crate::constants::{
    BRTY_106KBPS_TYPE_A, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_INLIST_PASSIVE_TARGET,
};
use crate::protocol::{Command, CommandOutcome, MifareCommand, Response, Status, TargetInfo};
use crate::types::{BlockData, FirmwareVersion, KeyKind, MifareKey};

/// Target number reported for the single card the field can hold.
const TARGET_NUMBER: u8 = 1;

#[derive(Debug, Clone)]
pub struct CommandProcessor {
    cards: CardStore,
    session: AuthSession,
    firmware: FirmwareVersion,
}

impl CommandProcessor {
    pub fn new(cards: CardStore, firmware: FirmwareVersion) -> Self {
        Self {
            cards,
            session: AuthSession::new(),
            firmware,
        }
    }

    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut CardStore {
        &mut self.cards
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Execute one accepted command. `payload` excludes the opcode.
    pub fn handle(&mut self, opcode: u8, payload: &[u8]) -> CommandOutcome {
        log::debug!("processing command 0x{:02X}", opcode);

        let command = match Command::decode(opcode, payload) {
            Ok(command) => command,
            Err(e) => {
                log::warn!("malformed command 0x{:02X}: {}", opcode, e);
                return Self::malformed(opcode);
            }
        };

        let response = match command {
            Command::GetFirmwareVersion => {
                log::debug!("responded with firmware version {:?}", self.firmware);
                Response::FirmwareVersion(self.firmware)
            }
            Command::SamConfiguration => {
                log::debug!("configured SAM");
                Response::SamConfiguration { status: Status::Ok }
            }
            Command::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => {
                log::trace!("list passive target: max {} brty {}", max_targets, baud_rate);
                Response::InListPassiveTarget {
                    target: self.list_target(baud_rate),
                }
            }
            Command::InDataExchange { target, data } => self.exchange(target, &data),
            Command::Unsupported(code) => {
                log::warn!("unsupported command 0x{:02X}, no response", code);
                return CommandOutcome::Suppressed;
            }
        };
        CommandOutcome::Respond(response)
    }

    /// Reply for a known opcode whose parameters could not be decoded.
    fn malformed(opcode: u8) -> CommandOutcome {
        match opcode {
            PN532_CMD_INLIST_PASSIVE_TARGET => {
                CommandOutcome::Respond(Response::InListPassiveTarget { target: None })
            }
            PN532_CMD_IN_DATA_EXCHANGE => {
                CommandOutcome::Respond(Response::exchange_status(Status::Error))
            }
            _ => CommandOutcome::Suppressed,
        }
    }

    fn list_target(&self, baud_rate: u8) -> Option<TargetInfo> {
        let Some(card) = self.cards.active_card() else {
            log::debug!("no card found in field");
            return None;
        };
        if baud_rate != BRTY_106KBPS_TYPE_A {
            log::warn!("unsupported card type requested (brty {})", baud_rate);
            return None;
        }
        log::debug!("card found, UID: {}", card.uid());
        Some(TargetInfo::new(TARGET_NUMBER, card.card_type(), *card.uid()))
    }

    fn exchange(&mut self, target: u8, data: &[u8]) -> Response {
        if self.cards.active_card().is_none() {
            log::debug!("no card in field for data exchange");
            return Response::exchange_status(Status::Error);
        }
        log::trace!("data exchange with target {}", target);

        match MifareCommand::decode(data) {
            Ok(MifareCommand::Authenticate { kind, block, key }) => {
                Response::exchange_status(self.authenticate(kind, block, key.as_ref()))
            }
            Ok(MifareCommand::Read { block }) => self.read(block),
            Ok(MifareCommand::Write { block, data }) => {
                Response::exchange_status(self.write(block, &data))
            }
            Ok(MifareCommand::Unsupported(code)) => {
                log::warn!("unsupported MIFARE command 0x{:02X}", code);
                Response::exchange_status(Status::Error)
            }
            Err(e) => {
                log::warn!("malformed MIFARE command: {}", e);
                Response::exchange_status(Status::Error)
            }
        }
    }

    fn authenticate(&mut self, kind: KeyKind, block: u8, key: Option<&MifareKey>) -> Status {
        let sector = CardMemory::sector_of(block);
        // The attempt moves the session before the key is compared.
        self.session.record(sector, kind);

        let Some(slot) = self.cards.active_slot() else {
            return Status::Error;
        };
        let Some(key) = key else {
            log::info!("authentication failed for sector {}: truncated key", sector);
            return Status::Error;
        };
        if auth::verify_slot(&self.cards, slot, sector, kind, key) {
            log::info!("authentication successful for sector {} ({})", sector, kind);
            Status::Ok
        } else {
            log::info!("authentication failed for sector {} ({})", sector, kind);
            Status::Error
        }
    }

    fn read(&self, block: u8) -> Response {
        let sector = CardMemory::sector_of(block);
        if !self.session.authorizes_block(block) {
            log::info!("authentication required for sector {}", sector);
            return Response::exchange_status(Status::Error);
        }
        let result = self
            .cards
            .active_card()
            .map(|card| card.memory().read_block(block));
        match result {
            Some(Ok(data)) => {
                log::debug!("read block {} from sector {}", block, sector);
                Response::InDataExchange {
                    status: Status::Ok,
                    data: Some(data),
                }
            }
            Some(Err(e)) => {
                log::warn!("read failed: {}", e);
                Response::exchange_status(Status::Error)
            }
            None => Response::exchange_status(Status::Error),
        }
    }

    fn write(&mut self, block: u8, data: &BlockData) -> Status {
        let sector = CardMemory::sector_of(block);
        if !self.session.authorizes_block(block) {
            log::info!("authentication required for sector {}", sector);
            return Status::Error;
        }
        let Some(card) = self.cards.active_card_mut() else {
            return Status::Error;
        };
        match card.memory_mut().write_block(block, data) {
            Ok(()) => {
                log::debug!("wrote block {} in sector {}", block, sector);
                Status::Ok
            }
            Err(e) => {
                log::warn!("write failed: {}", e);
                Status::Error
            }
        }
    }
}
