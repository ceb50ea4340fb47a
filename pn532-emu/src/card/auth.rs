// pn532-emu/src/card/auth.rs

//! Sector key check. MIFARE Classic's real three-pass authentication is not
//! modelled; a key is accepted when it equals the stored trailer key.

use crate::card::{CardStore, CardMemory, VirtualCard};
use crate::types::{KeyKind, MifareKey};

/// Compare `key` with Key A or Key B of `sector`'s trailer. Out of range
/// sectors never authenticate.
pub fn verify(card: &VirtualCard, sector: u8, kind: KeyKind, key: &MifareKey) -> bool {
    match card.memory().sector_trailer(sector) {
        Ok(trailer) => trailer.key(kind) == key,
        Err(e) => {
            log::debug!("authentication rejected: {}", e);
            false
        }
    }
}

/// Same as [`verify`] addressed by card slot; unknown slots never authenticate.
pub fn verify_slot(
    store: &CardStore,
    slot: usize,
    sector: u8,
    kind: KeyKind,
    key: &MifareKey,
) -> bool {
    store
        .card(slot)
        .is_some_and(|card| verify(card, sector, kind, key))
}

/// Sector/key recorded by the last authentication command. Reads and writes
/// are allowed only inside `sector`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthSession {
    sector: Option<u8>,
    key_kind: Option<KeyKind>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note an authentication attempt. Called before the key is checked, so a
    /// failed attempt still moves the session to the new sector.
    pub fn record(&mut self, sector: u8, kind: KeyKind) {
        self.sector = Some(sector);
        self.key_kind = Some(kind);
    }

    pub fn sector(&self) -> Option<u8> {
        self.sector
    }

    pub fn key_kind(&self) -> Option<KeyKind> {
        self.key_kind
    }

    /// True when a read/write of `block` passes the sector gate.
    pub fn authorizes_block(&self, block: u8) -> bool {
        self.sector == Some(CardMemory::sector_of(block))
    }
}
