// pn532-emu/src/card/mod.rs

//! Virtual contactless cards held by the emulated antenna field.

use crate::types::Uid;
use derive_more::Display;

pub mod auth;
pub mod memory;
mod store;

pub use auth::AuthSession;
pub use memory::{CardMemory, SectorTrailer};
pub use store::CardStore;

/// Card technologies the emulator can present. Only MIFARE Classic 1K is
/// modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CardType {
    #[default]
    #[display(fmt = "MIFARE Classic 1K")]
    MifareClassic1K,
}

impl CardType {
    /// SENS_RES reported during anticollision
    pub fn atqa(&self) -> [u8; 2] {
        match self {
            Self::MifareClassic1K => [0x00, 0x04],
        }
    }

    /// SEL_RES reported after selection
    pub fn sak(&self) -> u8 {
        match self {
            Self::MifareClassic1K => 0x08,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CardPresence {
    #[default]
    #[display(fmt = "absent")]
    Absent,
    #[display(fmt = "present")]
    Present,
}

/// One simulated card: identity, memory image and whether it currently sits
/// in the RF field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualCard {
    uid: Uid,
    card_type: CardType,
    presence: CardPresence,
    memory: CardMemory,
}

impl VirtualCard {
    /// A factory-formatted MIFARE Classic 1K card, outside the field.
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            card_type: CardType::MifareClassic1K,
            presence: CardPresence::Absent,
            memory: CardMemory::formatted(&uid),
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn presence(&self) -> CardPresence {
        self.presence
    }

    pub fn is_present(&self) -> bool {
        self.presence == CardPresence::Present
    }

    pub fn memory(&self) -> &CardMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut CardMemory {
        &mut self.memory
    }

    pub(crate) fn set_presence(&mut self, presence: CardPresence) {
        self.presence = presence;
    }
}
