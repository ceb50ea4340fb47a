// pn532-emu/src/protocol/responses/target.rs

use crate::card::CardType;
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::Uid;
use crate::Result;

/// Target data reported by InListPassiveTarget for a 106 kbps Type A card:
/// Tg, SENS_RES (ATQA), NFCIDLength, NFCID1 (UID), SEL_RES (SAK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub target_number: u8,
    pub atqa: [u8; 2],
    pub uid: Uid,
    pub sak: u8,
}

impl TargetInfo {
    pub fn new(target_number: u8, card_type: CardType, uid: Uid) -> Self {
        Self {
            target_number,
            atqa: card_type.atqa(),
            uid,
            sak: card_type.sak(),
        }
    }

    /// The only target the emulator ever reports: Tg 1, MIFARE Classic 1K.
    pub fn mifare_classic_1k(uid: Uid) -> Self {
        Self::new(1, CardType::MifareClassic1K, uid)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(5 + self.uid.len() as usize);
        v.push(self.target_number);
        v.extend_from_slice(&self.atqa);
        v.push(self.uid.len());
        v.extend_from_slice(self.uid.as_bytes());
        v.push(self.sak);
        v
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = slice_at(data, 0, 4)?;
        let uid_len = header[3] as usize;
        let uid = Uid::try_from(slice_at(data, 4, uid_len)?)?;
        Ok(Self {
            target_number: header[0],
            atqa: [header[1], header[2]],
            uid,
            sak: byte_at(data, 4 + uid_len)?,
        })
    }
}
