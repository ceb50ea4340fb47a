// pn532-emu/src/card/memory.rs

//! MIFARE Classic 1K memory image: 16 sectors x 4 blocks x 16 bytes.
//!
//! The last block of every sector is the sector trailer:
//! `[Key A (6)] [access bits (4)] [Key B (6)]`. Block 0 is the manufacturer
//! block and starts with the UID.

use crate::constants::{
    MIFARE_1K_SIZE, MIFARE_BLOCK_COUNT, MIFARE_BLOCK_SIZE, MIFARE_BLOCKS_PER_SECTOR,
    MIFARE_DEFAULT_ACCESS_BITS, MIFARE_DEFAULT_KEY, MIFARE_KEY_LEN, MIFARE_SECTOR_COUNT,
};
use crate::types::{BlockData, KeyKind, MifareKey, Uid};
use crate::{Error, Result};

const KEY_A_OFFSET: usize = 0;
const ACCESS_BITS_OFFSET: usize = 6;
const KEY_B_OFFSET: usize = 10;
const MANUFACTURER_UID_LEN: usize = 4;

/// Decoded sector trailer block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTrailer {
    pub key_a: MifareKey,
    pub access_bits: [u8; 4],
    pub key_b: MifareKey,
}

impl Default for SectorTrailer {
    /// Transport configuration: both keys FF.., access bits FF 07 80 69
    fn default() -> Self {
        Self {
            key_a: MifareKey::from_bytes(MIFARE_DEFAULT_KEY),
            access_bits: MIFARE_DEFAULT_ACCESS_BITS,
            key_b: MifareKey::from_bytes(MIFARE_DEFAULT_KEY),
        }
    }
}

impl SectorTrailer {
    pub fn to_block(&self) -> BlockData {
        let mut b = [0u8; MIFARE_BLOCK_SIZE];
        b[KEY_A_OFFSET..KEY_A_OFFSET + MIFARE_KEY_LEN].copy_from_slice(self.key_a.as_bytes());
        b[ACCESS_BITS_OFFSET..KEY_B_OFFSET].copy_from_slice(&self.access_bits);
        b[KEY_B_OFFSET..].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(b)
    }

    pub fn from_block(block: &BlockData) -> Self {
        let b = block.as_bytes();
        let mut key_a = [0u8; MIFARE_KEY_LEN];
        let mut access_bits = [0u8; 4];
        let mut key_b = [0u8; MIFARE_KEY_LEN];
        key_a.copy_from_slice(&b[KEY_A_OFFSET..KEY_A_OFFSET + MIFARE_KEY_LEN]);
        access_bits.copy_from_slice(&b[ACCESS_BITS_OFFSET..KEY_B_OFFSET]);
        key_b.copy_from_slice(&b[KEY_B_OFFSET..]);
        Self {
            key_a: MifareKey::from_bytes(key_a),
            access_bits,
            key_b: MifareKey::from_bytes(key_b),
        }
    }

    pub fn key(&self, kind: KeyKind) -> &MifareKey {
        match kind {
            KeyKind::A => &self.key_a,
            KeyKind::B => &self.key_b,
        }
    }
}

/// Flat 1 KiB card image. All addressing goes through the accessors below,
/// which bounds-check block and sector numbers.
#[derive(Clone, PartialEq, Eq)]
pub struct CardMemory {
    bytes: [u8; MIFARE_1K_SIZE],
}

impl std::fmt::Debug for CardMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardMemory")
            .field("block0", &crate::utils::bytes_to_hex(&self.bytes[..MIFARE_BLOCK_SIZE]))
            .finish_non_exhaustive()
    }
}

impl Default for CardMemory {
    fn default() -> Self {
        Self::blank()
    }
}

impl CardMemory {
    /// All-zero image, no trailers.
    pub fn blank() -> Self {
        Self {
            bytes: [0u8; MIFARE_1K_SIZE],
        }
    }

    /// Factory-fresh image: UID in block 0, default trailer in every sector.
    pub fn formatted(uid: &Uid) -> Self {
        let mut mem = Self::blank();
        // Manufacturer block carries the first four UID bytes only.
        let uid = uid.as_bytes();
        let n = uid.len().min(MANUFACTURER_UID_LEN);
        mem.bytes[..n].copy_from_slice(&uid[..n]);

        let trailer = SectorTrailer::default().to_block();
        for sector in 0..MIFARE_SECTOR_COUNT {
            let offset = sector_trailer_index(sector) * MIFARE_BLOCK_SIZE;
            mem.bytes[offset..offset + MIFARE_BLOCK_SIZE].copy_from_slice(trailer.as_bytes());
        }
        mem
    }

    /// Sector a block belongs to. Not range checked.
    pub fn sector_of(block: u8) -> u8 {
        block / MIFARE_BLOCKS_PER_SECTOR as u8
    }

    /// Byte offset of `block` in the image.
    pub fn block_offset(block: u8) -> Result<usize> {
        if block as usize >= MIFARE_BLOCK_COUNT {
            return Err(Error::BlockOutOfRange(block));
        }
        Ok(block as usize * MIFARE_BLOCK_SIZE)
    }

    /// Block number of the trailer of `sector`.
    pub fn sector_trailer_block(sector: u8) -> Result<u8> {
        if sector as usize >= MIFARE_SECTOR_COUNT {
            return Err(Error::SectorOutOfRange(sector));
        }
        Ok(sector_trailer_index(sector as usize) as u8)
    }

    /// Byte offset of the trailer of `sector` in the image.
    pub fn sector_trailer_offset(sector: u8) -> Result<usize> {
        Self::block_offset(Self::sector_trailer_block(sector)?)
    }

    pub fn read_block(&self, block: u8) -> Result<BlockData> {
        let offset = Self::block_offset(block)?;
        BlockData::try_from(&self.bytes[offset..offset + MIFARE_BLOCK_SIZE])
    }

    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        let offset = Self::block_offset(block)?;
        self.bytes[offset..offset + MIFARE_BLOCK_SIZE].copy_from_slice(data.as_bytes());
        Ok(())
    }

    pub fn sector_trailer(&self, sector: u8) -> Result<SectorTrailer> {
        let block = self.read_block(Self::sector_trailer_block(sector)?)?;
        Ok(SectorTrailer::from_block(&block))
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_1K_SIZE] {
        &self.bytes
    }
}

fn sector_trailer_index(sector: usize) -> usize {
    sector * MIFARE_BLOCKS_PER_SECTOR + (MIFARE_BLOCKS_PER_SECTOR - 1)
}
