// pn532-emu/src/types.rs

use crate::Error;
use crate::constants::{MIFARE_BLOCK_SIZE, MIFARE_KEY_LEN};
use derive_more::{Display, From};
use std::convert::TryFrom;
use std::str::FromStr;

/// Card UID - 4 to 7 bytes, stored inline so the type stays `Copy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Uid {
    bytes: [u8; Uid::MAX_LEN],
    len: u8,
}

impl Uid {
    pub const MIN_LEN: usize = 4;
    pub const MAX_LEN: usize = 7;

    /// Single size (4 byte) UID
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            bytes: [bytes[0], bytes[1], bytes[2], bytes[3], 0, 0, 0],
            len: 4,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&bytes.len()) {
            let expected = if bytes.len() < Self::MIN_LEN {
                Self::MIN_LEN
            } else {
                Self::MAX_LEN
            };
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl TryFrom<Vec<u8>> for Uid {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&bytes[..])
    }
}

impl From<Uid> for Vec<u8> {
    fn from(uid: Uid) -> Self {
        uid.as_bytes().to_vec()
    }
}

/// Parses "DE AD BE EF" or "deadbeef"
impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::Hex)?;
        Self::try_from(&bytes[..])
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct BlockData([u8; MIFARE_BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: MIFARE_BLOCK_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct MifareKey([u8; MIFARE_KEY_LEN]);

impl MifareKey {
    pub const DEFAULT: Self = Self(crate::constants::MIFARE_DEFAULT_KEY);

    pub fn from_bytes(bytes: [u8; MIFARE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: MIFARE_KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// GetFirmwareVersion reply: IC, version, revision, supported protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl FirmwareVersion {
    /// PN532 v1.6, ISO 14443 A/B and ISO 18092 supported
    pub const PN532_V1_6: Self = Self {
        ic: 0x32,
        version: 0x01,
        revision: 0x06,
        support: 0x07,
    };

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.ic, self.version, self.revision, self.support]
    }
}

impl Default for FirmwareVersion {
    fn default() -> Self {
        Self::PN532_V1_6
    }
}

/// Which sector trailer key an authentication targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum KeyKind {
    #[display(fmt = "Key A")]
    A,
    #[display(fmt = "Key B")]
    B,
}

/// Electrical level of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Level {
    #[display(fmt = "low")]
    Low,
    #[display(fmt = "high")]
    High,
}
