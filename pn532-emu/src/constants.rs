// pn532-emu/src/constants.rs
//! Common protocol constants used across the crate

/// Information frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;

/// Information frame start code: 0x00 0xFF
pub const PN532_START_CODE: [u8; 2] = [0x00, 0xFF];

/// Information frame postamble
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Host->device frame identifier (D4) and device->host frame identifier (D5)
pub const PN532_TFI_HOST_TO_DEVICE: u8 = 0xD4;
pub const PN532_TFI_DEVICE_TO_HOST: u8 = 0xD5;

/// ACK frame sent back as soon as a valid command frame is accepted
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Byte returned on a bus read while nothing is queued for transmission
pub const PN532_READY: u8 = 0x01;

/// Framing overhead around the LEN-counted bytes:
/// preamble + start(2) + LEN + LCS + DCS + postamble
pub const PN532_FRAME_OVERHEAD: usize = 7;

/// Largest command payload (opcode included) the receiver buffers
pub const PN532_MAX_COMMAND_LEN: usize = 64;

/// Default 7-bit I2C address of the controller
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Top-level command codes. The response code is always command + 1.
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

pub const PN532_RESP_GET_FIRMWARE_VERSION: u8 = 0x03;
pub const PN532_RESP_SAM_CONFIGURATION: u8 = 0x15;
pub const PN532_RESP_IN_DATA_EXCHANGE: u8 = 0x41;
pub const PN532_RESP_INLIST_PASSIVE_TARGET: u8 = 0x4B;

/// MIFARE Classic commands carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// Status bytes used inside response payloads
pub const STATUS_OK: u8 = 0x00;
pub const STATUS_ERROR: u8 = 0x01;

/// InListPassiveTarget baud rate indicator for 106 kbps ISO/IEC 14443 Type A
pub const BRTY_106KBPS_TYPE_A: u8 = 0x00;

/// MIFARE Classic 1K geometry
pub const MIFARE_1K_SIZE: usize = 1024;
pub const MIFARE_BLOCK_SIZE: usize = 16;
pub const MIFARE_BLOCKS_PER_SECTOR: usize = 4;
pub const MIFARE_SECTOR_COUNT: usize = 16;
pub const MIFARE_BLOCK_COUNT: usize = MIFARE_SECTOR_COUNT * MIFARE_BLOCKS_PER_SECTOR;
pub const MIFARE_KEY_LEN: usize = 6;

/// Factory transport key and access condition bytes written to every trailer
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF; 6];
pub const MIFARE_DEFAULT_ACCESS_BITS: [u8; 4] = [0xFF, 0x07, 0x80, 0x69];

/// Number of virtual card slots on the emulated antenna
pub const VIRTUAL_CARD_SLOTS: usize = 2;
