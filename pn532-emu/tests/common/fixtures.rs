// fixtures.rs: commonly used frames and card data

pub const CARD1_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
pub const CARD2_UID: [u8; 4] = [0xCA, 0xFE, 0xBA, 0xBE];
pub const DEFAULT_KEY: [u8; 6] = [0xFF; 6];

/// GetFirmwareVersion as a host writes it.
pub fn get_firmware_version_frame() -> Vec<u8> {
    hex::decode("0000FF02FED4022A00").unwrap()
}

/// The reply the reference device sends to GetFirmwareVersion.
pub fn firmware_version_response() -> Vec<u8> {
    hex::decode("0000FF06FAD50332010607E800").unwrap()
}

pub fn ack_frame() -> Vec<u8> {
    hex::decode("0000FF00FF00").unwrap()
}

/// SAMConfiguration: normal mode, 1 s timeout, IRQ used.
pub fn sam_params() -> Vec<u8> {
    vec![0x01, 0x14, 0x01]
}

/// InListPassiveTarget for one 106 kbps type A target.
pub fn inlist_params() -> Vec<u8> {
    vec![0x01, 0x00]
}

/// InDataExchange authentication parameters, UID appended like host drivers do.
pub fn auth_params(key_cmd: u8, block: u8, key: [u8; 6], uid: &[u8]) -> Vec<u8> {
    let mut v = vec![0x01, key_cmd, block];
    v.extend_from_slice(&key);
    v.extend_from_slice(uid);
    v
}

pub fn read_params(block: u8) -> Vec<u8> {
    vec![0x01, 0x30, block]
}

pub fn write_params(block: u8, data: [u8; 16]) -> Vec<u8> {
    let mut v = vec![0x01, 0xA0, block];
    v.extend_from_slice(&data);
    v
}
