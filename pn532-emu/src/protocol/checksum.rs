// pn532-emu/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) of an information frame.
/// LCS = 0x100 - LEN (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) over TFI + data bytes.
/// DCS = 0x100 - (sum(bytes) & 0xff)
pub fn dcs(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(bytes))
}

/// Running modulo-256 sum, the accumulator the byte-wise receiver keeps.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// `(LEN + LCS) mod 256 == 0`
pub fn lcs_matches(len: u8, lcs: u8) -> bool {
    len.wrapping_add(lcs) == 0
}

/// `(sum + DCS) mod 256 == 0`
pub fn dcs_matches(sum: u8, dcs: u8) -> bool {
    sum.wrapping_add(dcs) == 0
}
