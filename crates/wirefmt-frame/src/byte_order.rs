//! Byte-order transform for the 4-byte length header.

/// Reverse the four bytes of a 32-bit length.
///
/// Written as masks and shifts so the result does not depend on host
/// endianness. The transform is its own inverse.
pub const fn transform_length(length: u32) -> u32 {
    ((length & 0x0000_00ff) << 24)
        | ((length & 0x0000_ff00) << 8)
        | ((length & 0x00ff_0000) >> 8)
        | ((length & 0xff00_0000) >> 24)
}

/// Decode a wire header into the payload length it declares.
pub fn read_length(header: [u8; 4]) -> u32 {
    transform_length(u32::from_le_bytes(header))
}

/// Encode a payload length as a wire header.
pub fn write_length(length: u32) -> [u8; 4] {
    transform_length(length).to_le_bytes()
}
