/// Number of words in SCRAM main memory.
pub const MEM_SIZE: usize = 16;

/// Highest valid address.
pub const MAX_ADDR: u8 = (MEM_SIZE - 1) as u8;

/// Memory image. Also the binary file format: 16 bytes in address order.
pub type Memory = [u8; MEM_SIZE];

/// Reduce a value to a 4-bit address.
pub fn mask_addr(val: u8) -> u8 {
    val & MAX_ADDR
}
