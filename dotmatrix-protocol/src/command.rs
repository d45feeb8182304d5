//! Controller opcodes

/// Number of display memory addresses (one per hardware column)
pub const ADDRESS_COUNT: usize = 16;

/// Highest valid display memory address
pub const MAX_ADDRESS: u8 = (ADDRESS_COUNT - 1) as u8;

/// Controller opcodes
pub mod opcode {
    /// Data command: write to display memory, address auto-increments
    pub const AUTO_INCREMENT: u8 = 0b0100_0000;
    /// Address command base; low nibble selects the start address
    pub const ADDRESS_BASE: u8 = 0b1100_0000;
    /// Display control: display on, default brightness
    pub const DISPLAY_ON: u8 = 0b1000_1000;
}

/// Build the address command for a start address
///
/// Only the low nibble of `address` fits in the opcode; callers validate
/// the range first.
pub const fn address_command(address: u8) -> u8 {
    opcode::ADDRESS_BASE | (address & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(opcode::AUTO_INCREMENT, 0x40);
        assert_eq!(opcode::ADDRESS_BASE, 0xC0);
        assert_eq!(opcode::DISPLAY_ON, 0x88);
    }

    #[test]
    fn test_address_command() {
        assert_eq!(address_command(0), 0xC0);
        assert_eq!(address_command(MAX_ADDRESS), 0xCF);
    }
}
