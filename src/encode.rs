use serde::{Deserialize, Serialize};

/// One encoded instruction word, split into its sub-fields:
/// opcode(6) | rd(4) | rs1(4) | rs2(4) | rs3(4) | func(6) | imm(4).
/// All values are pre-masked to their field widths by the decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub opcode: u8,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub rs3: u8,
    /// Reserved, always 0 in this revision.
    pub func: u8,
    pub imm: u8,
}

impl Word {
    /// Render the word as a fixed 32-character binary string, fields
    /// zero-padded and concatenated in declaration order.
    pub fn pack(&self) -> String {
        format!(
            "{:06b}{:04b}{:04b}{:04b}{:04b}{:06b}{:04b}",
            self.opcode, self.rd, self.rs1, self.rs2, self.rs3, self.func, self.imm
        )
    }
}
