use serde::{Deserialize, Serialize};

/// The closed instruction set of the target GPU core. Opcode values are
/// fixed by the hardware encoding and are not contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Fma,
    Relu,
    Ld,
    St,
    Const,
    Or,
    Tid,
    Ret,
}

impl Opcode {
    /// 6-bit operation code for the encoded word.
    pub fn code(self) -> u8 {
        match self {
            Opcode::Add => 0b000000,
            Opcode::Sub => 0b000001,
            Opcode::Mul => 0b000010,
            Opcode::Fma => 0b000011,
            Opcode::Relu => 0b000100,
            Opcode::Ld => 0b000101,
            Opcode::St => 0b000110,
            Opcode::Const => 0b000111,
            Opcode::Or => 0b001010,
            Opcode::Tid => 0b001110,
            Opcode::Ret => 0b111111,
        }
    }

    /// Case-sensitive mnemonic lookup. `None` means the instruction is not
    /// part of the supported set and the line should be dropped.
    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        match mnemonic {
            "add" => Some(Opcode::Add),
            "sub" => Some(Opcode::Sub),
            "mul" => Some(Opcode::Mul),
            "fma" => Some(Opcode::Fma),
            "relu" => Some(Opcode::Relu),
            "ld" => Some(Opcode::Ld),
            "st" => Some(Opcode::St),
            "const" => Some(Opcode::Const),
            "or" => Some(Opcode::Or),
            "tid" => Some(Opcode::Tid),
            "ret" => Some(Opcode::Ret),
            _ => None,
        }
    }
}
