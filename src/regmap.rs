use std::collections::HashMap;

use crate::translate::AsmError;

/// One instruction window may not hold more than 16 live registers.
pub const MAX_REGS: usize = 16;

/// Per-function register window: maps normalized register names to the
/// 4-bit indices used in the encoded word. Indices are handed out in strict
/// first-appearance order so repeated runs produce identical output.
#[derive(Debug, Default, Clone)]
pub struct RegWindow {
    map: HashMap<String, u8>,
    next: u8,
}

impl RegWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all assignments. Called at every kernel/function boundary;
    /// indices issued before this call are no longer meaningful.
    pub fn reset(&mut self) {
        self.map.clear();
        self.next = 0;
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up (or assign) the index for a register operand. The raw operand
    /// is normalized first: everything but `%`, letters, and digits is
    /// stripped, so `[%r1]` and `%r1` name the same register.
    pub fn index(&mut self, raw: &str) -> Result<u8, AsmError> {
        let clean: String = raw
            .chars()
            .filter(|c| *c == '%' || c.is_ascii_alphanumeric())
            .collect();
        if let Some(&idx) = self.map.get(&clean) {
            return Ok(idx);
        }
        if self.next as usize >= MAX_REGS {
            return Err(AsmError::RegisterOverflow { reg: clean });
        }
        let idx = self.next;
        self.map.insert(clean, idx);
        self.next += 1;
        Ok(idx)
    }
}
