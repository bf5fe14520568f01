use crate::encode::Word;
use crate::opcode::Opcode;
use crate::regmap::RegWindow;
use crate::translate::AsmError;

/// Map one classified instruction to an encoded word. `Ok(None)` means the
/// mnemonic is outside the supported set and the line produces no output.
///
/// Compatibility contract: this reproduces the reference translator exactly,
/// including its placeholder encodings — register-to-register `mov`/`cvt`
/// becomes `or` with rs1 == rs2, and `relu`/`or`/`tid`/`ret`/`const` used
/// directly carry no operand fields at all.
pub fn decode(
    mnemonic: &str,
    operands: &str,
    regs: &mut RegWindow,
) -> Result<Option<Word>, AsmError> {
    let mut word = Word::default();

    if mnemonic == "mov" || mnemonic == "cvt" {
        let ops: Vec<&str> = operands.split(',').map(str::trim).collect();
        if ops.len() >= 2 {
            word.rd = regs.index(ops[0])?;
            let src = ops[1];
            if src.contains("%tid") {
                word.opcode = Opcode::Tid.code();
            } else if !src.starts_with('%') && !src.starts_with('[') {
                word.opcode = Opcode::Const.code();
                // non-numeric immediates fall back to 0, masked to 4 bits
                word.imm = src.parse::<i64>().map(|v| (v & 0xF) as u8).unwrap_or(0);
            } else {
                word.opcode = Opcode::Or.code();
                let src_idx = regs.index(src)?;
                word.rs1 = src_idx;
                word.rs2 = src_idx;
            }
        }
        // fewer than two operands still emits the defaulted word
        return Ok(Some(word));
    }

    let Some(op) = Opcode::lookup(mnemonic) else {
        return Ok(None);
    };
    word.opcode = op.code();

    let tokens = reg_tokens(operands);
    match op {
        Opcode::Fma if tokens.len() >= 4 => {
            word.rd = regs.index(tokens[0])?;
            word.rs1 = regs.index(tokens[1])?;
            word.rs2 = regs.index(tokens[2])?;
            word.rs3 = regs.index(tokens[3])?;
        }
        Opcode::Add | Opcode::Sub | Opcode::Mul if tokens.len() >= 3 => {
            word.rd = regs.index(tokens[0])?;
            word.rs1 = regs.index(tokens[1])?;
            word.rs2 = regs.index(tokens[2])?;
        }
        Opcode::Ld if tokens.len() >= 2 => {
            word.rd = regs.index(tokens[0])?;
            word.rs1 = regs.index(tokens[1])?;
        }
        Opcode::St if tokens.len() >= 2 => {
            // store has no result register
            word.rs1 = regs.index(tokens[0])?;
            word.rs2 = regs.index(tokens[1])?;
        }
        _ => {}
    }
    Ok(Some(word))
}

/// All `%`-sigil register tokens in the operand substring, left to right,
/// ignoring comma grouping. A token is `%` followed by one or more ASCII
/// alphanumerics; a bare `%` matches nothing.
fn reg_tokens(operands: &str) -> Vec<&str> {
    let bytes = operands.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let start = i;
            i += 1;
            let body = i;
            while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            if i > body {
                tokens.push(&operands[start..i]);
            }
        } else {
            i += 1;
        }
    }
    tokens
}
