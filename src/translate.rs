use std::io::Write;

use crate::classify::{classify, Line};
use crate::decode::decode;
use crate::emit;
use crate::regmap::RegWindow;

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    /// More than 16 distinct registers in one function window. Fatal: the
    /// run stops here, output already written stays written.
    #[error("one instruction window exceeds 16 registers, problem is on: {reg}")]
    RegisterOverflow { reg: String },
    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Translate a whole input text in one pass, writing encoded lines and
/// boundary banners to `out` in input order.
pub fn translate<W: Write>(text: &str, out: &mut W) -> Result<(), AsmError> {
    let mut regs = RegWindow::new();
    for raw in text.lines() {
        match classify(raw) {
            Line::Entry(decl) => {
                regs.reset();
                emit::banner(out, decl)?;
            }
            Line::Skip => {}
            Line::Inst {
                mnemonic,
                operands,
                text,
            } => {
                if let Some(word) = decode(mnemonic, operands, &mut regs)? {
                    emit::encoded(out, &word.pack(), text)?;
                }
            }
        }
    }
    Ok(())
}

/// Convenience wrapper returning the listing as a `String`.
pub fn translate_to_string(text: &str) -> Result<String, AsmError> {
    let mut buf = Vec::new();
    translate(text, &mut buf)?;
    // output is built from &str writes only
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
