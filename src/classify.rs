/// What the pipeline should do with one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Kernel/function declaration: reset the register window and banner it.
    Entry(&'a str),
    /// Blank line, comment, directive, or anything outside the grammar.
    Skip,
    /// Candidate instruction, split into its parts for the decoder.
    Inst {
        mnemonic: &'a str,
        operands: &'a str,
        text: &'a str,
    },
}

/// Route one raw input line. Declaration prefixes are checked before the
/// generic leading-dot directive rule, so `.entry` lines are boundaries and
/// not skipped.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.starts_with(".visible .entry")
        || line.starts_with(".entry")
        || line.starts_with(".func")
    {
        return Line::Entry(line);
    }
    if line.is_empty() || line.starts_with("//") || line.starts_with('.') {
        return Line::Skip;
    }
    match split_inst(line) {
        Some((mnemonic, operands)) => Line::Inst {
            mnemonic,
            operands,
            text: line,
        },
        None => Line::Skip,
    }
}

/// Match `<mnemonic>(.qualifier)* <operands>;` against a trimmed line.
///
/// The mnemonic is a maximal run of lowercase letters; dotted qualifiers
/// (lowercase alphanumerics) are consumed and discarded. The operand
/// substring runs up to the last `;` on the line, anything after it is
/// dropped. Returns `None` when the line is not an instruction.
fn split_inst(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_lowercase() {
        i += 1;
    }
    if i == 0 {
        return None;
    }
    let mnemonic = &line[..i];

    while i < bytes.len() && bytes[i] == b'.' {
        let tag = i + 1;
        let mut j = tag;
        while j < bytes.len() && (bytes[j].is_ascii_lowercase() || bytes[j].is_ascii_digit()) {
            j += 1;
        }
        if j == tag {
            return None;
        }
        i = j;
    }

    let rest = &line[i..];
    let operands_start = rest.trim_start();
    if operands_start.len() == rest.len() {
        // no whitespace between mnemonic and operands
        return None;
    }
    let semi = operands_start.rfind(';')?;
    Some((mnemonic, &operands_start[..semi]))
}
