use std::io::{self, Write};

const RULE: &str = "// =========================================";

/// One encoded output line, annotated with the trimmed source text.
pub fn encoded<W: Write>(out: &mut W, word: &str, src: &str) -> io::Result<()> {
    writeln!(out, "{word} // {src}")
}

/// Boundary banner: a blank line, then the declaration boxed between rules.
pub fn banner<W: Write>(out: &mut W, decl: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "// 🚀 {decl}")?;
    writeln!(out, "{RULE}")
}
