//! `ggscope tables` handler.

use std::io::Write;

use ggscope_gguf::{FILE_TYPE_GUESSED, FILE_TYPE_NAMES, GGML_TYPE_NAMES};

use crate::error::CliError;

/// Print both lookup tables as `id  name` rows.
pub fn execute(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "GGML tensor types")?;
    for (id, name) in GGML_TYPE_NAMES {
        writeln!(out, "{id:>6}  {name}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "File types (general.file_type, bit {FILE_TYPE_GUESSED} marks a guessed type)"
    )?;
    for (id, name) in FILE_TYPE_NAMES {
        writeln!(out, "{id:>6}  {name}")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_list_every_entry() {
        let mut out = Vec::new();
        execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("     0  F32\n"));
        assert!(text.contains("    12  Q4_K\n"));
        assert!(text.contains("    15  MOSTLY_Q4_K_M\n"));
        assert_eq!(
            text.lines().count(),
            GGML_TYPE_NAMES.len() + FILE_TYPE_NAMES.len() + 3
        );
    }
}
