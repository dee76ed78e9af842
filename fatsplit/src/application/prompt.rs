use std::io::{BufRead, Write};
use std::path::PathBuf;

use fatsplit_core::error::{Result, SplitError};
use fatsplit_core::{ConflictResolver, Decision};

/// Ask for a single target path when none was given on the command line.
pub fn ask_target<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf> {
    write!(output, "Enter path to NSP/NSZ/XCI file or directory: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SplitError::NoInput);
    }
    let entered = line.trim();
    if entered.is_empty() {
        return Err(SplitError::NoInput);
    }
    Ok(PathBuf::from(entered))
}

/// Lists conflicting parts and asks `Overwrite? [y/N]`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, existing: &[PathBuf]) -> std::io::Result<bool> {
        writeln!(self.output, "The following parts already exist:")?;
        for path in existing {
            writeln!(self.output, "       {}", path.display())?;
        }
        write!(self.output, "Overwrite? [y/N]: ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> ConflictResolver for ConsolePrompt<R, W> {
    fn resolve(&mut self, existing: &[PathBuf]) -> Decision {
        match self.ask(existing) {
            Ok(true) => Decision::Overwrite,
            // unreadable console counts as "no"
            Ok(false) | Err(_) => Decision::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn target_is_trimmed() {
        let mut out = Vec::new();
        let p = ask_target(Cursor::new("  /games/a.nsp \n"), &mut out).unwrap();
        assert_eq!(p, PathBuf::from("/games/a.nsp"));
        assert!(String::from_utf8(out).unwrap().starts_with("Enter path"));
    }

    #[test]
    fn empty_or_closed_input_is_an_error() {
        assert!(matches!(
            ask_target(Cursor::new("\n"), Vec::new()),
            Err(SplitError::NoInput)
        ));
        assert!(matches!(
            ask_target(Cursor::new(""), Vec::new()),
            Err(SplitError::NoInput)
        ));
    }

    #[test]
    fn overwrite_prompt_answers() {
        let existing = [PathBuf::from("g.00.nsp")];
        for (answer, expected) in [
            ("y\n", Decision::Overwrite),
            ("YES\n", Decision::Overwrite),
            ("n\n", Decision::Cancel),
            ("\n", Decision::Cancel),
            ("", Decision::Cancel),
        ] {
            let mut out = Vec::new();
            let mut prompt = ConsolePrompt::new(Cursor::new(answer), &mut out);
            assert_eq!(prompt.resolve(&existing), expected, "answer {answer:?}");
            drop(prompt);
            let shown = String::from_utf8(out).unwrap();
            assert!(shown.contains("g.00.nsp"));
            assert!(shown.ends_with("Overwrite? [y/N]: "));
        }
    }
}
