use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use fatsplit_core::error::Result;
use fatsplit_core::{
    ConflictResolver, OverwritePolicy, SplitOptions, SplitReport, collect_targets, split_batch,
};
use tracing::info;

use super::prompt::{ConsolePrompt, ask_target};
use crate::presentation::cli::Cli;

/// `--overwrite` wins; otherwise ask on a terminal and refuse when piped.
fn resolver_for(overwrite: bool) -> Box<dyn ConflictResolver> {
    if overwrite {
        Box::new(OverwritePolicy::Allow)
    } else if io::stdin().is_terminal() {
        Box::new(ConsolePrompt::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(OverwritePolicy::Deny)
    }
}

/// Split every target named by `cli`, writing the resulting part paths to `out`.
pub fn handle_split<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let targets: Vec<PathBuf> = if cli.targets.is_empty() {
        vec![ask_target(io::stdin().lock(), io::stderr())?]
    } else {
        cli.targets
    };

    let files = collect_targets(&targets, cli.recursive)?;
    if files.is_empty() {
        info!("No NSP files found; nothing to do.");
        return Ok(());
    }

    let opts = SplitOptions {
        chunk_size: cli.chunk_size,
        output_dir: cli.output,
        overwrite: cli.overwrite,
        dry_run: cli.dry_run,
    };
    let mut resolver = resolver_for(opts.overwrite);
    let reports = split_batch(&files, &opts, resolver.as_mut())?;

    print_reports(out, &reports, cli.json)
}

fn print_reports<W: Write>(out: &mut W, reports: &[SplitReport], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }
    for report in reports {
        for part in &report.parts {
            writeln!(out, "{}", part.path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fatsplit_core::SplitError;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn splits_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.nsp"), vec![1u8; 10]).unwrap();
        fs::write(tmp.path().join("readme.txt"), b"ignored").unwrap();
        let out = tmp.path().join("out");

        let args: Vec<OsString> = vec![
            "fatsplit".into(),
            tmp.path().into(),
            "--chunk-size".into(),
            "4".into(),
            "-o".into(),
            out.as_os_str().into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let mut stdout = Vec::new();
        handle_split(cli, &mut stdout).unwrap();

        let printed = String::from_utf8(stdout).unwrap();
        let expected: String = ["a.00.nsp", "a.01.nsp", "a.02.nsp"]
            .iter()
            .map(|n| format!("{}\n", out.join(n).display()))
            .collect();
        assert_eq!(printed, expected);

        let sizes: Vec<u64> = ["a.00.nsp", "a.01.nsp", "a.02.nsp"]
            .iter()
            .map(|n| fs::metadata(out.join(n)).unwrap().len())
            .collect();
        assert_eq!(sizes, [4, 4, 2]);
    }

    #[test]
    fn unsupported_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let iso = tmp.path().join("disc.iso");
        fs::write(&iso, b"x").unwrap();
        let args: Vec<OsString> = vec!["fatsplit".into(), iso.as_os_str().into()];
        let cli = Cli::try_parse_from(args).unwrap();
        let mut stdout = Vec::new();
        assert!(matches!(
            handle_split(cli, &mut stdout),
            Err(SplitError::Unsupported(_))
        ));
        assert!(stdout.is_empty());
    }

    #[test]
    fn prints_part_paths_or_json() {
        let report = SplitReport {
            source: PathBuf::from("/g/a.nsp"),
            file_size: 10,
            chunk_size: 8,
            dry_run: true,
            parts: vec![
                fatsplit_core::PartReport {
                    path: PathBuf::from("/g/a.00.nsp"),
                    size: 8,
                },
                fatsplit_core::PartReport {
                    path: PathBuf::from("/g/a.01.nsp"),
                    size: 2,
                },
            ],
        };

        let mut plain = Vec::new();
        print_reports(&mut plain, std::slice::from_ref(&report), false).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "/g/a.00.nsp\n/g/a.01.nsp\n");

        let mut json = Vec::new();
        print_reports(&mut json, &[report], true).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(v[0]["parts"][1]["size"], 2);
        assert_eq!(v[0]["dry_run"], true);
    }
}
