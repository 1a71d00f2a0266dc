//! Command line batch driver for stereo WAVE channel transforms.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use wavchan::{Transform, convert};

/// Apply a channel transform to stereo wav files
#[derive(Parser)]
#[command(name = "wavchan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input wav file, repeat the flag once per file
    #[arg(short, long = "input", value_name = "FILE", required = true)]
    input: Vec<PathBuf>,

    /// Output wav file for the matching input, repeat once per input
    #[arg(short, long = "output", value_name = "FILE", required = true)]
    output: Vec<PathBuf>,

    /// Transform to apply to every file: left, right, swap or mix
    #[arg(short, long, value_name = "NAME", default_value = "mix")]
    transform: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let prog = program_name();

    match run(&cli, &prog) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{prog}: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Convert every input/output pair and return how many pairs failed.
///
/// A failed pair is reported on stderr and does not stop the remaining
/// pairs. Configuration errors abort the whole batch before any file is
/// touched.
fn run(cli: &Cli, prog: &str) -> anyhow::Result<usize> {
    let transform = Transform::from_str(&cli.transform)?;

    if cli.input.len() != cli.output.len() {
        anyhow::bail!(
            "got {} input file(s) and {} output file(s), need one output per input",
            cli.input.len(),
            cli.output.len(),
        );
    }

    let mut failed = 0usize;

    for (input, output) in cli.input.iter().zip(&cli.output) {
        if let Err(e) = convert(input, output, transform) {
            eprintln!("{prog}: {}: {e}", input.display());
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{prog}: {failed} of {} file(s) failed", cli.input.len());
    }

    Ok(failed)
}

/// Name this process was invoked as, used to prefix diagnostics
fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cli_parses_single_pair() {
        let cli =
            Cli::try_parse_from(["wavchan", "--input", "a.wav", "--output", "b.wav"]).unwrap();

        assert_eq!(cli.input, [PathBuf::from("a.wav")]);
        assert_eq!(cli.output, [PathBuf::from("b.wav")]);
        assert_eq!(cli.transform, "mix");
    }

    #[test]
    fn test_cli_parses_repeated_pairs() {
        let cli = Cli::try_parse_from([
            "wavchan",
            "-i",
            "a.wav",
            "-i",
            "b.wav",
            "-o",
            "c.wav",
            "-o",
            "d.wav",
            "--transform",
            "swap",
        ])
        .unwrap();

        assert_eq!(cli.input, [PathBuf::from("a.wav"), PathBuf::from("b.wav")]);
        assert_eq!(cli.output, [PathBuf::from("c.wav"), PathBuf::from("d.wav")]);
        assert_eq!(cli.transform, "swap");
    }

    #[test]
    fn test_cli_requires_input_and_output() {
        assert!(Cli::try_parse_from(["wavchan"]).is_err());
        assert!(Cli::try_parse_from(["wavchan", "--input", "a.wav"]).is_err());
        assert!(Cli::try_parse_from(["wavchan", "--output", "b.wav"]).is_err());
    }

    #[test]
    fn test_run_rejects_unknown_transform_before_touching_files() {
        let cli = Cli {
            input: vec![PathBuf::from("missing.wav")],
            output: vec![PathBuf::from("out.wav")],
            transform: "loud".to_string(),
        };

        let err = run(&cli, "wavchan").unwrap_err();

        assert!(err.to_string().contains("unknown transform"));
    }

    #[test]
    fn test_run_rejects_mismatched_file_lists() {
        let cli = Cli {
            input: vec![PathBuf::from("a.wav"), PathBuf::from("b.wav")],
            output: vec![PathBuf::from("c.wav")],
            transform: "mix".to_string(),
        };

        let err = run(&cli, "wavchan").unwrap_err();

        assert!(err.to_string().contains("need one output per input"));
    }

    #[test]
    fn test_run_converts_remaining_pairs_after_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good_in = dir.path().join("good.wav");
        let good_out = dir.path().join("good.out.wav");

        let bytes: [u8; 52] = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x2c, 0x00, 0x00, 0x00, // chunk size
            0x57, 0x41, 0x56, 0x45, // WAVE
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // format tag
            0x02, 0x00, // num channels
            0x80, 0xbb, 0x00, 0x00, // frame rate
            0x00, 0xee, 0x02, 0x00, // byte rate
            0x04, 0x00, // block align
            0x10, 0x00, // bits per sample
            0x64, 0x61, 0x74, 0x61, // data
            0x08, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, 0x02, 0x00, // frame 1 L+R
            0x03, 0x00, 0x04, 0x00, // frame 2 L+R
        ];
        fs::write(&good_in, bytes).unwrap();

        let cli = Cli {
            input: vec![dir.path().join("missing.wav"), good_in],
            output: vec![dir.path().join("missing.out.wav"), good_out.clone()],
            transform: "swap".to_string(),
        };

        let failed = run(&cli, "wavchan").unwrap();

        assert_eq!(failed, 1);
        assert!(good_out.exists());
    }

    #[test]
    fn test_run_reports_success_when_every_pair_converts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        let bytes: [u8; 48] = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x28, 0x00, 0x00, 0x00, // chunk size
            0x57, 0x41, 0x56, 0x45, // WAVE
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // format tag
            0x02, 0x00, // num channels
            0x44, 0xac, 0x00, 0x00, // frame rate
            0x10, 0xb1, 0x02, 0x00, // byte rate
            0x04, 0x00, // block align
            0x10, 0x00, // bits per sample
            0x64, 0x61, 0x74, 0x61, // data
            0x04, 0x00, 0x00, 0x00, // chunk size
            0x00, 0x00, 0xff, 0xff, // frame 1 L+R
        ];
        fs::write(&input, bytes).unwrap();

        let cli = Cli {
            input: vec![input],
            output: vec![output.clone()],
            transform: "mix".to_string(),
        };

        let failed = run(&cli, "wavchan").unwrap();

        assert_eq!(failed, 0);
        assert!(output.exists());
    }
}
