use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use ioc_analysis::{
    analyze, decrypt, identify_language, recover_key, select_key_length,
    DEFAULT_PROFILES,
};

/// Command-line arguments for the Vigenère cracker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the directory containing encrypted text files
    #[arg(short, long, help = "Path to the directory of encrypted text files")]
    dir: String,

    /// Path to the output file where the report will be saved
    #[arg(short, long, help = "Path to the output report file")]
    output: String,

    /// Upper bound for the key length search
    #[arg(short, long, default_value_t = 15, help = "Upper bound for the key length search")]
    max_key_len: usize,

    /// Tolerance when comparing a candidate's IoC against the best one
    #[arg(long, default_value_t = 0.001, help = "IoC tolerance for key length selection")]
    delta: f64,

    /// Number of leading characters to decrypt as a sample
    #[arg(short, long, default_value_t = 200, help = "Length of the decrypted sample")]
    sample_len: usize,
}

/// Cracking outcome for one input file, as written to the report.
#[derive(Debug)]
struct CrackReport {
    file: String,
    ioc: f64,
    language: &'static str,
    key: String,
    sample: String,
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = Cli::parse();

    let mut paths: Vec<_> = std::fs::read_dir(&cli.dir)
        .with_context(|| format!("Failed to read directory {}", cli.dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Sorted so batch runs are reproducible regardless of listing order
    paths.sort();

    let mut reports: Vec<CrackReport> = Vec::new();

    for path in &paths {
        println!("{}", path.display());
        match crack_file(path, &cli) {
            Ok(report) => reports.push(report),
            // One file's failure must not abort the rest of the batch
            Err(err) => eprintln!("Skipping {}: {:#}", path.display(), err),
        }
        println!();
    }

    std::fs::write(&cli.output, format_reports(&reports))
        .with_context(|| format!("Failed to write report to {}", cli.output))?;

    println!("Processed {} of {} files. Report saved to: {}", reports.len(), paths.len(), cli.output);
    Ok(())
}

/// Runs the full analysis pipeline for a single encrypted file.
fn crack_file(path: &Path, cli: &Cli) -> anyhow::Result<CrackReport> {
    let content: String = std::fs::read_to_string(path)
        .context("Failed to read input file")?;

    // Normalize before handing the text to the analysis core
    let ciphertext = clean_text(&content);

    let results = analyze(&ciphertext, cli.max_key_len)?;
    let best = select_key_length(&results, cli.delta)?;
    println!("Found key length: {} (IoC {:.4})", best.key_length, best.ioc);

    let language = identify_language(best.ioc, &DEFAULT_PROFILES)?;
    println!("Most likely language: {}", language.name);

    // The original tool assumes 'e' dominates the plaintext regardless of
    // the identified language; the language is still reported
    let key = recover_key(&best.section_tables, 'e')?;
    println!("Recovered key: {}", key);

    let head: String = ciphertext.chars().take(cli.sample_len).collect();
    let sample = decrypt(&head, &key)?;
    println!("Decrypted sample:\n{}", sample);

    Ok(CrackReport {
        file: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ioc: best.ioc,
        language: language.name,
        key,
        sample,
    })
}

/// Cleans text by keeping only alphabetic characters and converting to lowercase
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Formats all per-file outcomes into the report file contents.
fn format_reports(reports: &[CrackReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}", "=".repeat(63));
        let _ = writeln!(out, "file: {}", report.file);
        let _ = writeln!(out, "ioc: {}", report.ioc);
        let _ = writeln!(out, "language: {}", report.language);
        let _ = writeln!(out, "key: {}", report.key);
        let _ = writeln!(out, "decryption sample: {}", report.sample);
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Hello, World! 123"), "helloworld");
        assert_eq!(clean_text("ÄBC def"), "bcdef");
    }

    #[test]
    fn test_report_format() {
        let reports = vec![CrackReport {
            file: "cipher01.txt".to_string(),
            ioc: 1.72,
            language: "English",
            key: "lemon".to_string(),
            sample: "attackatdawn".to_string(),
        }];
        let text = format_reports(&reports);
        assert!(text.starts_with(&"=".repeat(63)));
        assert!(text.contains("file: cipher01.txt"));
        assert!(text.contains("key: lemon"));
        assert!(text.contains("decryption sample: attackatdawn"));
    }
}
