//! Scopelight CLI
//!
//! Annotates JavaScript source with scope-depth tokens for depth-based
//! highlighting.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sl_annotate::{Style, Token};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scopelight")]
#[command(about = "Scope-depth annotation for JavaScript", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the source file, or `-` to read stdin
    path: PathBuf,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = if cli.path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        sl_driver::scopify(&source)
    } else {
        sl_driver::scopify_file(&cli.path)
    };

    let tokens = match result {
        Ok(tokens) => tokens,
        Err(error) => {
            // Labeled diagnostic rendering for parse failures
            eprintln!("{:?}", miette::Report::new(error));
            std::process::exit(1);
        }
    };

    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&tokens)?;
            println!("{}", json);
        }
        "text" => {
            println!(
                "{} {:?}",
                "Annotated".green().bold(),
                cli.path
            );
            println!("  {} {} tokens\n", "Found:".bold(), tokens.len());

            print_table(&tokens);
        }
        _ => anyhow::bail!("Unknown format: {}", cli.format),
    }

    Ok(())
}

fn print_table(tokens: &[Token]) {
    println!("{:>8} {:>8} {:>6}  {}", "Start", "End", "Level", "Style");
    println!("{}", "-".repeat(34));

    for token in tokens {
        let style = match token.style {
            Style::Normal => "normal".to_string(),
            Style::Bold => "bold".bold().to_string(),
        };
        println!(
            "{:>8} {:>8} {:>6}  {}",
            token.start, token.end, token.level, style
        );
    }
}
