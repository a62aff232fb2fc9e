mod feed;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use clap::{Parser, Subcommand};
use namepick_core::{config, script_of, Picker};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "namepick",
    version,
    about = "Pick the best display name for multilingual map features"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "namepick.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one name per feature from JSON lines of `[tag, value]` pairs.
    Resolve {
        /// Requested language code.
        #[arg(short, long)]
        lang: String,
        /// Input file (defaults to stdin).
        #[arg(short, long)]
        input: Option<String>,
        /// Append the tier that chose each value.
        #[arg(long)]
        explain: bool,
    },
    /// Show the script classification of a language code.
    Script {
        /// Language code to classify.
        code: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config);

    let default_level = cfg
        .as_ref()
        .map(|c| c.namepick.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let cfg = cfg?;

    match cli.command {
        Commands::Resolve {
            lang,
            input,
            explain,
        } => {
            if lang.trim().is_empty() {
                anyhow::bail!("no language provided. Usage: namepick resolve --lang <code>");
            }

            let picker = Picker::new(lang, &cfg.picker);
            let reader: Box<dyn BufRead> = match input {
                Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let mut count = 0usize;
            let mut unnamed = 0usize;

            for feature in feed::read_features(reader) {
                let feature = feature?;
                let mut resolver = picker.new_resolver();
                for (tag, value) in feature {
                    resolver.add_value(tag, value);
                }
                match resolver.resolve() {
                    Some(res) if explain => writeln!(out, "{}\t{}", res.value, res.tier)?,
                    Some(res) => writeln!(out, "{}", res.value)?,
                    None => {
                        unnamed += 1;
                        writeln!(out)?;
                    }
                }
                count += 1;
            }
            out.flush()?;

            info!(
                "resolved {count} features for '{}' ({unnamed} without a name)",
                picker.target_language()
            );
        }
        Commands::Script { code } => {
            debug!("classifying '{code}'");
            match script_of(&code) {
                Some(script) => {
                    println!("{code}: {script} ({})", script.tag());
                    println!("siblings: {}", script.siblings().join(", "));
                }
                None => println!("{code}: Latin (default)"),
            }
        }
    }

    Ok(())
}
