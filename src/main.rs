use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sizeconv::format::{GIB, MIB};
use sizeconv::{logging, ParseOptions, SizeField};

#[derive(Parser, Debug)]
#[command(name = "sizeconv")]
#[command(version, about = "Convert between human-readable sizes and byte counts")]
struct Cli {
    /// Increase logging verbosity (use together with RUST_LOG for fine control).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a byte count as a binary-unit string (e.g. "2.50 GiB")
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Prefix the result with + or -
        #[arg(long, default_value_t = false)]
        signed: bool,

        /// Unit the value is already expressed in
        #[arg(long, value_enum, default_value_t = InputUnit::Bytes)]
        from: InputUnit,
    },

    /// Parse a human size (e.g. "1.5 GiB", "10,5 MB", "500") into bytes
    Parse {
        input: String,

        /// Unit table: 2 for powers of 1024, 10 for powers of 1000
        #[arg(long)]
        base: Option<u32>,
    },

    /// Scale a byte count to the largest binary unit it reaches, keeping the sign
    Scale {
        #[arg(allow_negative_numbers = true)]
        bytes: f64,
    },

    /// Apply a new human value to a size field and show the change
    Field {
        /// Current raw value of the field, in bytes
        #[arg(long)]
        raw: u64,

        /// Value the delta is measured against, in bytes
        #[arg(long)]
        baseline: u64,

        /// New human-readable value
        input: String,

        #[arg(long)]
        base: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InputUnit {
    Bytes,
    Mib,
    Gib,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn parse_options(base: Option<u32>) -> ParseOptions {
    ParseOptions { base }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.cmd {
        Command::Format {
            value,
            signed,
            from,
        } => {
            let out = match (from, signed) {
                (InputUnit::Bytes, false) => sizeconv::format(value),
                (InputUnit::Bytes, true) => sizeconv::format_signed(value),
                (InputUnit::Mib, false) => sizeconv::format_from_mib(value),
                (InputUnit::Gib, false) => sizeconv::format_from_gib(value),
                (InputUnit::Mib, true) => sizeconv::format_signed(value * MIB),
                (InputUnit::Gib, true) => sizeconv::format_signed(value * GIB),
            };
            println!("{out}");
            Ok(())
        }

        Command::Parse { input, base } => {
            let bytes = sizeconv::parse(&input, &parse_options(base))
                .with_context(|| format!("Failed to parse size {input:?}"))?;
            println!("{bytes}");
            Ok(())
        }

        Command::Scale { bytes } => {
            println!("{}", sizeconv::scale_binary(bytes));
            Ok(())
        }

        Command::Field {
            raw,
            baseline,
            input,
            base,
        } => {
            let mut field = SizeField::new(raw, baseline);
            tracing::info!(raw, baseline, current = %field.display(), "field loaded");

            let update = field
                .update(&input, &parse_options(base))
                .with_context(|| format!("Failed to update field with {input:?}"))?;

            println!("raw:   {}", update.raw);
            println!("human: {}", field.display());
            println!("delta: {}", update.delta_display);
            Ok(())
        }
    }
}
