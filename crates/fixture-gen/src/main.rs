use clap::Parser;
use std::path::PathBuf;

/// Generate test data for chess move generators.
#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Generate test data for chess move generators")]
struct Args {
    /// Input file containing test definitions
    input: PathBuf,

    /// Output file for tests with computed fixture data
    output: PathBuf,

    /// Minify the output JSON file
    #[arg(short, long)]
    minify: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    fixture_gen::driver::run(&args.input, &args.output, args.minify)?;
    Ok(())
}
