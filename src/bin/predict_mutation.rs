// Single prediction from the command line
//
// Usage: predict_mutation [--json] <kinase> <gene> <substrate> <position> <new_aa>
// Position is 1-based. Reference tables are read from DATA_DIR (default: data).

use anyhow::{bail, Context, Result};
use kinase_impact_scorer::explanation::JsonFormatter;
use kinase_impact_scorer::{DataPaths, MutationScorer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: predict_mutation [--json] <kinase> <gene> <substrate> <position> <new_aa>";

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinase_impact_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    if args.len() != 5 {
        bail!(USAGE);
    }

    let position: i64 = args[3]
        .parse()
        .with_context(|| format!("position must be an integer, got '{}'", args[3]))?;

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let scorer = MutationScorer::load(&DataPaths::from_dir(&data_dir));

    let prediction = scorer.predict_once(&args[0], &args[1], &args[2], position, &args[4]);

    if json {
        println!("{}", JsonFormatter::format(&prediction)?);
    } else {
        println!("Overall: {}\n", prediction.overall());
        println!("{}", prediction.details());
    }

    Ok(())
}
