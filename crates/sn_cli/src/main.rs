use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sn_analysis::{RakeRanker, RandomPairSelector, VaderScorer};
use sn_pipeline::{NewsPipeline, PipelineConfig};
use sn_scraper::TimesOfIndiaSource;
use sn_speech::{GoogleSynthesizer, GoogleTranslator};
use sn_web::AppState;
use tracing::Level;

#[derive(Parser)]
#[command(name = "sn", about = "News sentiment analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
    /// Analyze a company's news coverage and print the report as JSON
    Analyze {
        /// Company or topic name to search for
        company: String,
        #[arg(long, default_value_t = 10)]
        max_articles: usize,
    },
}

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn build_pipeline() -> NewsPipeline {
    NewsPipeline::new(
        Arc::new(TimesOfIndiaSource::new()),
        Arc::new(VaderScorer::new()),
        Arc::new(RakeRanker::new()),
        Arc::new(GoogleTranslator::new()),
        Arc::new(GoogleSynthesizer::new()),
        Arc::new(RandomPairSelector),
        PipelineConfig::default(),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let pipeline = build_pipeline();

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            let state = AppState {
                pipeline: Arc::new(pipeline),
            };
            sn_web::serve(state, addr).await?;
        }
        Commands::Analyze {
            company,
            max_articles,
        } => match pipeline.analyze(&company, max_articles).await? {
            Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            None => anyhow::bail!("no articles found for '{}'", company),
        },
    }

    Ok(())
}
