mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use newsdesk_news::{acquire_articles, AcquireOptions, Acquisition};

#[derive(Debug, Parser)]
#[command(name = "newsdesk-cli")]
#[command(about = "Financial news triage: sentiment, impact and action per article")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch articles, analyze them, and print each article plus the dashboard
    Analyze {
        #[command(flatten)]
        run: RunArgs,

        /// Output layout for the article list
        #[arg(long, value_enum, default_value_t = OutputFormat::List)]
        format: OutputFormat,
    },
    /// Print only the sentiment distribution for a fresh batch
    Dashboard {
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
struct RunArgs {
    /// Maximum number of articles to fetch (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    max: Option<u8>,

    /// Use the built-in demo articles instead of calling NewsAPI
    #[arg(long)]
    demo: bool,

    /// NewsAPI search query
    #[arg(long)]
    query: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    List,
    Table,
    Json,
}

impl RunArgs {
    /// Env-var overrides for the flags that were given, applied before the
    /// config is validated.
    fn config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(max) = self.max {
            overrides.push(("NEWSDESK_MAX_ARTICLES", max.to_string()));
        }
        if let Some(query) = &self.query {
            overrides.push(("NEWSDESK_QUERY", query.clone()));
        }
        if self.demo {
            overrides.push(("NEWSDESK_USE_DEMO", "true".to_string()));
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { run, format }) => {
            let config = load_config(&run)?;
            let acquisition = acquire(&config, &run).await;
            run_analyze(&acquisition, format)?;
        }
        Some(Commands::Dashboard { run }) => {
            let config = load_config(&run)?;
            let acquisition = acquire(&config, &run).await;
            let (_, summary) = newsdesk_sentiment::analyze_batch(&acquisition.articles);
            print!("{}", render::render_summary(&summary)?);
        }
        None => println!("newsdesk-cli ready; run `newsdesk-cli analyze --demo` to try it"),
    }

    Ok(())
}

/// Load config with the run's flag overrides and install the stderr
/// tracing subscriber.
fn load_config(run: &RunArgs) -> anyhow::Result<newsdesk_core::AppConfig> {
    let config = newsdesk_core::load_app_config_with_overrides(&run.config_overrides())?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(config)
}

/// Acquisition options for a run. `--demo` also drops the API key so the
/// network is never touched.
fn acquire_options(config: &newsdesk_core::AppConfig, run: &RunArgs) -> AcquireOptions {
    let mut options = AcquireOptions::from_app_config(config);
    if run.demo {
        options.api_key = None;
        options.use_demo = true;
    }
    options
}

async fn acquire(config: &newsdesk_core::AppConfig, run: &RunArgs) -> Acquisition {
    let options = acquire_options(config, run);
    tracing::debug!(
        max_articles = options.max_articles,
        demo = options.use_demo,
        "acquiring articles"
    );
    acquire_articles(&options).await
}

/// Analyze the acquired batch and print it in the requested layout.
///
/// # Errors
///
/// Returns an error if rendering or JSON serialization fails.
fn run_analyze(acquisition: &Acquisition, format: OutputFormat) -> anyhow::Result<()> {
    let (articles, summary) = newsdesk_sentiment::analyze_batch(&acquisition.articles);

    tracing::info!(
        origin = %acquisition.origin,
        count = articles.len(),
        "analysis complete"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", render::render_json(&articles, &summary)?);
        }
        OutputFormat::List => {
            print!("{}", render::render_list(&articles)?);
            println!();
            print!("{}", render::render_summary(&summary)?);
        }
        OutputFormat::Table => {
            print!("{}", render::render_table(&articles)?);
            println!();
            print!("{}", render::render_summary(&summary)?);
        }
    }
    Ok(())
}
