use anyhow::Context;
use clap::{Parser, Subcommand};
use kudos_core::{KudosConfig, Language};
use kudos_expression::{ComplimentBook, ComplimentSelector, Mode};
use kudos_gateway::{AppState, ComplimentResponse, GatewayServer, MediaStore};
use kudos_reasoning::{create_client, StoryAnalyzer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, env = "KUDOS_CONFIG", default_value = "kudos.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyse a story and print the compliment as JSON.
    Analyze {
        story: String,
        /// auto, hype, softCare, bestFriend, deepSoul, ...
        #[arg(short, long, default_value = "auto")]
        mode: String,
        /// english, hindi or hindlish
        #[arg(short, long)]
        language: Option<String>,
        /// Skip the remote model and use the local heuristics only.
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = KudosConfig::load_or_default(&args.config);

    // Templates are validated before anything is bound or called.
    let book = ComplimentBook::load(config.compliments.templates_path.as_deref())
        .context("Failed to load compliment templates")?;
    info!(
        "Loaded {} compliment templates across {} languages",
        book.template_count(),
        book.languages().count()
    );
    let selector = Arc::new(ComplimentSelector::new(
        book,
        config.compliments.force_language,
    ));

    match args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let client = create_client(&config.llm);
            let analyzer = Arc::new(StoryAnalyzer::from_config(client, &config.llm));
            if !analyzer.is_remote() {
                info!("No remote model configured, using heuristic analysis");
            }
            let state = AppState {
                analyzer,
                selector,
                media: Arc::new(MediaStore::new(Duration::from_secs(
                    config.media.retention_secs,
                ))),
            };
            GatewayServer::new(state, &config.server).run().await
        }
        Command::Analyze {
            story,
            mode,
            language,
            offline,
        } => {
            let analyzer = if offline {
                StoryAnalyzer::offline()
            } else {
                StoryAnalyzer::from_config(create_client(&config.llm), &config.llm)
            };
            let requested = language.as_deref().and_then(|l| match l.parse::<Language>() {
                Ok(lang) => Some(lang),
                Err(_) => {
                    tracing::warn!("Unknown language '{}', detecting instead", l);
                    None
                }
            });

            let outcome = analyzer.analyze_story(story.trim()).await;
            let compliment = selector.select(
                &outcome.record,
                Mode::parse(&mode),
                None,
                requested,
                &mut rand::thread_rng(),
            )?;

            let response = ComplimentResponse {
                analysis: outcome.record,
                compliment: compliment.text,
                mode: compliment.category,
                language: compliment.language,
                source: outcome.source,
                media_analysis: None,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
