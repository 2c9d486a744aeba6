use anyhow::Context;
use clap::Parser;
use growmarkt::application::run_pipeline::{NoopObserver, RunObserver, RunRequest, RunSettings};
use growmarkt::cli::commands::{Cli, Commands};
use growmarkt::cli::printer::{credential_error, TerminalObserver};
use growmarkt::domain::error::DomainError;
use growmarkt::domain::values::credentials::Credentials;
use growmarkt::domain::values::language::Language;
use growmarkt::domain::values::market_query::MarketQuery;
use growmarkt::Growmarkt;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env()
            .add_directive("growmarkt=info".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    let cli = Cli::parse();
    let settings: RunSettings = cli.settings.into();
    let app = Growmarkt::new(settings);

    match cli.command {
        Commands::Serve { bind } => serve(app, &bind).await,
        Commands::Run {
            product,
            hs_code,
            country_code,
            country_name,
            lang,
            json,
            gemini_key,
            comtrade_key,
            google_key,
            google_cx,
            hunter_key,
        } => {
            let language: Language = lang.parse().map_err(DomainError::InvalidInput)?;
            let request = RunRequest {
                language,
                query: MarketQuery::new(product, hs_code, country_code, country_name),
                credentials: Credentials {
                    gemini_key,
                    comtrade_key,
                    google_key,
                    google_cx,
                    hunter_key,
                },
            };
            run_once(&app, &request, json).await
        }
    }
}

async fn serve(app: Growmarkt, bind: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = bind.parse().with_context(|| format!("Invalid bind address: {bind}"))?;
    let settings = app.settings().clone();
    let router = growmarkt::web::router(Arc::new(app));

    info!(%addr, period = %settings.period, model = %settings.model, "🌍 Growmarkt listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn run_once(app: &Growmarkt, request: &RunRequest, json: bool) -> anyhow::Result<()> {
    let texts = request.language.texts();
    let printer = TerminalObserver::new(texts);
    let observer: &dyn RunObserver = if json { &NoopObserver } else { &printer };

    if !json {
        println!("{}", texts.title);
    }

    match app.run_observed(request, observer).await {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Err(DomainError::MissingCredentials(fields)) => {
            anyhow::bail!(credential_error(texts, &fields))
        }
        Err(e) => Err(e.into()),
    }
}
