use std::{error::Error, process::ExitCode, sync::Arc};

use clap::Parser;
use sqlpractice::{
    app::PracticeApp,
    catalog::{numbered_exercises, EXAMPLES},
    config::{CliArgs, Command, Config, LoggingConfig},
    http,
    session::Session,
    storage::SqliteStore,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);
    init_tracing(&config.logging);

    let store = SqliteStore::new(config.store.path.clone());
    let app = PracticeApp::new(Arc::new(store));

    let command = cli.command.clone().unwrap_or(Command::Serve);
    if command.uses_store() {
        app.bootstrap()?;
    }

    match command {
        Command::Serve => serve(&config, app).await?,
        Command::Query { sql } => match app.run(&Session::with_input(sql)) {
            Ok(output) => println!("{}{}", output.result, output.message),
            Err(e) => {
                let label = if e.is_warning() { "warning" } else { "error" };
                eprintln!("{}: {}", label, e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Reset => println!("{}", app.reset()?),
        Command::Schema => {
            for table in app.schema()? {
                println!("{}", table);
            }
        }
        Command::Examples => {
            for example in EXAMPLES {
                println!("-- {}\n{}\n", example.label, example.query);
            }
        }
        Command::Exercises => println!("{}", numbered_exercises()),
    }

    Ok(ExitCode::SUCCESS)
}

async fn serve(config: &Config, app: PracticeApp) -> Result<(), Box<dyn Error>> {
    let addr = config.listen_addr()?;
    let router = http::create_router(app);

    tracing::info!(%addr, db = %config.store.path.display(), "SQL Practice listening");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
