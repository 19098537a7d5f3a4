//! ReadBookList server
//!
//! Serves the reading list and provides database maintenance commands.

use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use readbooklist::{
    api,
    config::AppConfig,
    db,
    models::BookForm,
    repository::Repository,
    services::Services,
    AppState,
};

/// Books seeded by `forge`
const SAMPLE_BOOKS: &[(&str, &str)] = &[
    ("Writing an Interpreter in Go", "编译原理"),
    ("Operating Systems: Three easy pieces", "操作系统"),
];

#[derive(Parser, Debug)]
#[command(name = "readbooklist", author, version, about = "Personal reading list web application")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
        /// Override server.port
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Create the database schema
    Initdb {
        /// Delete all existing rows first
        #[arg(long)]
        drop: bool,
    },
    /// Insert the owner user and sample books
    Forge {
        /// Owner name shown in the page header
        #[arg(long, default_value = "Xiangshengjie")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Initdb { drop } => initdb(&config, drop).await,
        Command::Forge { name } => forge(&config, &name).await,
    }
}

/// Install the global subscriber. The guard must live until exit when
/// logging to a file.
fn init_tracing(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into());

    let (file_layer, guard) = match &config.logging.file {
        Some(path) => {
            let path = std::path::Path::new(path);
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(std::path::Path::new("."));
            let file_name = path.file_name().context("logging.file has no file name")?;
            let appender = tracing_appender::rolling::daily(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = if config.logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting ReadBookList v{}", env!("CARGO_PKG_VERSION"));

    let pool = db::init(&config.database).await.context("Failed to open database")?;
    tracing::info!("Connected to database");

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let services = Services::new(Repository::new(pool));
    let app = api::router(AppState::new(config, services));

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn initdb(config: &AppConfig, drop: bool) -> anyhow::Result<()> {
    let pool = db::init(&config.database).await.context("Failed to open database")?;
    let services = Services::new(Repository::new(pool));

    if drop {
        let books = services.books.clear().await?;
        let users = services.users.clear().await?;
        tracing::info!("Dropped {} books and {} users", books, users);
    }

    tracing::info!("Initialized database");
    Ok(())
}

async fn forge(config: &AppConfig, name: &str) -> anyhow::Result<()> {
    let pool = db::init(&config.database).await.context("Failed to open database")?;
    let services = Services::new(Repository::new(pool));

    let user = services.users.forge(name).await?;
    tracing::info!("Owner is now {:?} (id={})", user.name, user.id);

    for (title, category) in SAMPLE_BOOKS {
        services.books.create(BookForm::new(*title, *category)).await?;
    }

    tracing::info!("Forged {} sample books", SAMPLE_BOOKS.len());
    Ok(())
}
