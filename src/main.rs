use mimalloc::MiMalloc;
use staffdesk::config::Config;
use staffdesk::console::Console;
use staffdesk::router::{self, StaffState};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen = %cfg.listen_socket().as_deref().unwrap_or("<disabled>"),
        loglevel = %cfg.loglevel
    );

    let storage = match staffdesk::db::connect(&cfg.database_url).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(database_url = %cfg.database_url, error = %e, "failed to connect to the database");
            return Err(e.into());
        }
    };
    if cfg.init_schema {
        storage.init_schema().await?;
    }

    if let Some(addr) = cfg.listen_socket() {
        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                let state = StaffState::new(storage.clone());
                tokio::spawn(async move {
                    if let Err(e) = router::serve(listener, state).await {
                        error!(error = %e, "HTTP server stopped");
                    }
                });
            }
            Err(e) => {
                warn!(addr = %addr, error = %e, "failed to bind HTTP listener; continuing without it");
            }
        }
    }

    let mut console = Console::stdio()?;
    tokio::select! {
        res = staffdesk::menu::run(&storage, &mut console) => {
            storage.close().await;
            res?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; leaving menu");
            storage.close().await;
            // the line editor thread may still be parked in a read
            std::process::exit(0);
        }
    }
    Ok(())
}
