#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use clap::Parser;
    use timetable_viewer::{RecordStore, http_api};
    use tracing_subscriber::EnvFilter;

    /// Serve timetable queries over HTTP.
    #[derive(Parser, Debug)]
    #[command(name = "timetable-viewer-http", version, about, long_about = None)]
    struct Args {
        /// Address to listen on
        #[arg(long, env = "TIMETABLE_HTTP_ADDR", default_value = "0.0.0.0:3000")]
        addr: SocketAddr,

        /// Folder of CSV exports to load at startup
        #[arg(long, env = "TIMETABLE_DATA_DIR")]
        data_dir: Option<PathBuf>,
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut store = RecordStore::new();
    if let Some(dir) = &args.data_dir {
        store.load(dir)?;
    }

    tracing::info!("timetable-viewer HTTP API listening on http://{}", args.addr);
    http_api::serve(args.addr, store).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
