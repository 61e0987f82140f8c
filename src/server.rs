use certverify::server::{ServerApp, ServerConfig};
use clap::Parser;

mod logging;

#[derive(Parser)]
#[command(author, version, about = "Serves shareable verification certificates", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    address: String,
}

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    logging::init_logging();

    let cli = Cli::parse();
    let server = ServerApp::new(ServerConfig {
        listen_address: cli.address,
    });
    server.run().await?;

    Ok(())
}
