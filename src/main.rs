use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use color_eyre::Result;

use procdash::api;
use procdash::state::AppState;

#[derive(Parser)]
#[command(
    name = "procdash",
    about = "Browser task manager: live host metrics with process termination"
)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(short = 'a', long, env = "PROCDASH_ADDRESS", default_value = "127.0.0.1")]
    address: String,

    /// Port to listen on
    #[arg(short, long, env = "PROCDASH_PORT", default_value_t = 7000)]
    port: u16,
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let bind = format!("{}:{}", cli.address, cli.port);

    // One collector for the whole server; handlers serialize on its mutex.
    let state = web::Data::new(AppState::new());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind(&bind)?;

    log::info!("listening on http://{bind}");
    server.run().await?;

    Ok(())
}
