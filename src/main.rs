use caregiver_support::config::ServerConfig;

#[tokio::main]
async fn main() {
    caregiver_support::init_tracing();

    if let Err(e) = caregiver_support::run(ServerConfig::from_env()).await {
        tracing::error!("Caregiver support server failed: {e}");
        std::process::exit(1);
    }
}
