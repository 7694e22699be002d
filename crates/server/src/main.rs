#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prodesc_server::start().await
}
