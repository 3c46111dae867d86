#[tokio::main]
async fn main() -> anyhow::Result<()> {
    listing_gen_server::start().await
}
