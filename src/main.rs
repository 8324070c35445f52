#[tokio::main]
async fn main() -> anyhow::Result<()> {
    crumbly_lib::run().await
}
