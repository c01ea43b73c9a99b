#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    sdump::cli::run().await?;
    Ok(())
}
