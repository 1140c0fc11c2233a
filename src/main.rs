use anyhow::Result;
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    psc::cli::run(std::env::args_os(), &mut io::stdout().lock()).await
}
