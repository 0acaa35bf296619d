use std::fs;

const GAME_MASTER_URL: &str =
    "https://raw.githubusercontent.com/PokeMiners/game_masters/master/latest/latest.json";
const OUTPUT_PATH: &str = "latest.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Downloading game master from {GAME_MASTER_URL} ...");
    let body = reqwest::get(GAME_MASTER_URL).await?.text().await?;
    fs::write(OUTPUT_PATH, &body)?;
    println!("Wrote {} bytes to {OUTPUT_PATH}", body.len());

    Ok(())
}
