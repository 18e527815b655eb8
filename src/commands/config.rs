use anyhow::Result;
use owo_colors::OwoColorize;
use proximo_core::config::ProximoConfig;

pub fn run(mut config: ProximoConfig, api_url: Option<String>) -> Result<()> {
    let config_path = ProximoConfig::config_path()?;

    if let Some(url) = api_url {
        url::Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid URL '{url}': {e}"))?;
        config.api_url = url;
        config.save()?;
        println!("{}", format!("Saved api_url = {}", config.api_url).green());
        println!();
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  API URL:    {}", config.api_url);
    println!("  Chat delay: {}", config.chat_reply_delay);
    println!("  Bind:       {}", config.server.bind);
    println!("  Demo data:  {}", config.server.seed_demo);

    Ok(())
}
