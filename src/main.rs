use kriegspiel_agent::game::GameRecord;
use kriegspiel_agent::network::NetworkClient;
use kriegspiel_agent::player::{AgentConfig, KriegspielAgent};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AgentConfig::load_or_default();
    // 引数があればサーバーアドレスを上書き
    let addr = env::args()
        .nth(1)
        .unwrap_or_else(|| config.server_addr.clone());

    if let Err(e) = run(&config, &addr).await {
        log::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(config: &AgentConfig, addr: &str) -> anyhow::Result<()> {
    log::info!("Connecting to referee at {}...", addr);
    let mut client = NetworkClient::connect(addr).await?;
    log::info!("Connected!");

    let mut agent = KriegspielAgent::from_config(config);
    let mut record = GameRecord::new(&config.name);

    let result = client.run(&mut agent, Some(&mut record)).await;

    // 途中で落ちても棋譜は残す
    if config.save_kifu {
        record.save_or_log(&config.kifu_dir);
    }

    result.map(|_| ())
}
