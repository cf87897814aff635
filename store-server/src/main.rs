use store_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 并初始化日志
    dotenv::dotenv().ok();
    let config = Config::from_env();
    store_server::init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("🛒 Store Server starting...");

    // 2. 初始化服务器状态 (数据库 + 仓储)
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
