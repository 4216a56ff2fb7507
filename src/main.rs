use std::env;

use anyhow::Context;
use inventory_service::infrastructure::logger::Logger;
use inventory_service::{build_router, AppState, Config, InventoryService, JsonFileStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 第一个参数为可选的配置文件路径
    let config = match env::args().nth(1) {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("无法加载配置文件 {}", path))?,
        None => Config::default(),
    };
    config.validate()?;

    let _log_guard = Logger::init(&config.logging).context("日志初始化失败")?;

    let persistence = JsonFileStore::new(&config.storage.data_file);
    let inventory = InventoryService::open(persistence).await;
    let total = inventory.count().await;
    let app = build_router(AppState::new(inventory));

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("{}", "=".repeat(50));
    info!("🚀 Inventory Service 运行在端口 {}", addr.port());
    info!("📦 产品总数: {}", total);
    info!("🌐 API 端点: http://{}", addr);
    info!("📁 数据文件: {}", config.storage.data_file.display());
    info!("{}", "=".repeat(50));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听关闭信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号，停止接受新请求");
}
