use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::{Context as _, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::conf::Settings;
use crate::context::AppContext;
use crate::store::Store;

/// 命令行对配置的覆盖项，优先级最高
#[derive(Debug, Default)]
pub struct ServerOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
}

/// 初始化全局日志
/// Initialize the global tracing subscriber
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// 启动 HTTP 服务器
pub async fn run(overrides: ServerOverrides) -> Result<()> {
    init_tracing();

    let mut settings = Settings::load().context("加载配置失败 / failed to load configuration")?;
    if let Some(host) = overrides.host {
        settings.server.host = host;
    }
    if let Some(port) = overrides.port {
        settings.server.port = port;
    }
    if let Some(workers) = overrides.workers {
        settings.server.workers = Some(workers);
    }

    info!(
        "starting {} v{} on {}-{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    // 存储不可达时拒绝启动，而不是带病对外服务
    // Refuse to serve if the document store is unreachable at boot
    let store = Store::connect(&settings.database)
        .await
        .context("数据库连接失败 / failed to reach the document store")?;
    info!("document store reachable: db={}", settings.database.name);

    // 启动时保证上传目录存在
    std::fs::create_dir_all(&settings.upload.dir)
        .with_context(|| format!("创建上传目录失败: {}", settings.upload.dir))?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let workers = settings.server.workers;
    let ctx = web::Data::new(AppContext::new(settings, store));

    info!(
        "starting http server: bind={} workers={}",
        addr,
        workers.unwrap_or(0)
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    });
    let server = match workers {
        Some(w) if w > 0 => server.workers(w),
        _ => server,
    };
    server.bind(addr)?.run().await?;
    Ok(())
}
