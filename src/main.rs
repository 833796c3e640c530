use clap::{Parser, Subcommand};

use doctor_camp::app_bootstrap::{self, ServerOverrides};

#[derive(Parser)]
#[command(name = "doctor-camp", version, about = "诊所义诊管理服务 / Clinic camp management service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 启动 HTTP 服务器 / Run the HTTP server
    Server {
        /// 监听地址 / Bind host
        #[arg(long)]
        host: Option<String>,
        /// 监听端口 / Bind port
        #[arg(long)]
        port: Option<u16>,
        /// 工作线程数 / Worker count
        #[arg(long)]
        workers: Option<usize>,
    },
    /// 打印版本信息 / Print version information
    Version,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Server { host, port, workers } => {
            app_bootstrap::run(ServerOverrides { host, port, workers }).await
        }
        Command::Version => {
            println!(
                "{} v{} ({}-{})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                std::env::consts::ARCH
            );
            Ok(())
        }
    }
}
