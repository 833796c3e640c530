use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用配置
/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    pub upload: UploadSettings,
}

/// HTTP 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// 文档库连接配置；连接串必须可从外部注入，不允许写死在代码里
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub uri: String,
    pub name: String,
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub timeout_seconds: u64,
}

/// 上传目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// 落盘目录，进程启动时创建
    pub dir: String,
    /// 返回给页面的公开路径前缀
    pub public_prefix: String,
}

impl Settings {
    /// 加载配置，优先级从低到高：默认值 < config/app.toml < CLINIC_* 环境变量
    /// Load order: defaults < config/app.toml < CLINIC_* environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("database.uri", "mongodb://127.0.0.1:27017")?
            .set_default("database.name", "doctor_camp")?
            .set_default("session.cookie_name", "camp_session")?
            .set_default("session.timeout_seconds", 86400_i64)? // 24小时 / 24 hours
            .set_default("upload.dir", "public/uploads")?
            .set_default("upload.public_prefix", "/uploads")?
            .add_source(File::with_name("config/app").required(false))
            .add_source(Environment::with_prefix("CLINIC").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let settings = Settings::load().expect("defaults should load");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.name, "doctor_camp");
        assert_eq!(settings.session.cookie_name, "camp_session");
        assert_eq!(settings.session.timeout_seconds, 86400);
        assert_eq!(settings.upload.public_prefix, "/uploads");
    }
}
