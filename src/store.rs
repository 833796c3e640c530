use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::conf::DatabaseSettings;
use crate::model::{ContactMessage, Doctor, Patient};

/// 文档库网关：三个集合背后的唯一入口
/// Document store gateway, the single entry point for all three collections
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// 连接并 ping 一次；存储不可达时返回错误，由启动流程拒绝对外服务
    pub async fn connect(cfg: &DatabaseSettings) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(&cfg.uri).await?;
        let db = client.database(&cfg.name);
        db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(Self { db })
    }

    /// 不做连通性检查的构造，路由层测试使用
    pub async fn connect_lazy(cfg: &DatabaseSettings) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(&cfg.uri).await?;
        Ok(Self {
            db: client.database(&cfg.name),
        })
    }

    pub(crate) fn doctors(&self) -> Collection<Doctor> {
        self.db.collection("doctors")
    }

    pub(crate) fn patients(&self) -> Collection<Patient> {
        self.db.collection("patients")
    }

    pub(crate) fn contact_messages(&self) -> Collection<ContactMessage> {
        self.db.collection("contact_messages")
    }
}
