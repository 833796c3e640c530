use std::time::Duration;

use crate::conf::Settings;
use crate::session::SessionManager;
use crate::store::Store;

/// 应用上下文：进程启动时构造一次，注入到每个处理器
/// 取代全局可变状态，存储句柄与会话管理器都从这里取
pub struct AppContext {
    pub settings: Settings,
    pub store: Store,
    pub sessions: SessionManager,
}

impl AppContext {
    pub fn new(settings: Settings, store: Store) -> Self {
        let sessions = SessionManager::new(Duration::from_secs(settings.session.timeout_seconds));
        Self {
            settings,
            store,
            sessions,
        }
    }
}
