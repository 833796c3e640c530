use std::collections::HashMap;
use std::time::{Duration, Instant};

use bson::oid::ObjectId;
use parking_lot::RwLock;
use uuid::Uuid;

struct Entry {
    doctor_id: ObjectId,
    deadline: Instant,
}

/// 内存会话管理器：不透明 token 映射到已登录医生
/// In-memory session manager: opaque token -> logged-in doctor id
///
/// 进程重启会使全部会话失效；没有显式登出，只靠过期销毁
pub struct SessionManager {
    timeout: Duration,
    entries: RwLock<HashMap<String, Entry>>,
}

impl SessionManager {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// 登录成功后建立会话，返回写入 Cookie 的 token
    pub fn establish(&self, doctor_id: ObjectId) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let now = Instant::now();
        let mut entries = self.entries.write();
        // 顺手清理已过期的会话
        entries.retain(|_, e| e.deadline > now);
        entries.insert(
            token.clone(),
            Entry {
                doctor_id,
                deadline: now + self.timeout,
            },
        );
        token
    }

    /// 解析 token；命中时自动续期，过期条目当场移除
    pub fn resolve(&self, token: &str) -> Option<ObjectId> {
        let now = Instant::now();
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get_mut(token) {
            if entry.deadline > now {
                entry.deadline = now + self.timeout;
                return Some(entry.doctor_id);
            }
        }
        entries.remove(token);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_then_resolve_returns_the_doctor() {
        let sessions = SessionManager::new(Duration::from_secs(60));
        let doctor_id = ObjectId::new();
        let token = sessions.establish(doctor_id);
        assert_eq!(sessions.resolve(&token), Some(doctor_id));
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        let sessions = SessionManager::new(Duration::from_secs(60));
        assert_eq!(sessions.resolve("no-such-token"), None);
    }

    #[test]
    fn expired_session_is_gone() {
        let sessions = SessionManager::new(Duration::from_secs(0));
        let token = sessions.establish(ObjectId::new());
        assert_eq!(sessions.resolve(&token), None);
        // 再查一次仍然是 None，条目已被移除
        assert_eq!(sessions.resolve(&token), None);
    }

    #[test]
    fn sessions_are_independent_per_doctor() {
        let sessions = SessionManager::new(Duration::from_secs(60));
        let a = ObjectId::new();
        let b = ObjectId::new();
        let token_a = sessions.establish(a);
        let token_b = sessions.establish(b);
        assert_eq!(sessions.resolve(&token_a), Some(a));
        assert_eq!(sessions.resolve(&token_b), Some(b));
        assert_ne!(token_a, token_b);
    }
}
