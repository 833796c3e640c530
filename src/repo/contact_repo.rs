use chrono::Utc;

use crate::error::AppResult;
use crate::model::ContactMessage;
use crate::store::Store;

/// 保存联系消息；当前没有任何读路径
pub async fn create(store: &Store, name: &str, email: &str, message: &str) -> AppResult<()> {
    let record = ContactMessage {
        id: None,
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
        created_at: Utc::now(),
    };
    store.contact_messages().insert_one(&record, None).await?;
    Ok(())
}
