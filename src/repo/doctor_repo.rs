use bson::oid::ObjectId;
use chrono::Utc;
use mongodb::bson::doc;

use crate::error::{AppError, AppResult};
use crate::model::Doctor;
use crate::store::Store;

pub async fn find_by_email(store: &Store, email: &str) -> AppResult<Option<Doctor>> {
    Ok(store.doctors().find_one(doc! { "email": email }, None).await?)
}

pub async fn find_by_id(store: &Store, id: ObjectId) -> AppResult<Option<Doctor>> {
    Ok(store.doctors().find_one(doc! { "_id": id }, None).await?)
}

/// 创建医生账户；邮箱已存在时返回 DuplicateEmail
pub async fn create(
    store: &Store,
    name: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<Doctor> {
    if find_by_email(store, email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }
    let mut doctor = Doctor {
        id: None,
        name: name.to_owned(),
        email: email.to_owned(),
        password_hash: password_hash.to_owned(),
        profile_picture: None,
        created_at: Utc::now(),
    };
    let inserted = store.doctors().insert_one(&doctor, None).await?;
    doctor.id = inserted.inserted_id.as_object_id();
    Ok(doctor)
}

/// 只更新头像路径，医生账户没有其它可变字段
pub async fn set_profile_picture(store: &Store, id: ObjectId, path: &str) -> AppResult<()> {
    store
        .doctors()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "profile_picture": path } },
            None,
        )
        .await?;
    Ok(())
}
