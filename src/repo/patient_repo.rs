use bson::oid::ObjectId;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::error::AppResult;
use crate::model::Patient;
use crate::store::Store;

/// 按登记顺序返回某医生的全部病人；不分页，不另加排序
/// Insertion order, no pagination, no extra sort stage
pub async fn list_by_doctor(store: &Store, doctor_id: ObjectId) -> AppResult<Vec<Patient>> {
    let mut cursor = store
        .patients()
        .find(doc! { "doctor_id": doctor_id }, None)
        .await?;
    let mut patients = Vec::new();
    while let Some(patient) = cursor.try_next().await? {
        patients.push(patient);
    }
    Ok(patients)
}

/// 在当前会话医生名下登记病人
pub async fn create(
    store: &Store,
    name: &str,
    age: u32,
    disease: &str,
    doctor_id: ObjectId,
) -> AppResult<Patient> {
    let mut patient = Patient {
        id: None,
        name: name.to_owned(),
        age,
        disease: disease.to_owned(),
        doctor_id,
        created_at: Utc::now(),
    };
    let inserted = store.patients().insert_one(&patient, None).await?;
    patient.id = inserted.inserted_id.as_object_id();
    Ok(patient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::Settings;
    use crate::store::Store;

    async fn live_store() -> Store {
        let mut cfg = Settings::load().expect("default settings").database;
        cfg.name = format!("doctor_camp_test_{}", uuid::Uuid::new_v4().simple());
        Store::connect(&cfg)
            .await
            .expect("live mongodb for ignored tests")
    }

    // 需要本地 MongoDB，默认跳过：cargo test -- --ignored
    #[actix_web::test]
    #[ignore]
    async fn patients_never_leak_across_doctors() {
        let store = live_store().await;
        let doctor_a = ObjectId::new();
        let doctor_b = ObjectId::new();

        create(&store, "Ann", 30, "Flu", doctor_a).await.expect("create under a");
        create(&store, "Bo", 45, "Cold", doctor_a).await.expect("create under a");
        create(&store, "Cy", 60, "Cough", doctor_b).await.expect("create under b");

        // A 只看到自己的两位病人，且保持登记顺序
        let mine = list_by_doctor(&store, doctor_a).await.expect("list a");
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].name, "Ann");
        assert_eq!(mine[1].name, "Bo");
        assert!(mine.iter().all(|p| p.doctor_id == doctor_a));

        // B 的列表里绝不出现 A 的病人
        let theirs = list_by_doctor(&store, doctor_b).await.expect("list b");
        assert_eq!(theirs.len(), 1);
        assert_eq!(theirs[0].name, "Cy");
    }
}
