use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::AuthedDoctor;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::repo::patient_repo;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(add_patient);
}

#[derive(Debug, Deserialize)]
pub struct AddPatientForm {
    name: Option<String>,
    age: Option<String>,
    disease: Option<String>,
}

/// 登记病人，归属当前会话医生，完成后回到仪表盘
#[actix_web::post("/add-patient")]
pub async fn add_patient(
    ctx: web::Data<AppContext>,
    authed: AuthedDoctor,
    form: web::Form<AddPatientForm>,
) -> AppResult<HttpResponse> {
    let name = super::require(&form.name, "name", "/addpatient")?;
    let age_raw = super::require(&form.age, "age", "/addpatient")?;
    let disease = super::require(&form.disease, "disease", "/addpatient")?;
    let age: u32 = age_raw.parse().map_err(|_| AppError::MissingField {
        field: "age",
        back: "/addpatient",
    })?;

    patient_repo::create(&ctx.store, &name, age, &disease, authed.doctor_id).await?;
    tracing::info!(patient = %name, "patient registered");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/dashboard"))
        .finish())
}
