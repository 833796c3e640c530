use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::auth::AuthedDoctor;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::export;
use crate::repo::patient_repo;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(export_xlsx).service(download_pdf);
}

/// 导出当前医生的病人列表为 xlsx 附件下载
#[actix_web::get("/export")]
pub async fn export_xlsx(
    ctx: web::Data<AppContext>,
    authed: AuthedDoctor,
) -> AppResult<HttpResponse> {
    let patients = patient_repo::list_by_doctor(&ctx.store, authed.doctor_id).await?;
    let rows = export::report_rows(&patients);
    let bytes = export::xlsx::render(&rows)?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=patients.xlsx",
        ))
        .body(bytes))
}

/// 导出当前医生的病人列表为 pdf 附件下载
#[actix_web::get("/download-pdf")]
pub async fn download_pdf(
    ctx: web::Data<AppContext>,
    authed: AuthedDoctor,
) -> AppResult<HttpResponse> {
    let patients = patient_repo::list_by_doctor(&ctx.store, authed.doctor_id).await?;
    let rows = export::report_rows(&patients);
    let bytes = export::pdf::render(&rows)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=patients.pdf",
        ))
        .body(bytes))
}
