use std::path::Path;

use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::auth::AuthedDoctor;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::repo::doctor_repo;
use crate::upload;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_profile);
}

/// 上传头像并写回医生资料，完成后回到仪表盘
#[actix_web::post("/upload-profile")]
pub async fn upload_profile(
    ctx: web::Data<AppContext>,
    authed: AuthedDoctor,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let dir = Path::new(&ctx.settings.upload.dir);
    let public_path =
        upload::save_file(payload, dir, &ctx.settings.upload.public_prefix).await?;
    doctor_repo::set_profile_picture(&ctx.store, authed.doctor_id, &public_path).await?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/dashboard"))
        .finish())
}
