use actix_web::{web, HttpResponse};

use crate::auth::AuthedDoctor;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::repo::{doctor_repo, patient_repo};
use crate::view;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}

/// 仪表盘：医生信息卡 + 本人名下的病人表格
#[actix_web::get("/dashboard")]
pub async fn dashboard(
    ctx: web::Data<AppContext>,
    authed: AuthedDoctor,
) -> AppResult<HttpResponse> {
    // 会话指向的账户已不存在时按未登录处理
    let doctor = doctor_repo::find_by_id(&ctx.store, authed.doctor_id)
        .await?
        .ok_or(AppError::Unauthenticated)?;
    let patients = patient_repo::list_by_doctor(&ctx.store, authed.doctor_id).await?;

    let page = view::dashboard_page(&view::DashboardView::new(&doctor, &patients));
    Ok(super::html(page))
}
