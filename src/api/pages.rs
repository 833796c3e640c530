use actix_web::{web, Responder};

use crate::auth::AuthedDoctor;
use crate::view;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(register_form)
        .service(login_form)
        .service(add_patient_form)
        .service(contact_form);
}

/// 首页
#[actix_web::get("/")]
pub async fn index() -> impl Responder {
    super::html(view::index_page())
}

/// 注册表单页
#[actix_web::get("/register")]
pub async fn register_form() -> impl Responder {
    super::html(view::register_page())
}

/// 登录表单页，同时也是所有未登录请求的落点
#[actix_web::get("/login")]
pub async fn login_form() -> impl Responder {
    super::html(view::login_page())
}

/// 新增病人表单页（需要登录）
#[actix_web::get("/addpatient")]
pub async fn add_patient_form(_doctor: AuthedDoctor) -> impl Responder {
    super::html(view::add_patient_page())
}

/// 联系表单页
#[actix_web::get("/contact")]
pub async fn contact_form() -> impl Responder {
    super::html(view::contact_page())
}
