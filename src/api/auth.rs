use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::{hash_password, verify_password};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::repo::doctor_repo;
use crate::view;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(register_doctor).service(login);
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    email: Option<String>,
    password: Option<String>,
}

/// 医生注册：口令只存散列
#[actix_web::post("/register")]
pub async fn register_doctor(
    ctx: web::Data<AppContext>,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let name = super::require(&form.name, "name", "/register")?;
    let email = super::require(&form.email, "email", "/register")?;
    let password = super::require(&form.password, "password", "/register")?;

    let password_hash = hash_password(&password)?;
    doctor_repo::create(&ctx.store, &name, &email, &password_hash).await?;
    tracing::info!(email = %email, "doctor registered");

    Ok(super::html(view::message_page(
        "Registration successful!",
        "/login",
        "Login",
    )))
}

/// 医生登录：校验口令，建立会话，写 Cookie 后跳转仪表盘
#[actix_web::post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let email = super::require(&form.email, "email", "/login")?;
    let password = super::require(&form.password, "password", "/login")?;

    // 查邮箱再比对散列；找不到账户和口令不符给同一个错误
    let doctor = doctor_repo::find_by_email(&ctx.store, &email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !verify_password(&password, &doctor.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }
    let doctor_id = doctor.id.ok_or(AppError::InvalidCredentials)?;

    let token = ctx.sessions.establish(doctor_id);
    tracing::info!(email = %email, "doctor logged in");

    let cookie = Cookie::build(ctx.settings.session.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/dashboard"))
        .cookie(cookie)
        .finish())
}
