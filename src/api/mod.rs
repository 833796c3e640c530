use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod export;
pub mod pages;
pub mod patient;
pub mod profile;

/// 注册全部路由
/// Register every route of the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    pages::register(cfg);
    auth::register(cfg);
    dashboard::register(cfg);
    patient::register(cfg);
    profile::register(cfg);
    contact::register(cfg);
    export::register(cfg);
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 必填字段校验：缺失或空白一律按 MissingField 处理
pub(crate) fn require(
    value: &Option<String>,
    field: &'static str,
    back: &'static str,
) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(AppError::MissingField { field, back }),
    }
}
