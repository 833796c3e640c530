use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::view;

/// 统一的应用错误类型
/// Unified application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("缺少必填字段: {field}")]
    MissingField {
        field: &'static str,
        /// 提示页上"返回"链接指向的页面
        back: &'static str,
    },

    #[error("邮箱已注册")]
    DuplicateEmail,

    #[error("邮箱或口令错误")]
    InvalidCredentials,

    #[error("未登录")]
    Unauthenticated,

    #[error("请求中缺少上传文件: {field}")]
    MissingFile { field: &'static str },

    #[error("数据库错误: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("文件存储错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("上传解析错误: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),

    #[error("口令哈希错误: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("报表生成错误: {0}")]
    Report(String),

    #[error("内部错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. }
            | AppError::DuplicateEmail
            | AppError::InvalidCredentials
            | AppError::MissingFile { .. }
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::SEE_OTHER,
            AppError::Store(_)
            | AppError::Io(_)
            | AppError::PasswordHash(_)
            | AppError::Report(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // 校验类错误返回内联提示页，并附带返回链接
            // Validation errors render an inline message page with a link back
            AppError::MissingField { back, .. } => html(
                StatusCode::BAD_REQUEST,
                view::message_page("All fields are required.", back, "Go back"),
            ),
            AppError::DuplicateEmail => html(
                StatusCode::BAD_REQUEST,
                view::message_page("Email already registered.", "/login", "Login"),
            ),
            AppError::InvalidCredentials => html(
                StatusCode::BAD_REQUEST,
                view::message_page("Invalid credentials.", "/login", "Try again"),
            ),
            AppError::MissingFile { .. } => html(
                StatusCode::BAD_REQUEST,
                view::message_page("No file was uploaded.", "/dashboard", "Back to dashboard"),
            ),
            AppError::Multipart(_) => html(
                StatusCode::BAD_REQUEST,
                view::message_page("Malformed upload request.", "/dashboard", "Back to dashboard"),
            ),
            // 未登录统一重定向到登录页，而不是报错
            AppError::Unauthenticated => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish(),
            other => {
                tracing::error!("请求处理失败: {other}");
                html(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    view::message_page("Something went wrong. Please try again later.", "/", "Back Home"),
                )
            }
        }
    }
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}
