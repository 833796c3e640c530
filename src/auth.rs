use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use bcrypt::DEFAULT_COST;
use bson::oid::ObjectId;
use futures_util::future::{ready, Ready};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};

/// 口令散列（bcrypt，自带盐）
pub fn hash_password(password: &str) -> AppResult<String> {
    Ok(bcrypt::hash(password, DEFAULT_COST)?)
}

/// 口令校验
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

/// 登录保护提取器：从会话 Cookie 解析当前医生
/// Auth guard extractor, the single place the session gate lives
///
/// 需要登录的路由把它声明为参数即可；未登录统一重定向到 /login
pub struct AuthedDoctor {
    pub doctor_id: ObjectId,
}

impl FromRequest for AuthedDoctor {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_session(req))
    }
}

fn resolve_session(req: &HttpRequest) -> Result<AuthedDoctor, AppError> {
    let ctx = req
        .app_data::<web::Data<AppContext>>()
        .ok_or(AppError::Unauthenticated)?;
    let cookie = req
        .cookie(&ctx.settings.session.cookie_name)
        .ok_or(AppError::Unauthenticated)?;
    let doctor_id = ctx
        .sessions
        .resolve(cookie.value())
        .ok_or(AppError::Unauthenticated)?;
    Ok(AuthedDoctor { doctor_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("pw").expect("hash");
        assert_ne!(hash, "pw"); // 不允许出现明文
        assert!(verify_password("pw", &hash).expect("verify"));
        assert!(!verify_password("wrong", &hash).expect("verify"));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("pw").expect("hash");
        let second = hash_password("pw").expect("hash");
        assert_ne!(first, second);
    }
}
