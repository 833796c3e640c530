use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::repo::contact_repo;
use crate::view;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(contact);
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

/// 联系表单：先校验、再落库、最后一次性返回确认页
#[actix_web::post("/contact")]
pub async fn contact(
    ctx: web::Data<AppContext>,
    form: web::Form<ContactForm>,
) -> AppResult<HttpResponse> {
    let name = super::require(&form.name, "name", "/contact")?;
    let email = super::require(&form.email, "email", "/contact")?;
    let message = super::require(&form.message, "message", "/contact")?;

    contact_repo::create(&ctx.store, &name, &email, &message).await?;

    Ok(super::html(view::message_page(
        "Thanks for your message!",
        "/",
        "Back Home",
    )))
}
