use std::path::Path;

use actix_multipart::Multipart;
use chrono::Utc;
use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// 表单里的文件字段名
pub const FILE_FIELD: &str = "profilePicture";

/// 落盘文件名：毫秒时间戳 + 原始文件名，避免重名覆盖
pub fn stored_filename(original: &str, now_millis: i64) -> String {
    format!("{now_millis}-{original}")
}

/// 保存一次请求中的单个上传文件，返回可作为图片地址的公开相对路径
/// 请求中没有文件时返回 MissingFile，而不是在空引用上崩溃
pub async fn save_file(mut payload: Multipart, dir: &Path, public_prefix: &str) -> AppResult<String> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != FILE_FIELD {
            continue;
        }
        let original = match field.content_disposition().get_filename() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => continue,
        };
        // 只取最后一段路径，上传的文件名不允许带目录
        let safe = Path::new(&original)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_owned();

        let filename = stored_filename(&safe, Utc::now().timestamp_millis());
        let path = dir.join(&filename);
        let mut file = tokio::fs::File::create(&path).await?;
        while let Some(chunk) = field.try_next().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        tracing::debug!(file = %filename, "upload stored");
        return Ok(format!(
            "{}/{}",
            public_prefix.trim_end_matches('/'),
            filename
        ));
    }
    Err(AppError::MissingFile { field: FILE_FIELD })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::http::header;
    use actix_web::{test, web, App, HttpResponse, ResponseError};

    use super::*;

    #[::core::prelude::v1::test]
    fn stored_filename_prefixes_the_timestamp() {
        assert_eq!(stored_filename("me.png", 1700000000123), "1700000000123-me.png");
    }

    fn multipart_body(field: &str, filename: &str, payload: &str, boundary: &str) -> String {
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n{payload}\r\n--{boundary}--\r\n"
        )
    }

    fn temp_upload_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "camp-upload-{}",
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    async fn upload_handler(dir: web::Data<PathBuf>, payload: Multipart) -> HttpResponse {
        match save_file(payload, &dir, "/uploads").await {
            Ok(public) => HttpResponse::Ok().body(public),
            Err(e) => e.error_response(),
        }
    }

    #[actix_web::test]
    async fn save_file_writes_bytes_and_returns_public_path() {
        let dir = temp_upload_dir();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dir.clone()))
                .route("/u", web::post().to(upload_handler)),
        )
        .await;

        let boundary = "XCAMPBOUNDARY";
        let req = test::TestRequest::post()
            .uri("/u")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(FILE_FIELD, "me.png", "fake-bytes", boundary))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let public = std::str::from_utf8(&body).expect("utf8 path");
        assert!(public.starts_with("/uploads/"));
        assert!(public.ends_with("-me.png"));

        let stored = dir.join(public.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(stored).expect("stored file"), b"fake-bytes");
    }

    #[actix_web::test]
    async fn missing_file_is_a_bad_request_not_a_crash() {
        let dir = temp_upload_dir();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dir))
                .route("/u", web::post().to(upload_handler)),
        )
        .await;

        let boundary = "XCAMPBOUNDARY";
        // 字段名不对，等同于请求里没有文件
        let req = test::TestRequest::post()
            .uri("/u")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body("other", "me.png", "fake-bytes", boundary))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
