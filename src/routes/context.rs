//! 요청 컨텍스트
//!
//! 라우터 핸들러에 전달되는 요청 래퍼입니다. 경로 파라미터, 쿼리, 헤더, 본문을
//! 읽는 메서드와 JSON/텍스트 응답을 만드는 헬퍼를 제공합니다.

use std::collections::HashMap;

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

pub struct RequestContext {
    request: HttpRequest,
    body: web::Bytes,
}

impl RequestContext {
    pub fn new(request: HttpRequest, body: web::Bytes) -> Self {
        Self { request, body }
    }

    /// `/users/{id}` 같은 경로 패턴의 파라미터
    pub fn param(&self, key: &str) -> Option<&str> {
        self.request.match_info().get(key)
    }

    /// 쿼리 스트링 값 (`?page=2` → `query("page")`)
    pub fn query(&self, key: &str) -> Option<String> {
        web::Query::<HashMap<String, String>>::from_query(self.request.query_string())
            .ok()
            .and_then(|query| query.into_inner().remove(key))
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.request
            .headers()
            .get(key)
            .and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 본문을 UTF-8 문자열로 읽습니다. 잘못된 바이트는 대체 문자로 바뀝니다.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// JSON 본문을 역직렬화합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 본문이 `T`의 JSON 표현이 아닌 경우
    pub fn parse_json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| AppError::ValidationError(format!("Invalid JSON body: {}", e)))
    }

    pub fn method(&self) -> &Method {
        self.request.method()
    }

    pub fn path(&self) -> &str {
        self.request.path()
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn json<T: Serialize>(&self, status: StatusCode, body: &T) -> HttpResponse {
        HttpResponse::build(status).json(body)
    }

    pub fn text(&self, status: StatusCode, body: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(body.into())
    }

    /// 이미 직렬화된 JSON 바이트를 그대로 응답합니다.
    pub fn data(&self, status: StatusCode, data: Vec<u8>) -> HttpResponse {
        HttpResponse::build(status)
            .content_type("application/json")
            .body(data)
    }

    /// 에러를 `AppError`의 HTTP 표현으로 응답합니다.
    pub fn error(&self, error: &AppError) -> HttpResponse {
        error.error_response()
    }
}
