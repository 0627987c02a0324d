// src/shared/extractors.rs

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use super::errors::ServiceError;

/// Id inteiro extraído do segmento `{id}` da rota.
///
/// O `web::Path<i32>` do actix responde 404 quando o segmento não é numérico;
/// este extrator responde 400 com o envelope de erro padrão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl IdPath {
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromRequest for IdPath {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let bruto = match req.match_info().get("id") {
            Some(valor) => valor,
            None => {
                return ready(Err(ServiceError::Validation("Missing ID in path".to_string()).into()));
            }
        };

        match bruto.parse::<i32>() {
            Ok(id) => ready(Ok(IdPath(id))),
            Err(_) => ready(Err(
                ServiceError::Validation(format!("Invalid ID: {}", bruto)).into()
            )),
        }
    }
}

/// Configuração do extrator `web::Json`: JSON malformado, content-type
/// errado ou campo obrigatório ausente viram 400 com o envelope de erro.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App, HttpResponse};
    use serde::Deserialize;

    async fn eco(id: IdPath) -> HttpResponse {
        HttpResponse::Ok().body(id.into_inner().to_string())
    }

    #[derive(Deserialize)]
    struct Corpo {
        #[allow(dead_code)]
        valor: i64,
    }

    async fn recebe(_corpo: web::Json<Corpo>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn id_numerico_e_aceito() {
        let app = test::init_service(App::new().route("/x/{id}", web::get().to(eco))).await;
        let req = test::TestRequest::get().uri("/x/42").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"42"));
    }

    #[actix_web::test]
    async fn id_invalido_responde_400() {
        let app = test::init_service(App::new().route("/x/{id}", web::get().to(eco))).await;
        let req = test::TestRequest::get().uri("/x/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid ID: abc");
    }

    #[actix_web::test]
    async fn json_malformado_responde_400_com_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/x", web::post().to(recebe)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/x")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("invalid json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "error");
    }
}
