// common/mod.rs - In-process fake of the analysis backend
//
// Each test starts its own Actix server on an ephemeral port that answers
// `POST /app/search` and `POST /app/compute` with canned replies and records
// every request body it receives.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::Value;

use allergy_lens::web_app::api::backend::BackendClient;
use allergy_lens::web_app::api::config::BackendConfig;

/// Canned answer for one endpoint
#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
    Raw(&'static str),
    Slow(Duration, Value),
}

impl Reply {
    async fn respond(&self) -> HttpResponse {
        match self {
            Reply::Json(body) => HttpResponse::Ok().json(body),
            Reply::Status(code, body) => {
                let status = actix_web::http::StatusCode::from_u16(*code)
                    .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
                HttpResponse::build(status).body(*body)
            }
            Reply::Raw(body) => HttpResponse::Ok().content_type("text/html").body(*body),
            Reply::Slow(delay, body) => {
                tokio::time::sleep(*delay).await;
                HttpResponse::Ok().json(body)
            }
        }
    }
}

struct FakeState {
    search: Reply,
    compute: Reply,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeState {
    fn record(&self, endpoint: &str, body: Value) {
        self.requests.lock().unwrap().push((endpoint.to_string(), body));
    }
}

async fn search(state: web::Data<FakeState>, body: web::Json<Value>) -> HttpResponse {
    state.record("search", body.into_inner());
    state.search.respond().await
}

async fn compute(state: web::Data<FakeState>, body: web::Json<Value>) -> HttpResponse {
    state.record("compute", body.into_inner());
    state.compute.respond().await
}

pub struct FakeBackend {
    pub addr: SocketAddr,
    state: web::Data<FakeState>,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Start a fake backend; must be called inside an Actix runtime
    pub async fn start(search_reply: Reply, compute_reply: Reply) -> anyhow::Result<Self> {
        let state = web::Data::new(FakeState {
            search: search_reply,
            compute: compute_reply,
            requests: Mutex::new(Vec::new()),
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/app/search", web::post().to(search))
                .route("/app/compute", web::post().to(compute))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self { addr, state, handle })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/app", self.addr)
    }

    pub fn config(&self) -> BackendConfig {
        BackendConfig::new(self.base_url())
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::new(self.config()).expect("client should build")
    }

    /// Request bodies received so far, as (endpoint, body)
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
