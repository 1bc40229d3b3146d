#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use beneficios_api::config::AppConfig;
use beneficios_api::database::{BeneficioStore, MemoryBeneficioStore};
use beneficios_api::{router, AppState};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a body and return the assigned id
    pub async fn create(&self, body: &Value) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/beneficios"))
            .json(body)
            .send()
            .await?;
        anyhow::ensure!(res.status() == 201, "create failed with {}", res.status());
        let result = res.json::<Value>().await?;
        result["insertedId"]
            .as_str()
            .map(str::to_string)
            .context("insertedId missing from insert result")
    }
}

/// Start the router in-process on a free port, backed by a fresh in-memory store
pub async fn spawn_server() -> Result<TestServer> {
    spawn_with_store(Arc::new(MemoryBeneficioStore::new())).await
}

pub async fn spawn_with_store(store: Arc<dyn BeneficioStore>) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let mut config = AppConfig::development();
    config.server.public_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string();
    config.api.enable_request_logging = false;

    let app = router(AppState::new(store), &config);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestServer {
        port,
        base_url,
        client: reqwest::Client::new(),
    })
}

pub fn beneficio(nome: &str) -> Value {
    json!({
        "nome": nome,
        "endereco": {
            "logradouro": "Rua da Aurora, 250",
            "bairro": "Boa Vista",
            "cidade": "Recife"
        },
        "pontos": 10,
        "data": "2024-03-15",
        "quantidade": 2
    })
}
