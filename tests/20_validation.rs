mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn params(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["param"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn create_reports_every_violation_at_once() -> Result<()> {
    let server = common::spawn_server().await?;

    let body = json!({
        "nome": "abc",
        "endereco": { "logradouro": "", "bairro": "Centro" },
        "pontos": "muitos",
        "data": "15/03/2024",
        "quantidade": 3
    });
    let res = server.client.post(server.url("/api/beneficios")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let errors = res.json::<Value>().await?;
    assert_eq!(
        params(&errors),
        ["nome", "endereco.logradouro", "endereco.cidade", "pontos", "data"]
    );
    assert_eq!(errors["errors"][0]["value"], "abc");
    assert_eq!(errors["errors"][3]["value"], "muitos");
    for error in errors["errors"].as_array().unwrap() {
        assert!(error["msg"].as_str().is_some_and(|m| !m.is_empty()));
    }

    // Nothing was stored
    let all = server.client.get(server.url("/api/beneficios")).send().await?.json::<Value>().await?;
    assert_eq!(all, json!([]));

    Ok(())
}

#[tokio::test]
async fn create_accepts_lexically_valid_dates() -> Result<()> {
    let server = common::spawn_server().await?;

    let mut body = common::beneficio("Cesta Básica");
    body["data"] = json!("9999-99-99");
    let res = server.client.post(server.url("/api/beneficios")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn nome_length_bounds() -> Result<()> {
    let server = common::spawn_server().await?;

    for (nome, expected) in [
        ("abcde".to_string(), StatusCode::CREATED),
        ("abcd".to_string(), StatusCode::BAD_REQUEST),
        ("n".repeat(200), StatusCode::CREATED),
        ("n".repeat(201), StatusCode::BAD_REQUEST),
    ] {
        let res = server
            .client
            .post(server.url("/api/beneficios"))
            .json(&common::beneficio(&nome))
            .send()
            .await?;
        assert_eq!(res.status(), expected, "nome of {} chars", nome.chars().count());
    }

    Ok(())
}

#[tokio::test]
async fn update_runs_the_same_rules() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = server.create(&common::beneficio("Cesta Básica")).await?;

    let mut body = common::beneficio("Cesta Básica");
    body["id"] = json!(id);
    body["quantidade"] = json!("duas");

    let res = server.client.put(server.url("/api/beneficios")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(params(&res.json::<Value>().await?), ["quantidade"]);

    let found = server
        .client
        .get(server.url(&format!("/api/beneficios/id/{}", id)))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(found[0]["quantidade"], 2);

    Ok(())
}

#[tokio::test]
async fn malformed_json_uses_the_error_envelope() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/beneficios"))
        .header("content-type", "application/json")
        .body("{ \"nome\": ")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["errors"].is_array());
    assert_eq!(body["errors"][0]["location"], "body");

    Ok(())
}
