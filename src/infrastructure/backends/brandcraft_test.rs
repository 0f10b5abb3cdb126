use anyhow::bail;
use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use super::BrandCraft;
use crate::domain::models::Answers;
use crate::domain::models::Author;
use crate::domain::models::Backend;
use crate::domain::models::BackendResponse;
use crate::domain::models::ChatRequest;
use crate::domain::models::Event;
use crate::infrastructure::backends::BackendManager;

impl BrandCraft {
    fn with_url(url: String) -> BrandCraft {
        return BrandCraft {
            url,
            timeout: "500".to_string(),
            health_check_timeout: "200".to_string(),
        };
    }
}

fn to_res(event: Option<Event>) -> Result<BackendResponse> {
    let res = match event.unwrap() {
        Event::BackendPromptResponse(res) => res,
        _ => bail!("Wrong type from recv"),
    };

    return Ok(res);
}

fn guided_request() -> ChatRequest {
    return ChatRequest {
        text: "Generate final output".to_string(),
        feature: Some("tagline".to_string()),
        answers: Some(Answers::from_iter([("q1", "Acme"), ("q2", "Speed")])),
        session_id: "flow-1234".to_string(),
    };
}

fn free_form_request() -> ChatRequest {
    return ChatRequest {
        text: "Minecraft gaming tutorial".to_string(),
        feature: None,
        answers: None,
        session_id: "free-5678".to_string(),
    };
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/openapi.json")
        .with_status(200)
        .with_body("{}")
        .create();

    let backend = BrandCraft::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/openapi.json").with_status(500).create();

    let backend = BrandCraft::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_when_unreachable() {
    let backend = BrandCraft::with_url("http://127.0.0.1:1".to_string());
    let res = backend.health_check().await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_gets_guided_completions() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({
            "text": "Generate final output",
            "feature": "tagline",
            "answers": { "q1": "Acme", "q2": "Speed" },
            "session_id": "flow-1234"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reply": "  Fast by design.\r\nBuilt to move.  ", "done": true}"#)
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url(server.url());
    backend.get_completion(guided_request(), &tx).await?;

    mock.assert();
    assert_eq!(
        to_res(rx.recv().await)?,
        BackendResponse {
            author: Author::BrandCraft,
            text: "Fast by design.\nBuilt to move.".to_string(),
            done: true,
            session_id: "flow-1234".to_string(),
        }
    );

    return Ok(());
}

#[tokio::test]
async fn it_sends_null_feature_for_free_form() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({
            "text": "Minecraft gaming tutorial",
            "feature": null,
            "answers": null,
            "session_id": "free-5678"
        })))
        .with_status(200)
        .with_body(r#"{"reply": "Try these titles.", "done": true}"#)
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url(server.url());
    backend.get_completion(free_form_request(), &tx).await?;

    mock.assert();
    assert_eq!(to_res(rx.recv().await)?.text, "Try these titles.");

    return Ok(());
}

#[tokio::test]
async fn it_uses_placeholders_for_missing_replies() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"done": true}"#)
        .expect(2)
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url(server.url());

    backend.get_completion(guided_request(), &tx).await?;
    assert_eq!(to_res(rx.recv().await)?.text, "No result received");

    backend.get_completion(free_form_request(), &tx).await?;
    assert_eq!(to_res(rx.recv().await)?.text, "No reply received");

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_status() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url(server.url());
    let res = backend.get_completion(guided_request(), &tx).await;

    mock.assert();
    match res {
        Ok(_) => bail!("Expected an error status to fail"),
        Err(err) => assert_eq!(err.to_string(), "Backend error: 500"),
    }
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_invalid_body() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url(server.url());
    let res = backend.get_completion(guided_request(), &tx).await;

    mock.assert();
    assert!(res.is_err());
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    let (tx, _rx) = mpsc::unbounded_channel::<Event>();
    let backend = BrandCraft::with_url("http://127.0.0.1:1".to_string());
    let res = backend.get_completion(free_form_request(), &tx).await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_when_reply_times_out() -> Result<()> {
    // Accepts the connection and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(tokio::time::Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut backend = BrandCraft::with_url(format!("http://{addr}"));
    backend.timeout = "200".to_string();
    let res = backend.get_completion(guided_request(), &tx).await;
    server.abort();

    let err = res.unwrap_err();
    let is_timeout = err
        .downcast_ref::<reqwest::Error>()
        .map(|e| return e.is_timeout())
        .unwrap_or(false);
    assert!(is_timeout);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_rejects_urls_without_scheme() {
    assert!(BackendManager::get("localhost:8000").is_err());
    assert!(BackendManager::get("http://localhost:8000").is_ok());
}
