use anyhow::Result;

use super::Answers;
use super::ChatRequest;
use super::ChatResponse;

#[test]
fn it_assigns_keys_in_order() {
    let mut answers = Answers::default();
    assert_eq!(answers.push("Acme"), "q1");
    assert_eq!(answers.push("bold"), "q2");

    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get("q1"), Some("Acme"));
    assert_eq!(answers.get("q2"), Some("bold"));
    assert_eq!(answers.get("q3"), None);
}

#[test]
fn it_serializes_answers_in_insertion_order() -> Result<()> {
    let mut answers = Answers::default();
    for idx in 1..=11 {
        answers.push(&format!("answer {idx}"));
    }

    let json = serde_json::to_string(&answers)?;
    assert!(json.starts_with(r#"{"q1":"answer 1","q2":"answer 2","#));
    assert!(json.ends_with(r#""q10":"answer 10","q11":"answer 11"}"#));

    return Ok(());
}

#[test]
fn it_serializes_free_form_request_with_nulls() -> Result<()> {
    let req = ChatRequest {
        text: "Eco-friendly fitness app for women".to_string(),
        feature: None,
        answers: None,
        session_id: "free-1234".to_string(),
    };

    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"text":"Eco-friendly fitness app for women","feature":null,"answers":null,"session_id":"free-1234"}"###);
    assert!(!req.is_guided());

    return Ok(());
}

#[test]
fn it_serializes_guided_request() -> Result<()> {
    let req = ChatRequest {
        text: "Generate final output".to_string(),
        feature: Some("tagline".to_string()),
        answers: Some(Answers::from_iter(vec![("q1", "Acme"), ("q2", "Speed")])),
        session_id: "flow-1234".to_string(),
    };

    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"text":"Generate final output","feature":"tagline","answers":{"q1":"Acme","q2":"Speed"},"session_id":"flow-1234"}"###);
    assert!(req.is_guided());

    return Ok(());
}

#[test]
fn it_returns_reply_text() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(r#"{"reply":"Line one\r\nLine two","done":true}"#)?;
    assert_eq!(res.reply_text(true), "Line one\nLine two");

    return Ok(());
}

#[test]
fn it_returns_placeholder_without_reply() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(r#"{"done":false}"#)?;
    assert_eq!(res.reply_text(true), "No result received");
    assert_eq!(res.reply_text(false), "No reply received");

    let empty: ChatResponse = serde_json::from_str(r#"{"reply":"  "}"#)?;
    assert_eq!(empty.reply_text(false), "No reply received");

    return Ok(());
}
