//! End-to-end checks of the flat operation set.

use std::io::ErrorKind;

use pledge::{FileError, TokenError};

fn is_lower_hex(token: &str) -> bool { token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) }

#[tokio::test]
async fn test_generate_token() {
    let token = pledge::generate_token().await.unwrap();

    assert_eq!(token.len(), pledge::TOKEN_LEN);
    assert!(is_lower_hex(&token));
}

#[tokio::test]
async fn test_generate_token_with_callback() {
    let (tx, rx) = tokio::sync::oneshot::channel::<Result<String, TokenError>>();

    pledge::generate_token_with(Box::new(move |outcome| {
        let _ = tx.send(outcome);
    }));

    assert_eq!(rx.await.unwrap().unwrap().len(), 40);
}

#[tokio::test]
async fn test_make_file_funny() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "a\nb\n").unwrap();

    assert_eq!(pledge::make_file_funny(&path).await.unwrap(), "a lol\nb lol\n lol");
}

#[tokio::test]
async fn test_make_file_funny_missing() {
    let dir = tempfile::tempdir().unwrap();

    let err: FileError = pledge::make_file_funny(dir.path().join("nope.txt")).await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
#[ignore = "requires network access to api.github.com"]
async fn test_fetch_profile_live() {
    let profile = pledge::fetch_profile("octocat").await.unwrap();

    assert_eq!(profile["login"], "octocat");
}

#[tokio::test]
async fn test_callback_twin_through_promisify() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "hello").unwrap();

    let funny = pledge::promisify(|callback| pledge::make_file_funny_with(&path, callback)).await;

    assert_eq!(funny.unwrap(), "hello lol");
}
