/// E2E Test: Full check-in run
///
/// Drives the production wiring (config -> GLaDOS client -> PushDeer sender)
/// against local mock servers:
/// 1. Mixed account outcomes end up in a single summary push
/// 2. A missing cookie list pushes the failure notice and exits with 1
/// 3. An empty SENDKEY never contacts PushDeer
/// 4. A broken GLaDOS URL override does not hide the missing-cookie notice
use std::collections::HashMap;

use mockito::{Matcher, Server, ServerGuard};

use glados_app::{bootstrap, AppConfig, RunOutcome};

const PUSH_OK: &str =
    r#"{"code":0,"content":{"result":["{\"counts\":1,\"logs\":[],\"success\":\"ok\"}"]}}"#;

fn config_for(glados: &ServerGuard, pushdeer: &ServerGuard, vars: &[(&str, &str)]) -> AppConfig {
    let mut env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    env.insert("GLADOS_BASE_URL".to_string(), glados.url());
    env.insert("PUSHDEER_SERVER".to_string(), pushdeer.url());

    AppConfig::from_lookup(|key| env.get(key).cloned())
}

#[tokio::test]
async fn e2e_mixed_accounts_single_summary_push() {
    // ============================================================
    // Setup
    // ============================================================
    let mut glados = Server::new_async().await;
    let mut pushdeer = Server::new_async().await;

    let _good_checkin = glados
        .mock("POST", "/api/user/checkin")
        .match_header("cookie", "good")
        .with_body(r#"{"code":0,"message":"Checkin! Got 5","points":5}"#)
        .expect(1)
        .create_async()
        .await;
    let _good_status = glados
        .mock("GET", "/api/user/status")
        .match_header("cookie", "good")
        .with_body(r#"{"code":0,"data":{"email":"a@b.com","leftDays":"10"}}"#)
        .expect(1)
        .create_async()
        .await;

    let _expired_checkin = glados
        .mock("POST", "/api/user/checkin")
        .match_header("cookie", "expired")
        .with_body(r#"{"code":-2,"message":"please login"}"#)
        .expect(1)
        .create_async()
        .await;
    let _expired_status = glados
        .mock("GET", "/api/user/status")
        .match_header("cookie", "expired")
        .with_body(r#"{"code":-2,"message":"please login"}"#)
        .expect(1)
        .create_async()
        .await;

    let push = pushdeer
        .mock("GET", "/message/push")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pushkey".into(), "PDUkey".into()),
            Matcher::UrlEncoded("text".into(), "Glados, 成功1, 失败1, 重复0".into()),
        ]))
        .with_body(PUSH_OK)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(
        &glados,
        &pushdeer,
        &[("SENDKEY", "PDUkey"), ("COOKIES", "good&&expired")],
    );

    // ============================================================
    // Run
    // ============================================================
    let outcome = bootstrap::run(&config).await.expect("run should start");

    // ============================================================
    // Verify
    // ============================================================
    push.assert_async().await;
    assert_eq!(outcome.exit_status(), 0);

    let RunOutcome::Completed(summary) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(summary.success, 1);
    assert_eq!(summary.fail, 1);
    assert_eq!(summary.repeat, 0);

    let lines: Vec<&str> = summary.body().lines().collect();
    assert_eq!(
        lines[0],
        "账号: a@b.com, P: 5, 剩余: 10 天 | 签到成功，会员点数 + 5"
    );
    assert!(lines[1].starts_with("账号: Unknown, P: 0, 剩余: error 天 | 签到失败: 状态API未返回'data'键"));

    println!("✓ Mixed account run produced one summary push");
}

#[tokio::test]
async fn e2e_missing_cookies_pushes_failure_and_exits_with_one() {
    let glados = Server::new_async().await;
    let mut pushdeer = Server::new_async().await;

    let push = pushdeer
        .mock("GET", "/message/push")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("text".into(), "Glados 签到失败".into()),
            Matcher::UrlEncoded("desp".into(), "未找到 COOKIES!".into()),
        ]))
        .with_body(PUSH_OK)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&glados, &pushdeer, &[("SENDKEY", "PDUkey"), ("COOKIES", "  ")]);

    let outcome = bootstrap::run(&config).await.expect("run should start");

    push.assert_async().await;
    assert_eq!(outcome, RunOutcome::NoCredentials);
    assert_eq!(outcome.exit_status(), 1);

    println!("✓ Missing cookies reported and exit status is 1");
}

#[tokio::test]
async fn e2e_empty_sendkey_skips_push() {
    let mut glados = Server::new_async().await;
    let mut pushdeer = Server::new_async().await;

    let _checkin = glados
        .mock("POST", "/api/user/checkin")
        .with_body(r#"{"message":"Checkin Repeats! Please Try Tomorrow","points":0}"#)
        .create_async()
        .await;
    let _status = glados
        .mock("GET", "/api/user/status")
        .with_body(r#"{"data":{"email":"a@b.com","leftDays":9.0}}"#)
        .create_async()
        .await;

    let push = pushdeer
        .mock("GET", "/message/push")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&glados, &pushdeer, &[("COOKIES", "abc")]);

    let outcome = bootstrap::run(&config).await.expect("run should start");

    push.assert_async().await;
    let RunOutcome::Completed(summary) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(summary.repeat, 1);
    assert_eq!(
        summary.body(),
        "账号: a@b.com, P: 0, 剩余: 9 天 | 重复签到，明天再来\n"
    );

    println!("✓ Empty SENDKEY skipped the push");
}

#[tokio::test]
async fn e2e_invalid_base_url_with_missing_cookies_still_exits_with_one() {
    let mut pushdeer = Server::new_async().await;

    let push = pushdeer
        .mock("GET", "/message/push")
        .match_query(Matcher::UrlEncoded("text".into(), "Glados 签到失败".into()))
        .with_body(PUSH_OK)
        .expect(1)
        .create_async()
        .await;

    let env: HashMap<&str, String> = HashMap::from([
        ("SENDKEY", "PDUkey".to_string()),
        ("COOKIES", String::new()),
        ("GLADOS_BASE_URL", "glados".to_string()),
        ("PUSHDEER_SERVER", pushdeer.url()),
    ]);
    let config = AppConfig::from_lookup(|key| env.get(key).cloned());

    let outcome = bootstrap::run(&config).await.expect("run should start");

    push.assert_async().await;
    assert_eq!(outcome, RunOutcome::NoCredentials);
    assert_eq!(outcome.exit_status(), 1);

    println!("✓ Invalid base URL fell back and the failure notice was sent");
}
