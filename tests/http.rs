use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct GoalResponse {
    id: String,
    title: String,
    description: Option<String>,
    start_date: String,
    end_date: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    id: String,
    goal_id: String,
    date: String,
    completed: bool,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DayCellResponse {
    day: i64,
    date: String,
    completed: bool,
    is_today: bool,
    is_future: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    goal_id: String,
    total_days: u32,
    completed_days: u32,
    completion_rate: u8,
    current_streak: u32,
    best_streak: u32,
    elapsed_percent: u8,
    days: Vec<DayCellResponse>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "goal_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + StdDuration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(StdDuration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_goal_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_goal(client: &Client, base_url: &str, title: &str) -> GoalResponse {
    let response = client
        .post(format!("{base_url}/api/goals"))
        .json(&serde_json::json!({ "title": title, "description": "test goal" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

async fn fetch_progress(client: &Client, base_url: &str, goal_id: &str) -> Vec<ProgressResponse> {
    client
        .get(format!("{base_url}/api/goals/{goal_id}/progress"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_health_reports_healthy() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let health: HealthResponse = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health.status, "healthy");
    assert!(!health.timestamp.is_empty());
}

#[tokio::test]
async fn http_create_goal_seeds_thirty_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goal = create_goal(&client, &server.base_url, "morning run").await;
    assert_eq!(goal.title, "morning run");
    assert_eq!(goal.description.as_deref(), Some("test goal"));
    assert!(!goal.created_at.is_empty());

    let start = NaiveDate::parse_from_str(&goal.start_date, "%Y-%m-%d").unwrap();
    let end = NaiveDate::parse_from_str(&goal.end_date, "%Y-%m-%d").unwrap();
    assert_eq!(end.signed_duration_since(start).num_days(), 29);

    let rows = fetch_progress(&client, &server.base_url, &goal.id).await;
    assert_eq!(rows.len(), 30);
    for (offset, row) in rows.iter().enumerate() {
        let expected = start + Duration::days(offset as i64);
        assert_eq!(row.date, expected.format("%Y-%m-%d").to_string());
        assert_eq!(row.goal_id, goal.id);
        assert!(!row.completed);
        assert!(row.notes.is_none());
    }

    let listed: Vec<GoalResponse> = client
        .get(format!("{}/api/goals", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().any(|g| g.id == goal.id));
}

#[tokio::test]
async fn http_toggle_day_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goal = create_goal(&client, &server.base_url, "journal").await;
    let rows = fetch_progress(&client, &server.base_url, &goal.id).await;
    let day_5 = &rows[4];

    let response = client
        .put(format!("{}/api/progress/{}", server.base_url, day_5.id))
        .json(&serde_json::json!({ "completed": true, "notes": "felt easy" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let rows = fetch_progress(&client, &server.base_url, &goal.id).await;
    assert!(rows[4].completed);
    assert_eq!(rows[4].notes.as_deref(), Some("felt easy"));

    let response = client
        .put(format!("{}/api/progress/{}", server.base_url, day_5.id))
        .json(&serde_json::json!({ "completed": false }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let rows = fetch_progress(&client, &server.base_url, &goal.id).await;
    assert!(!rows[4].completed);
    assert!(rows[4].notes.is_none());
}

#[tokio::test]
async fn http_summary_tracks_completions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goal = create_goal(&client, &server.base_url, "stretch").await;
    let rows = fetch_progress(&client, &server.base_url, &goal.id).await;

    let response = client
        .put(format!("{}/api/progress/{}", server.base_url, rows[0].id))
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let summary: SummaryResponse = client
        .get(format!("{}/api/goals/{}/summary", server.base_url, goal.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(summary.goal_id, goal.id);
    assert_eq!(summary.total_days, 30);
    assert_eq!(summary.completed_days, 1);
    assert_eq!(summary.completion_rate, 3);
    assert_eq!(summary.best_streak, 1);
    assert!(summary.best_streak >= summary.current_streak);
    assert!(summary.completion_rate <= 100);
    assert!(summary.elapsed_percent <= 100);

    assert_eq!(summary.days.len(), 30);
    assert!(summary.days.iter().filter(|cell| cell.is_today).count() <= 1);
    assert_eq!(summary.days[0].day, 1);
    assert!(summary.days[0].completed);
    assert_eq!(summary.days[0].date, goal.start_date);
    assert_eq!(summary.days[29].day, 30);
    assert_eq!(summary.days[29].date, goal.end_date);
    assert!(!summary.days[29].completed);
    assert!(summary.days[29].is_future);
}

#[tokio::test]
async fn http_delete_goal_cascades() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goal = create_goal(&client, &server.base_url, "meditate").await;

    let response = client
        .delete(format!("{}/api/goals/{}", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/api/goals/{}/progress", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .get(format!("{}/api/goals/{}/summary", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let listed: Vec<GoalResponse> = client
        .get(format!("{}/api/goals", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().all(|g| g.id != goal.id));

    // Deleting again is a quiet success.
    let response = client
        .delete(format!("{}/api/goals/{}", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_blank_title_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn http_unknown_ids_return_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/goals/no-such-goal/progress",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .put(format!("{}/api/progress/no-such-row", server.base_url))
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
