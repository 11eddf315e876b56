use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct WeeklyBucket {
    day: String,
    happy: u64,
    calm: u64,
    neutral: u64,
    anxious: u64,
    sad: u64,
}

#[derive(Debug, Deserialize)]
struct CategoryTotal {
    category: String,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct Dashboard {
    mood_logs: usize,
    journal_entries: usize,
    weekly: Vec<WeeklyBucket>,
    distribution: Vec<CategoryTotal>,
}

impl Dashboard {
    fn day(&self, day: &str) -> &WeeklyBucket {
        self.weekly.iter().find(|bucket| bucket.day == day).expect("missing day")
    }

    fn total(&self, category: &str) -> u64 {
        self.distribution
            .iter()
            .find(|entry| entry.category == category)
            .expect("missing category")
            .total
    }
}

#[derive(Debug, Deserialize)]
struct MoodRecord {
    id: String,
    category: String,
}

#[derive(Debug, Deserialize)]
struct JournalEntry {
    id: String,
    title: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
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
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

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
    path.push(format!("wellness_app_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_wellness_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env_remove("ASSISTANT_URL")
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

async fn dashboard(client: &Client, server: &TestServer) -> Dashboard {
    client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_logged_moods_show_up_on_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = dashboard(&client, &server).await;
    let days: Vec<&str> = before.weekly.iter().map(|bucket| bucket.day.as_str()).collect();
    assert_eq!(days, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    assert_eq!(before.distribution.len(), 5);

    // Offset-less timestamps are read as local time, so the weekday is fixed.
    for (category, occurred_at) in [
        ("Happy", "2026-01-05T09:00:00"),
        ("Relaxed", "2026-01-05T12:00:00"),
        ("Stressed", "2026-01-06T08:00:00"),
    ] {
        let response = client
            .post(format!("{}/api/moods", server.base_url))
            .json(&serde_json::json!({ "category": category, "occurred_at": occurred_at }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let record: MoodRecord = response.json().await.unwrap();
        assert_eq!(record.category, category);
    }

    let after = dashboard(&client, &server).await;
    assert_eq!(after.mood_logs, before.mood_logs + 3);

    let (mon_before, mon_after) = (before.day("Mon"), after.day("Mon"));
    assert_eq!(mon_after.happy, mon_before.happy + 1);
    assert_eq!(mon_after.calm, mon_before.calm + 1);
    assert_eq!(mon_after.neutral, mon_before.neutral + 1);
    assert_eq!(mon_after.anxious, mon_before.anxious);
    assert_eq!(mon_after.sad, mon_before.sad);
    assert_eq!(after.day("Tue").anxious, before.day("Tue").anxious + 1);

    assert_eq!(after.total("happy"), before.total("happy") + 1);
    assert_eq!(after.total("calm"), before.total("calm") + 1);
    assert_eq!(after.total("neutral"), before.total("neutral") + 1);
    assert_eq!(after.total("anxious"), before.total("anxious") + 1);
    assert_eq!(after.total("sad"), before.total("sad"));
}

#[tokio::test]
async fn http_delete_mood_removes_it_once() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let record: MoodRecord = client
        .post(format!("{}/api/moods", server.base_url))
        .json(&serde_json::json!({ "moodType": "Sad" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let url = format!("{}/api/moods/{}", server.base_url, record.id);
    let first = client.delete(&url).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = client.delete(&url).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let moods: Vec<MoodRecord> = client
        .get(format!("{}/api/moods", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(moods.iter().all(|mood| mood.id != record.id));
}

#[tokio::test]
async fn http_journal_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let journals_url = format!("{}/api/journals", server.base_url);

    let rejected = client
        .post(&journals_url)
        .json(&serde_json::json!({ "title": "  ", "content": "words" }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let before = dashboard(&client, &server).await;
    let created = client
        .post(&journals_url)
        .json(&serde_json::json!({ "title": "Evening", "content": "Went for a walk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let entry: JournalEntry = created.json().await.unwrap();

    let listed: Vec<JournalEntry> = client
        .get(&journals_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.first().map(|first| first.id.as_str()), Some(entry.id.as_str()));
    assert_eq!(dashboard(&client, &server).await.journal_entries, before.journal_entries + 1);

    let updated: JournalEntry = client
        .put(format!("{journals_url}/{}", entry.id))
        .json(&serde_json::json!({ "content": "Went for a long walk" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.title, "Evening");
    assert_eq!(updated.content, "Went for a long walk");

    let deleted = client.delete(format!("{journals_url}/{}", entry.id)).send().await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let missing = client.delete(format!("{journals_url}/{}", entry.id)).send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_chat_without_assistant_uses_fallback() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let chat_url = format!("{}/api/chat", server.base_url);

    let blank = client
        .post(&chat_url)
        .json(&serde_json::json!({ "message": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let reply: ChatResponse = client
        .post(&chat_url)
        .json(&serde_json::json!({ "message": "I'm feeling anxious today" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply.response, wellness_app::chat::FALLBACK_REPLY);
}

#[tokio::test]
async fn http_index_renders_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Your Wellness Dashboard"));
    assert!(!body.contains("{{MOOD_LOGS}}"));

    let affirmation: serde_json::Value = client
        .get(format!("{}/api/affirmation", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let text = affirmation["text"].as_str().unwrap_or_default();
    assert!(
        wellness_app::affirmations::AFFIRMATIONS
            .iter()
            .any(|candidate| *candidate == text)
    );
}
