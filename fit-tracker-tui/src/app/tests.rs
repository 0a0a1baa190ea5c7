// State-machine tests for the app, driven through handle_key_event against a
// stub HTTP service (an in-memory Vec behind a TcpListener). The stub records
// every request, so tests can assert both what was sent and what was not.
use super::state::{ActiveModal, App, EditField, FormField, PaneFocus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fit_tracker_lib::{Config, WorkoutClient, WorkoutPayload, WorkoutRecord, WorkoutService};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    body: String,
}

#[derive(Default)]
struct StubState {
    records: Vec<WorkoutRecord>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
    fail_status: Option<u16>,
}

struct StubServer {
    base_url: String,
    state: Arc<Mutex<StubState>>,
}

impl StubServer {
    fn start(seed: Vec<WorkoutRecord>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let state = Arc::new(Mutex::new(StubState {
            next_id: seed.iter().map(|w| w.workout_id).max().unwrap_or(0) + 1,
            records: seed,
            ..Default::default()
        }));

        let thread_state = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve_one(stream, &thread_state);
            }
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{port}/workout"),
            state,
        })
    }

    fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    fn count(&self, method: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method).count()
    }
}

fn serve_one(mut stream: TcpStream, state: &Mutex<StubState>) {
    let Some((method, path, body)) = read_request(&mut stream) else {
        return;
    };

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    let (status, response_body) = if let Some(status) = state.fail_status {
        (status, "stub failure".to_string())
    } else {
        route(&mut state, &method, &path, &body)
    };

    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
        response_body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn route(state: &mut StubState, method: &str, path: &str, body: &str) -> (u16, String) {
    if method == "GET" && path == "/workout/get-workouts" {
        (200, serde_json::to_string(&state.records).unwrap())
    } else if method == "POST" && path == "/workout/create-workout" {
        let payload: WorkoutPayload = match serde_json::from_str(body) {
            Ok(p) => p,
            Err(_) => return (400, String::new()),
        };
        let record = WorkoutRecord {
            workout_id: state.next_id,
            date: payload.date,
            workout_name: payload.workout_name,
            duration: payload.duration,
        };
        state.next_id += 1;
        state.records.push(record.clone());
        (200, serde_json::to_string(&record).unwrap())
    } else if let ("PUT", Some(id)) = (
        method,
        path.strip_prefix("/workout/update-workout/")
            .and_then(|raw| raw.parse::<i64>().ok()),
    ) {
        let payload: WorkoutPayload = match serde_json::from_str(body) {
            Ok(p) => p,
            Err(_) => return (400, String::new()),
        };
        match state.records.iter_mut().find(|w| w.workout_id == id) {
            Some(record) => {
                record.date = payload.date;
                record.workout_name = payload.workout_name;
                record.duration = payload.duration;
                (200, serde_json::to_string(record).unwrap())
            }
            None => (404, String::new()),
        }
    } else if let ("DELETE", Some(id)) = (
        method,
        path.strip_prefix("/workout/delete-workout/")
            .and_then(|raw| raw.parse::<i64>().ok()),
    ) {
        let before = state.records.len();
        state.records.retain(|w| w.workout_id != id);
        if state.records.len() < before {
            (200, String::new())
        } else {
            (404, String::new())
        }
    } else {
        (404, String::new())
    }
}

fn read_request(stream: &mut TcpStream) -> Option<(String, String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some((method, path, String::from_utf8_lossy(&body).to_string()))
}

// --- Test helpers ---

fn record(id: i64, date: &str, name: &str, duration: f64) -> WorkoutRecord {
    WorkoutRecord {
        workout_id: id,
        date: date.to_string(),
        workout_name: name.to_string(),
        duration,
    }
}

fn create_test_app(server: &StubServer) -> App {
    let config = Config {
        server_url: server.base_url.clone(),
        ..Default::default()
    };
    let client = WorkoutClient::new(&config.server_url);
    App::new(WorkoutService {
        config,
        client,
        config_path: "test_config.toml".into(),
    })
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

// Fill the add form (focus starts on Date) and land on the Add button.
fn fill_add_form(app: &mut App, date: &str, name: &str, duration: &str) {
    type_str(app, date);
    press(app, KeyCode::Enter);
    type_str(app, name);
    press(app, KeyCode::Enter);
    type_str(app, duration);
    press(app, KeyCode::Enter);
    assert_eq!(app.form_focus, FormField::Add);
}

// --- Tests ---

#[test]
fn test_initial_fetch_populates_list() -> Result<()> {
    let server = StubServer::start(vec![record(1, "2024-01-01", "Run", 1.0)])?;
    let app = create_test_app(&server);

    assert_eq!(app.workouts.len(), 1);
    assert_eq!(app.workouts[0].workout_id, 1);
    assert_eq!(app.workouts[0].date, "2024-01-01");
    assert_eq!(app.workouts[0].workout_name, "Run");
    assert_eq!(app.workouts[0].duration, 1.0);
    assert_eq!(app.table_state.selected(), Some(0));
    Ok(())
}

#[test]
fn test_initial_fetch_failure_renders_empty_list() -> Result<()> {
    let server = StubServer::start(vec![record(1, "2024-01-01", "Run", 1.0)])?;
    server.fail_with(500);
    let app = create_test_app(&server);

    // No error banner state exists; the list is just empty.
    assert!(app.workouts.is_empty());
    assert_eq!(app.table_state.selected(), None);
    assert_eq!(app.active_modal, ActiveModal::None);
    Ok(())
}

#[test]
fn test_add_with_missing_field_alerts_and_sends_nothing() -> Result<()> {
    let server = StubServer::start(Vec::new())?;
    let mut app = create_test_app(&server);

    // Date filled, name left empty, duration filled
    fill_add_form(&mut app, "2024-02-02", "", "2");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.active_modal,
        ActiveModal::Alert {
            message: "Please fill in all fields".to_string()
        }
    );
    assert_eq!(server.count("POST"), 0);
    // Inputs are untouched
    assert_eq!(app.date_input, "2024-02-02");
    assert_eq!(app.duration_input, "2");

    // Dismissing the alert returns to the form as it was
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_modal, ActiveModal::None);
    Ok(())
}

#[test]
fn test_add_workout_posts_resets_fields_and_refetches() -> Result<()> {
    let server = StubServer::start(vec![record(1, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    fill_add_form(&mut app, "2024-02-02", "Swim", "2");
    press(&mut app, KeyCode::Enter);

    let requests = server.requests();
    let post = requests
        .iter()
        .find(|r| r.method == "POST")
        .expect("create request sent");
    assert_eq!(post.path, "/workout/create-workout");
    let body: serde_json::Value = serde_json::from_str(&post.body)?;
    assert_eq!(
        body,
        serde_json::json!({
            "date": "2024-02-02",
            "workoutName": "Swim",
            "duration": 2.0,
        })
    );

    // Fields reset, list re-fetched (initial GET plus one more)
    assert!(app.date_input.is_empty());
    assert!(app.name_input.is_empty());
    assert!(app.duration_input.is_empty());
    assert_eq!(server.count("GET"), 2);
    assert_eq!(app.workouts.len(), 2);
    assert_eq!(app.workouts[1].workout_name, "Swim");
    Ok(())
}

#[test]
fn test_add_failure_keeps_inputs_for_retry() -> Result<()> {
    let server = StubServer::start(Vec::new())?;
    let mut app = create_test_app(&server);

    server.fail_with(500);
    fill_add_form(&mut app, "2024-02-02", "Swim", "2");
    press(&mut app, KeyCode::Enter);

    // The attempt was made, failed silently, and the inputs survive.
    assert_eq!(server.count("POST"), 1);
    assert_eq!(app.date_input, "2024-02-02");
    assert_eq!(app.name_input, "Swim");
    assert_eq!(app.duration_input, "2");
    assert_eq!(app.active_modal, ActiveModal::None);
    assert_eq!(server.count("GET"), 1); // No re-fetch either
    Ok(())
}

#[test]
fn test_edit_updates_selected_record() -> Result<()> {
    let server = StubServer::start(vec![
        record(1, "2024-01-01", "Run", 1.0),
        record(5, "2024-01-02", "Swim", 1.0),
    ])?;
    let mut app = create_test_app(&server);

    // Jump to the list and select the second record
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, PaneFocus::List);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('e'));

    // The dialog holds a copy of the selected record
    match &app.active_modal {
        ActiveModal::EditWorkout {
            workout_id,
            date_input,
            name_input,
            duration_input,
            focused_field,
        } => {
            assert_eq!(*workout_id, 5);
            assert_eq!(date_input, "2024-01-02");
            assert_eq!(name_input, "Swim");
            assert_eq!(duration_input, "1");
            assert_eq!(*focused_field, EditField::Date);
        }
        other => panic!("expected edit dialog, got {other:?}"),
    }

    // Move to the duration field and change 1 -> 3
    press(&mut app, KeyCode::Enter); // Date -> Name
    press(&mut app, KeyCode::Enter); // Name -> Duration
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "3");
    press(&mut app, KeyCode::Enter); // Duration -> Confirm
    press(&mut app, KeyCode::Enter); // Submit

    let requests = server.requests();
    let put = requests
        .iter()
        .find(|r| r.method == "PUT")
        .expect("update request sent");
    assert_eq!(put.path, "/workout/update-workout/5");
    let body: serde_json::Value = serde_json::from_str(&put.body)?;
    assert_eq!(body["duration"], serde_json::json!(3.0));

    // Dialog closed, selection cleared, list re-fetched
    assert_eq!(app.active_modal, ActiveModal::None);
    assert_eq!(server.count("GET"), 2);
    assert_eq!(app.workouts[1].duration, 3.0);
    Ok(())
}

#[test]
fn test_edit_cancel_closes_without_request() -> Result<()> {
    let server = StubServer::start(vec![record(1, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, "x"); // Edit the copy a little
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.active_modal, ActiveModal::None);
    assert_eq!(server.count("PUT"), 0);
    // The persisted copy in the list is untouched
    assert_eq!(app.workouts[0].date, "2024-01-01");
    Ok(())
}

#[test]
fn test_edit_failure_keeps_dialog_open() -> Result<()> {
    let server = StubServer::start(vec![record(5, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('e'));
    server.fail_with(500);

    // Straight to Confirm and submit
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(server.count("PUT"), 1);
    assert!(
        matches!(app.active_modal, ActiveModal::EditWorkout { workout_id: 5, .. }),
        "dialog should stay open for retry"
    );
    Ok(())
}

#[test]
fn test_delete_confirmed_removes_record() -> Result<()> {
    let server = StubServer::start(vec![record(5, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(
        app.active_modal,
        ActiveModal::ConfirmDelete {
            workout_id: 5,
            workout_name: "Run".to_string()
        }
    );
    press(&mut app, KeyCode::Char('y'));

    let requests = server.requests();
    let delete = requests
        .iter()
        .find(|r| r.method == "DELETE")
        .expect("delete request sent");
    assert_eq!(delete.path, "/workout/delete-workout/5");
    assert!(delete.body.is_empty());

    assert_eq!(app.active_modal, ActiveModal::None);
    assert_eq!(server.count("GET"), 2);
    assert!(app.workouts.is_empty());
    Ok(())
}

#[test]
fn test_delete_declined_sends_nothing() -> Result<()> {
    let server = StubServer::start(vec![record(5, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.active_modal, ActiveModal::None);
    assert_eq!(server.count("DELETE"), 0);
    assert_eq!(app.workouts.len(), 1);
    Ok(())
}

#[test]
fn test_delete_failure_keeps_dialog_open() -> Result<()> {
    let server = StubServer::start(vec![record(5, "2024-01-01", "Run", 1.0)])?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    server.fail_with(500);
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(server.count("DELETE"), 1);
    assert!(matches!(
        app.active_modal,
        ActiveModal::ConfirmDelete { workout_id: 5, .. }
    ));
    assert_eq!(app.workouts.len(), 1);
    Ok(())
}

#[test]
fn test_add_with_unparseable_duration_alerts_without_request() -> Result<()> {
    let server = StubServer::start(Vec::new())?;
    let mut app = create_test_app(&server);

    // The keystroke filter still lets a second dot through
    fill_add_form(&mut app, "2024-02-02", "Swim", "1..5");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.active_modal,
        ActiveModal::Alert {
            message: "Duration must be a number".to_string()
        }
    );
    assert_eq!(server.count("POST"), 0);
    Ok(())
}

#[test]
fn test_duration_input_filters_non_numeric_keys() -> Result<()> {
    let server = StubServer::start(Vec::new())?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Enter); // Date -> Name
    press(&mut app, KeyCode::Enter); // Name -> Duration
    type_str(&mut app, "1a.b5");
    assert_eq!(app.duration_input, "1.5");
    Ok(())
}

#[test]
fn test_help_modal_opens_and_closes() -> Result<()> {
    let server = StubServer::start(Vec::new())?;
    let mut app = create_test_app(&server);

    press(&mut app, KeyCode::Esc); // To the list pane
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.active_modal, ActiveModal::Help);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_modal, ActiveModal::None);
    Ok(())
}
