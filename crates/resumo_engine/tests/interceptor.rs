use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use resumo_core::{Toast, ToastKind};
use resumo_engine::{
    ClientSettings, HttpClient, ResponseInterceptor, ToastCenter, ToastInterceptor,
};
use tokio::runtime::Handle;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, toasts: &ToastCenter) -> HttpClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    HttpClient::new(&settings)
        .expect("client")
        .with_interceptor(Arc::new(ToastInterceptor::new(toasts.clone())))
}

#[derive(Default)]
struct RecordingInterceptor {
    seen: Mutex<Vec<(String, u16)>>,
}

impl ResponseInterceptor for RecordingInterceptor {
    fn on_response(&self, url: &Url, status: StatusCode, _headers: &HeaderMap) {
        self.seen
            .lock()
            .unwrap()
            .push((url.path().to_string(), status.as_u16()));
    }
}

#[tokio::test]
async fn message_header_without_type_raises_one_info_toast() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/save"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Toast-Message", "Saved")
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts);
    let url = client.endpoint(&["api", "save"]).unwrap();

    let response = client
        .send(client.request(Method::POST, url))
        .await
        .expect("response");

    // The caller still receives the untouched response.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "{}");

    let visible = toasts.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].toast, Toast::info("Saved"));
    assert_eq!(visible[0].toast.duration_ms, 5000);
}

#[tokio::test]
async fn full_header_set_is_honoured_on_execute_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resume"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Toast-Message", "Resume created")
                .insert_header("X-Toast-Type", "success")
                .insert_header("X-Toast-Duration", "3000"),
        )
        .mount(&server)
        .await;

    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts);
    let request = client
        .request(Method::GET, client.endpoint(&["api", "resume"]).unwrap())
        .build()
        .unwrap();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let visible = toasts.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].toast.kind, ToastKind::Success);
    assert_eq!(visible[0].toast.duration_ms, 3000);
}

#[tokio::test]
async fn responses_without_signal_raise_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).insert_header("X-Toast-Type", "error"))
        .mount(&server)
        .await;

    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts);
    let url = client.endpoint(&["missing"]).unwrap();

    let response = client.send(client.request(Method::GET, url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(toasts.visible().is_empty());
}

#[tokio::test]
async fn unknown_type_falls_back_to_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Toast-Message", "Heads up")
                .insert_header("X-Toast-Type", "celebration")
                .insert_header("X-Toast-Duration", "later"),
        )
        .mount(&server)
        .await;

    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts);
    let url = client.endpoint(&["ping"]).unwrap();
    client.send(client.request(Method::GET, url)).await.unwrap();

    assert_eq!(
        toasts.visible()[0].toast,
        Toast::info("Heads up").with_duration(5000)
    );
}

#[tokio::test]
async fn every_registered_interceptor_sees_each_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let recorder = Arc::new(RecordingInterceptor::default());
    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts).with_interceptor(recorder.clone());

    for segment in ["a", "b"] {
        let url = client.endpoint(&[segment]).unwrap();
        client.send(client.request(Method::GET, url)).await.unwrap();
    }

    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![("/a".to_string(), 204), ("/b".to_string(), 204)]
    );
}

#[tokio::test]
async fn loaded_page_meta_tags_raise_toast() {
    let server = MockServer::start().await;
    let page = r#"<!doctype html><html><head>
        <meta name="x-toast-message" content="Resume optimized">
        <meta name="x-toast-type" content="success">
    </head><body>ok</body></html>"#;
    Mock::given(method("GET"))
        .and(path("/resume/42/optimize"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html"))
        .mount(&server)
        .await;

    let toasts = ToastCenter::new(Handle::current());
    let client = client_for(&server, &toasts);

    let id = client
        .load_page("/resume/42/optimize", &toasts)
        .await
        .expect("page");

    assert!(id.is_some());
    assert_eq!(toasts.visible()[0].toast, Toast::success("Resume optimized"));
}

#[test]
fn endpoint_escapes_segments_and_keeps_base_path() {
    let settings = ClientSettings {
        base_url: "http://localhost:9000/app/".to_string(),
        ..ClientSettings::default()
    };
    let client = HttpClient::new(&settings).unwrap();

    let url = client.endpoint(&["api", "resume", "a b/c", "score"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:9000/app/api/resume/a%20b%2Fc/score");
}
