mod common;

use std::time::Duration;

use common::emailjs_config;
use common::mock_emailjs::{MockEmailJs, MockResponse};
use cotizador::form::{FormFields, FormSchema};
use cotizador::submission::{EmailJsSink, QuoteRequest, QuoteSink, SubmissionError, SubmissionToken};

fn request() -> QuoteRequest {
    let mut fields = FormFields::empty_for(&FormSchema::cotizador());
    fields.set("nombreCompleto", "Ana Pérez");
    fields.set("correo", "ana@example.cl");
    fields.set("previsionActual", "fonasa");
    QuoteRequest::new(SubmissionToken::new(), &fields)
}

#[tokio::test]
async fn test_delivers_json_payload() {
    let mock = MockEmailJs::start().await;
    let sink = EmailJsSink::new(&emailjs_config(mock.send_url()), Duration::from_secs(5))
        .expect("sink");
    let request = request();

    sink.deliver(&request).await.expect("delivered");

    let captured = mock.captured_requests().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "POST");
    assert_eq!(captured[0].path, "/api/v1.0/email/send");
    assert!(captured[0]
        .headers
        .iter()
        .any(|(k, v)| k == "content-type" && v.starts_with("application/json")));

    let body = captured[0].json();
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_id"], "template_test");
    assert_eq!(body["user_id"], "public_test");
    assert_eq!(body["template_params"]["nombreCompleto"], "Ana Pérez");
    assert_eq!(body["template_params"]["previsionActual"], "fonasa");
    assert_eq!(
        body["template_params"]["submission_token"],
        request.token.to_string()
    );
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let mock = MockEmailJs::start().await;
    mock.enqueue_response(MockResponse::error(400, "The template ID is invalid"))
        .await;
    let sink = EmailJsSink::new(&emailjs_config(mock.send_url()), Duration::from_secs(5))
        .expect("sink");

    let err = sink.deliver(&request()).await.unwrap_err();
    match err {
        SubmissionError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The template ID is invalid");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let mock = MockEmailJs::start().await;
    mock.enqueue_response(MockResponse::default().with_delay(2_000))
        .await;
    let sink = EmailJsSink::new(&emailjs_config(mock.send_url()), Duration::from_millis(100))
        .expect("sink");

    let err = sink.deliver(&request()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let sink = EmailJsSink::new(
        &emailjs_config(format!("http://{}/api/v1.0/email/send", addr)),
        Duration::from_secs(2),
    )
    .expect("sink");

    let err = sink.deliver(&request()).await.unwrap_err();
    assert!(err.to_string().contains(&addr.to_string()));
}
