// tests/http_source.rs
//
// HttpSource against a throwaway local server: status mapping, transport
// failures, timeouts.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use ctr_verify::config::options::SourceConfig;
use ctr_verify::core::{DocumentSource, HttpSource};
use ctr_verify::error::FetchError;
use ctr_verify::verify::{Code, Verifier};

/// Answer exactly one request with `status` and `body`; returns the base URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    format!("http://{addr}/ImprimeCTR.aspx?id=")
}

fn source(base_url: String, timeout: Duration) -> HttpSource {
    let cfg = SourceConfig { base_url, timeout, ..SourceConfig::default() };
    HttpSource::new(&cfg).unwrap()
}

fn code() -> Code {
    Code::parse("12345678").unwrap()
}

#[test]
fn locate_appends_code() {
    let src = source("http://host/x?id=".to_string(), Duration::from_secs(1));
    assert_eq!(src.locate(&code()), "http://host/x?id=12345678");
}

#[test]
fn ok_returns_body() {
    let src = source(serve_once("200 OK", "<p>Envio: 01/02/2024</p>"), Duration::from_secs(5));
    assert_eq!(src.fetch(&code()).unwrap(), "<p>Envio: 01/02/2024</p>");
}

#[test]
fn missing_and_gone_are_not_found() {
    for status in ["404 Not Found", "410 Gone"] {
        let src = source(serve_once(status, "nope"), Duration::from_secs(5));
        assert_eq!(src.fetch(&code()), Err(FetchError::NotFound), "status {status}");
    }
}

#[test]
fn other_statuses_are_unavailable() {
    for status in ["500 Internal Server Error", "503 Service Unavailable", "403 Forbidden"] {
        let src = source(serve_once(status, "err"), Duration::from_secs(5));
        match src.fetch(&code()) {
            Err(FetchError::Unavailable(msg)) => {
                let num = &status[..3];
                assert!(msg.contains(num), "{msg} should mention {num}");
            }
            other => panic!("{status}: unexpected {other:?}"),
        }
    }
}

#[test]
fn refused_connection_is_unavailable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }; // listener dropped: nothing listens there now
    let src = source(format!("http://{addr}/?id="), Duration::from_secs(5));
    assert!(matches!(src.fetch(&code()), Err(FetchError::Unavailable(_))));
}

#[test]
fn slow_server_times_out_as_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(3));
        }
    });

    let src = source(format!("http://{addr}/?id="), Duration::from_millis(300));
    match src.fetch(&code()) {
        Err(FetchError::Unavailable(msg)) => assert!(msg.starts_with("timeout"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn verifier_over_http_end_to_end() {
    let page = "<html><body><p>Data de Envio: 03/04/2025</p>\
                <table><tr><td>Classe</td><td>IIA</td></tr></table></body></html>";
    let v = Verifier::new(source(serve_once("200 OK", page), Duration::from_secs(5)));
    let x = v.lookup("12345678").unwrap();
    assert_eq!(x.date(), "03/04/2025");
    assert_eq!(x.classification(), "IIA");
    assert!(x.url.ends_with("?id=12345678"));
}
