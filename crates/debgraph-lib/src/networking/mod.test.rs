use super::*;
use crate::testing::{SAMPLE_INDEX, TempDirFixture, gzip};
use mockito::Server;

const INDEX_PATH: &str = "dists/noble/main/binary-amd64/Packages.gz";

fn client() -> IndexClient {
    IndexClient::new(&NetworkingConfig::default()).unwrap()
}

#[test]
fn test_resolve_http_base() {
    assert_eq!(
        IndexLocation::resolve("http://archive.ubuntu.com/ubuntu//", INDEX_PATH),
        IndexLocation::Remote(format!("http://archive.ubuntu.com/ubuntu/{INDEX_PATH}"))
    );
    assert!(matches!(
        IndexLocation::resolve("https://mirror.example/debian", INDEX_PATH),
        IndexLocation::Remote(_)
    ));
}

#[test]
fn test_resolve_local_bases() {
    assert_eq!(
        IndexLocation::resolve("/srv/mirror/", INDEX_PATH),
        IndexLocation::Local(Path::new("/srv/mirror").join(INDEX_PATH))
    );
    assert_eq!(
        IndexLocation::resolve("file:///srv/mirror", INDEX_PATH),
        IndexLocation::Local(Path::new("/srv/mirror").join(INDEX_PATH))
    );
    assert_eq!(
        IndexLocation::resolve("mirror", INDEX_PATH),
        IndexLocation::Local(Path::new("mirror").join(INDEX_PATH))
    );
}

#[test]
fn test_gunzip_round_trip() {
    let compressed = gzip(SAMPLE_INDEX).unwrap();

    assert_eq!(gunzip(&compressed, "fixture").unwrap(), SAMPLE_INDEX);
}

#[test]
fn test_gunzip_rejects_plain_text() {
    let err = gunzip(b"Package: a\n", "plain.txt").unwrap_err();

    assert!(matches!(err, AccessError::Decompress { ref origin, .. } if origin == "plain.txt"));
}

#[test]
fn test_read_test_graph() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_file("graph.txt", "a: b\n").unwrap();

    assert_eq!(read_test_graph(&path).unwrap(), "a: b\n");
}

#[test]
fn test_read_missing_test_graph() {
    let err = read_test_graph(Path::new("/nonexistent/graph.txt")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Test graph file not found: /nonexistent/graph.txt"
    );
}

#[tokio::test]
async fn test_fetch_remote_index() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/ubuntu/{INDEX_PATH}").as_str())
        .with_status(200)
        .with_header("content-type", "application/gzip")
        .with_body(gzip(SAMPLE_INDEX).unwrap())
        .create_async()
        .await;

    let location = IndexLocation::resolve(&format!("{}/ubuntu/", server.url()), INDEX_PATH);
    let text = client().fetch_index(&location).await.unwrap();

    assert_eq!(text, SAMPLE_INDEX);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_remote_index_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/{INDEX_PATH}").as_str())
        .with_status(404)
        .create_async()
        .await;

    let location = IndexLocation::resolve(&server.url(), INDEX_PATH);
    let err = client().fetch_index(&location).await.unwrap_err();

    assert!(matches!(err, AccessError::Status { status: 404, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_remote_index_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/{INDEX_PATH}").as_str())
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let location = IndexLocation::resolve(&server.url(), INDEX_PATH);
    assert!(client().fetch_index(&location).await.is_err());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_remote_corrupt_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", format!("/{INDEX_PATH}").as_str())
        .with_status(200)
        .with_body("not gzip")
        .create_async()
        .await;

    let location = IndexLocation::resolve(&server.url(), INDEX_PATH);
    let err = client().fetch_index(&location).await.unwrap_err();

    assert!(matches!(err, AccessError::Decompress { .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    let location = IndexLocation::Remote(format!("http://127.0.0.1:1/{INDEX_PATH}"));

    let err = client().fetch_index(&location).await.unwrap_err();

    assert!(matches!(err, AccessError::Http { .. }));
}

#[tokio::test]
async fn test_fetch_local_mirror() {
    let fixture = TempDirFixture::new().unwrap();
    let root = fixture
        .write_mirror("mirror", INDEX_PATH, SAMPLE_INDEX)
        .unwrap();

    let location = IndexLocation::resolve(&root.display().to_string(), INDEX_PATH);
    let text = client().fetch_index(&location).await.unwrap();

    assert_eq!(text, SAMPLE_INDEX);
}

#[tokio::test]
async fn test_fetch_missing_local_mirror() {
    let location = IndexLocation::Local(PathBuf::from("/nonexistent/mirror/Packages.gz"));

    let err = client().fetch_index(&location).await.unwrap_err();

    assert!(matches!(err, AccessError::ReadFailed { .. }));
}
