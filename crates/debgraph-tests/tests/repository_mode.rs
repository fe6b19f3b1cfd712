//! End-to-end runs over Debian package indices, from mirrors and over HTTP

use anyhow::Result;
use debgraph_lib::networking::AccessError;
use debgraph_lib::primitives::DebgraphError;
use debgraph_lib::testing::gzip;
use debgraph_tests::fixtures::{ALTERNATIVES_INDEX, NOBLE_INDEX};
use debgraph_tests::{GraphConfigBuilder, TestEnvironment};
use mockito::Server;

const NOBLE_PATH: &str = "/ubuntu/dists/noble/main/binary-amd64/Packages.gz";

fn deps(report: &debgraph_lib::Report, node: &str) -> Vec<String> {
    report.closure.dependencies(node).unwrap_or_default().to_vec()
}

#[tokio::test]
async fn local_mirror_closure() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_noble_mirror(NOBLE_INDEX)?;

    let report = env
        .run(
            &GraphConfigBuilder::repository("curl", "8.5.0-2ubuntu10", &mirror.display().to_string())
                .show_load_order(),
        )
        .await??;

    assert_eq!(report.root, "curl-8.5.0-2ubuntu10");
    assert_eq!(
        deps(&report, "curl-8.5.0-2ubuntu10"),
        vec!["libc6", "libcurl4t64", "zlib1g"]
    );
    // relation names never match name-version identifiers
    assert_eq!(report.closure.len(), 4);
    assert_eq!(report.closure.unresolved_count(), 3);
    assert_eq!(
        report.load_order.unwrap().last().map(String::as_str),
        Some("curl-8.5.0-2ubuntu10")
    );
    Ok(())
}

#[tokio::test]
async fn alternatives_keep_first_candidate() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_noble_mirror(ALTERNATIVES_INDEX)?;

    let report = env
        .run(&GraphConfigBuilder::repository(
            "app",
            "1.0",
            &mirror.display().to_string(),
        ))
        .await??;

    assert_eq!(deps(&report, "app-1.0"), vec!["libfoo", "libbaz"]);
    Ok(())
}

#[tokio::test]
async fn filter_applies_while_parsing() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_noble_mirror(NOBLE_INDEX)?;

    let report = env
        .run(
            &GraphConfigBuilder::repository("curl", "8.5.0-2ubuntu10", &mirror.display().to_string())
                .filter("libc"),
        )
        .await??;

    // libc6 and libcurl4t64 both contain the filter
    assert_eq!(deps(&report, "curl-8.5.0-2ubuntu10"), vec!["zlib1g"]);
    Ok(())
}

#[tokio::test]
async fn filtered_root_stanza_is_not_found() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_noble_mirror(NOBLE_INDEX)?;

    let err = env
        .run(
            &GraphConfigBuilder::repository("curl", "8.5.0-2ubuntu10", &mirror.display().to_string())
                .filter("curl"),
        )
        .await?
        .unwrap_err();

    assert!(matches!(err, DebgraphError::RootNotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn stanza_without_version_is_not_a_root() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_noble_mirror(NOBLE_INDEX)?;

    let err = env
        .run(&GraphConfigBuilder::repository(
            "broken",
            "stanza",
            &mirror.display().to_string(),
        ))
        .await?
        .unwrap_err();

    assert_eq!(err.to_string(), "Root package 'broken-stanza' not found");
    Ok(())
}

#[tokio::test]
async fn custom_coordinates_select_index() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mirror = env.write_mirror("ports", "jammy", "universe", "arm64", ALTERNATIVES_INDEX)?;

    let report = env
        .run(
            &GraphConfigBuilder::repository("app", "1.0", &format!("file://{}/", mirror.display()))
                .string("distribution", "jammy")
                .string("component", "universe")
                .string("architecture", "arm64"),
        )
        .await??;

    assert_eq!(report.closure.len(), 3);
    Ok(())
}

#[tokio::test]
async fn missing_mirror_index_is_access_error() -> Result<()> {
    let env = TestEnvironment::new()?;

    let err = env
        .run(&GraphConfigBuilder::repository(
            "curl",
            "1",
            &env.path().join("empty").display().to_string(),
        ))
        .await?
        .unwrap_err();

    assert!(matches!(err, DebgraphError::Access(AccessError::ReadFailed { .. })));
    Ok(())
}

#[tokio::test]
async fn http_repository_closure() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", NOBLE_PATH)
        .with_status(200)
        .with_header("content-type", "application/x-gzip")
        .with_body(gzip(NOBLE_INDEX)?)
        .expect(1)
        .create_async()
        .await;

    let report = env
        .run(&GraphConfigBuilder::repository(
            "libcurl4t64",
            "8.5.0-2ubuntu10",
            &format!("{}/ubuntu/", server.url()),
        ))
        .await??;

    assert_eq!(
        deps(&report, "libcurl4t64-8.5.0-2ubuntu10"),
        vec!["libbrotli1", "libc6", "libgssapi-krb5-2", "libssl3t64", "zlib1g"]
    );
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn http_error_status_is_access_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", NOBLE_PATH)
        .with_status(500)
        .create_async()
        .await;

    let err = env
        .run(&GraphConfigBuilder::repository(
            "curl",
            "8.5.0-2ubuntu10",
            &format!("{}/ubuntu", server.url()),
        ))
        .await?
        .unwrap_err();

    assert!(matches!(
        err,
        DebgraphError::Access(AccessError::Status { status: 500, .. })
    ));
    Ok(())
}
