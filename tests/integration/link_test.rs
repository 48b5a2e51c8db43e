//! End-to-end tests for the URL entry point.

mod helpers;

use serde_json::json;

use securedl_core::types::{FileHandle, FileReference, StoredFile, WrappedReference};
use securedl_service::LinkArguments;

#[test]
fn test_relative_link_for_identifier() {
    let service = helpers::service();
    let url = service
        .link(&LinkArguments::for_file("2:documents/document.pdf"))
        .expect("link");

    helpers::assert_secure_link(&url, "", "document.pdf");
}

#[test]
fn test_absolute_link_for_site() {
    let service = helpers::service();
    let args = LinkArguments {
        site_identifier: Some("landingpage".to_string()),
        ..LinkArguments::for_file("2:documents/document.pdf")
    };
    let url = service.link(&args).expect("link");

    helpers::assert_secure_link(&url, "https://landingpage.example", "document.pdf");
}

#[test]
fn test_non_default_port_kept() {
    let service = helpers::service();
    let args = LinkArguments {
        site_identifier: Some("intranet".to_string()),
        ..LinkArguments::for_file("1:reports/q3.xlsx")
    };
    let url = service.link(&args).expect("link");

    helpers::assert_secure_link(&url, "http://intranet.example:8080", "q3.xlsx");
}

#[test]
fn test_null_file_renders_nothing() {
    let service = helpers::service();
    let args = LinkArguments::from_map(
        json!({ "file": null, "feuser": "public", "siteIdentifier": "landingpage" })
            .as_object()
            .expect("object"),
    )
    .expect("args");

    assert_eq!(service.link(&args).expect("link"), "");
    assert_eq!(service.tag(&args, &[], Some("Download")).expect("tag"), "");
}

#[test]
fn test_unsupported_and_empty_file_render_nothing() {
    let service = helpers::service();
    for file in [json!(17), json!(true), json!({ "name": "a.pdf" }), json!("")] {
        let args = LinkArguments::from_map(json!({ "file": file }).as_object().expect("object"))
            .expect("args");
        assert_eq!(service.link(&args).expect("link"), "", "file = {file}");
    }
}

#[test]
fn test_every_handle_signs_combined_identifier() {
    let service = helpers::service();
    let stored = StoredFile::new(2, "documents/document.pdf");
    let reference = FileReference {
        uid: 21,
        title: None,
        original: stored.clone(),
    };
    let handles = [
        FileHandle::Terminal(stored.clone()),
        FileHandle::Direct(reference.clone()),
        FileHandle::Wrapped(WrappedReference {
            uid: 5,
            reference,
        }),
    ];

    for handle in handles {
        let url = service.link(&LinkArguments::for_file(handle)).expect("link");
        helpers::assert_secure_link(&url, "", "document.pdf");
        assert_eq!(
            helpers::raw_claims(&url)["file"],
            stored.combined_identifier().as_str()
        );
    }
}

#[test]
fn test_handle_from_template_json() {
    let service = helpers::service();
    let args = LinkArguments::from_map(
        json!({
            "file": {
                "type": "direct",
                "uid": 3,
                "original": { "storage_id": 1, "identifier": "user_upload/contract.pdf" }
            },
            "timeout": "90"
        })
        .as_object()
        .expect("object"),
    )
    .expect("args");

    let url = service.link(&args).expect("link");
    let claims = helpers::raw_claims(&url);
    assert_eq!(claims["file"], "1:user_upload/contract.pdf");

    let exp = claims["exp"].as_i64().expect("exp");
    let now = now_seconds();
    assert!(exp > now && exp <= now + 90, "exp {exp} not within 90s of {now}");
}

#[test]
fn test_failed_site_lookup_equals_relative_link() {
    let args = LinkArguments {
        site_identifier: Some("landingpage".to_string()),
        ..LinkArguments::for_file("2:documents/document.pdf")
    };
    let with_site = helpers::service_with_failing_sites()
        .link(&args)
        .expect("link");
    let unknown_site = helpers::service()
        .link(&LinkArguments {
            site_identifier: Some("does-not-exist".to_string()),
            ..args.clone()
        })
        .expect("link");

    helpers::assert_secure_link(&with_site, "", "document.pdf");
    helpers::assert_secure_link(&unknown_site, "", "document.pdf");
}

#[test]
fn test_signing_errors_are_visible() {
    let mut config = helpers::test_config();
    config.signing.jwt_secret.clear();
    let service = securedl_service::SecureDownloadService::from_config(&config);

    let err = service
        .link(&LinkArguments::for_file("2:documents/document.pdf"))
        .expect_err("unsigned link must fail");
    assert_eq!(err.kind, securedl_core::error::ErrorKind::Configuration);

    let err = helpers::service()
        .link(&LinkArguments {
            timeout: Some(0),
            ..LinkArguments::for_file("2:documents/document.pdf")
        })
        .expect_err("zero timeout must fail");
    assert_eq!(err.kind, securedl_core::error::ErrorKind::Validation);
}

fn now_seconds() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}
