//! End-to-end tests for the anchor tag entry point.

mod helpers;

use securedl_service::LinkArguments;

fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_tag_wraps_relative_link() {
    let service = helpers::service();
    let tag = service
        .tag(
            &LinkArguments::for_file("2:documents/document.pdf"),
            &attrs(&[("class", "download"), ("target", "_blank")]),
            Some("Download PDF"),
        )
        .expect("tag");

    let href = tag
        .strip_prefix("<a href=\"")
        .and_then(|rest| rest.split_once('"'))
        .map(|(href, _)| href)
        .expect("href attribute first");
    helpers::assert_secure_link(href, "", "document.pdf");
    assert!(tag.ends_with("\" class=\"download\" target=\"_blank\">Download PDF</a>"), "{tag}");
}

#[test]
fn test_tag_without_content_is_closed() {
    let service = helpers::service();
    let args = LinkArguments {
        site_identifier: Some("landingpage".to_string()),
        ..LinkArguments::for_file("2:documents/document.pdf")
    };
    let tag = service.tag(&args, &[], None).expect("tag");

    assert!(tag.starts_with("<a href=\"https://landingpage.example/securedl/sdl-"), "{tag}");
    assert!(tag.ends_with("/document.pdf\"></a>"), "{tag}");
}

#[test]
fn test_tag_and_link_share_payload() {
    let service = helpers::service();
    let args = LinkArguments {
        feuser: securedl_core::types::UserRestriction::User(42),
        groups: vec![3],
        ..LinkArguments::for_file("2:documents/document.pdf")
    };
    let url = service.link(&args).expect("link");
    let tag = service.tag(&args, &[], None).expect("tag");
    let href = &tag["<a href=\"".len()..tag.len() - "\"></a>".len()];

    let from_link = helpers::raw_claims(&url);
    let from_tag = helpers::raw_claims(href);
    assert_eq!(from_link["file"], from_tag["file"]);
    assert_eq!(from_link["user"], 42);
    assert_eq!(from_tag["user"], 42);
    assert_eq!(from_tag["groups"], serde_json::json!([3]));
}
