//! Consecutive link requests must not share user, group, or expiry state.

mod helpers;

use securedl_core::types::{LinkRequest, UserRestriction};
use securedl_service::LinkArguments;

#[test]
fn test_absent_feuser_differs_from_public() {
    let service = helpers::service();
    let absent = service
        .link(&LinkArguments::for_file("2:documents/document.pdf"))
        .expect("link");
    let public = service
        .link(&LinkArguments {
            feuser: "public".parse().expect("public"),
            ..LinkArguments::for_file("2:documents/document.pdf")
        })
        .expect("link");

    let absent = helpers::raw_claims(&absent);
    let public = helpers::raw_claims(&public);

    assert!(absent.get("user").is_none(), "unrestricted token carries a user: {absent}");
    assert_eq!(public["user"], 0);
}

#[test]
fn test_user_does_not_leak_into_next_call() {
    let generator = helpers::service().generator().clone();

    let first = generator
        .create_link(
            &LinkRequest::new("2:private/salary.pdf")
                .with_user(UserRestriction::User(7))
                .with_groups(vec![2, 5])
                .with_timeout(Some(30)),
        )
        .expect("first");
    let second = generator
        .create_link(&LinkRequest::new("2:public/flyer.pdf"))
        .expect("second");

    let first = helpers::raw_claims(&first);
    let second = helpers::raw_claims(&second);

    assert_eq!(first["user"], 7);
    assert_eq!(first["groups"], serde_json::json!([2, 5]));
    assert_eq!(second["file"], "2:public/flyer.pdf");
    assert!(second.get("user").is_none(), "user leaked: {second}");
    assert_eq!(second["groups"], serde_json::json!([]));

    let first_exp = first["exp"].as_i64().expect("exp");
    let second_exp = second["exp"].as_i64().expect("exp");
    assert!(second_exp - first_exp >= 3600 - 30 - 5, "timeout leaked");
}

#[test]
fn test_interleaved_calls_across_threads() {
    let generator = helpers::service().generator().clone();

    let handles: Vec<_> = (1..=8)
        .map(|user| {
            let generator = generator.clone();
            std::thread::spawn(move || {
                let url = generator
                    .create(&format!("2:users/{user}.pdf"), Some(user), None, None)
                    .expect("link");
                (user, url)
            })
        })
        .collect();

    for handle in handles {
        let (user, url) = handle.join().expect("thread");
        let claims = helpers::raw_claims(&url);
        assert_eq!(claims["user"], user);
        assert_eq!(claims["file"], format!("2:users/{user}.pdf").as_str());
    }
}

#[test]
fn test_only_contract_fields_in_payload() {
    let service = helpers::service();
    let url = service
        .link(&LinkArguments {
            feuser: UserRestriction::User(1),
            ..LinkArguments::for_file("2:documents/document.pdf")
        })
        .expect("link");

    let claims = helpers::raw_claims(&url);
    let mut keys: Vec<&str> = claims
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, ["exp", "file", "groups", "user"]);
}
