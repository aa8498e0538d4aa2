use criterion::criterion_main;
use criterion::{criterion_group, Criterion};
use http::Method;

use tbsign_core::hash::EMPTY_STRING_SHA256;
use tbsign_core::sign::{content_sha256, sign};
use tbsign_core::Credential;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tb1_hmac_sha256");
    let cred = Credential::new("partner-0001", "a-very-long-signing-secret");

    group.bench_function("sign_get", |b| {
        b.iter(|| {
            sign(
                &cred,
                &Method::GET,
                "/accounts/42/history",
                "limit=50&skip=500",
                "Mon, 01 Jan 2024 00:00:00 GMT",
                EMPTY_STRING_SHA256,
            )
        })
    });

    let body = r#"{"amount":1250,"cardId":"card_81","currency":"EUR","reference":"invoice 2024-001"}"#;
    group.bench_function("sign_post", |b| {
        b.iter(|| {
            let hash = content_sha256(&Method::POST, Some(body));
            sign(
                &cred,
                &Method::POST,
                "/payments",
                "",
                "Mon, 01 Jan 2024 00:00:00 GMT",
                &hash,
            )
        })
    });

    group.finish()
}
