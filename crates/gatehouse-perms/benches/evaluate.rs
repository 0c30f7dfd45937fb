use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gatehouse_core::{RoleParams, SimplePrincipal};
use gatehouse_perms::{all_of, any_of, has_role, is_authenticated, Permission};

fn nested_permission() -> Permission {
    any_of([
        has_role("admin"),
        all_of([
            is_authenticated(),
            has_role("org-{org}"),
            any_of((0..16).map(|i| has_role(format!("team-{{team}}-{i}")))),
        ]),
    ])
}

fn bench_evaluate(c: &mut Criterion) {
    let perm = nested_permission();
    let mut params = RoleParams::new();
    params.insert("org".to_string(), "acme".to_string());
    params.insert("team".to_string(), "7".to_string());

    let admin = SimplePrincipal::new("root").with_role("admin");
    let member = SimplePrincipal::new("alice").with_roles(["org-acme", "team-7-15"]);
    let outsider = SimplePrincipal::new("mallory").with_role("org-acme");

    c.bench_function("evaluate/first_branch", |b| {
        b.iter(|| perm.has(Some(&admin), black_box(&params)))
    });
    c.bench_function("evaluate/last_leaf", |b| {
        b.iter(|| perm.has(Some(&member), black_box(&params)))
    });
    c.bench_function("evaluate/denied", |b| {
        b.iter(|| perm.has(Some(&outsider), black_box(&params)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
