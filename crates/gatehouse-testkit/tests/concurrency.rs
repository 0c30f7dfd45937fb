//! A single permission shared across threads and tasks.

use std::sync::Arc;
use std::thread;

use gatehouse_perms::Permission;
use gatehouse_testkit::{params, principal, TestFixture};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn permission_is_send_and_sync() {
    assert_send_sync::<Permission>();
}

#[test]
fn concurrent_evaluation_from_threads() {
    let fixture = Arc::new(TestFixture::new());
    let perm = Arc::new(fixture.team_permission());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let fixture = Arc::clone(&fixture);
            let perm = Arc::clone(&perm);
            thread::spawn(move || {
                let team = if i % 2 == 0 { "7" } else { "8" };
                let request = params(&[("org", "acme"), ("team", team)]);
                let mut outcomes = Vec::new();
                for _ in 0..1000 {
                    let evaluation = perm.has(Some(&fixture.member), &request).unwrap();
                    outcomes.push(evaluation.is_matched());
                }
                (team, outcomes)
            })
        })
        .collect();

    for handle in handles {
        let (team, outcomes) = handle.join().unwrap();
        let expected = team == "7";
        assert!(outcomes.iter().all(|&granted| granted == expected));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_evaluation_from_tasks() {
    let perm = Arc::new(TestFixture::new().team_permission());

    let mut tasks = Vec::new();
    for i in 0..32 {
        let perm = Arc::clone(&perm);
        tasks.push(tokio::spawn(async move {
            let p = if i % 3 == 0 {
                principal("admin", &["admin"])
            } else {
                principal("outsider", &["org-acme"])
            };
            let request = params(&[("org", "acme"), ("team", "7")]);
            let witness = perm
                .has(Some(&p), &request)
                .unwrap()
                .witness()
                .map(|w| w.to_string());
            (i, witness)
        }));
    }

    for task in tasks {
        let (i, witness) = task.await.unwrap();
        if i % 3 == 0 {
            assert_eq!(witness.as_deref(), Some("HAS_ROLE[admin]"));
        } else {
            assert_eq!(witness, None);
        }
    }
}
