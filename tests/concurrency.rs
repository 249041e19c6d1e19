//! Concurrency tests: requests are independent and stateless, so parallel
//! identical dispatches must all succeed with identical bodies.

use serde_json::{json, Value};

mod common;
use common::{client, spawn_server, TEST_API_KEY};

#[tokio::test]
async fn test_parallel_dispatches_are_independent() {
    let (addr, shutdown) = spawn_server().await;

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let client = client();
        tasks.push(tokio::spawn(async move {
            let res = client
                .post(format!("http://{addr}/gptImplement"))
                .header("x-api-key", TEST_API_KEY)
                .json(&json!({
                    "action": "createKnowledgeBase",
                    "payload": { "technical": "A", "functional": "B", "operational": "C" }
                }))
                .send()
                .await
                .unwrap();
            (res.status().as_u16(), res.json::<Value>().await.unwrap())
        }));
    }

    let expected = json!({
        "knowledgeBase": {
            "domains": { "technical": "A", "functional": "B", "operational": "C" }
        }
    });

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, expected);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_interleaved_actions_do_not_share_state() {
    let (addr, shutdown) = spawn_server().await;

    // Alternate two different actions concurrently; neither response shape
    // may bleed into the other.
    let mut tasks = Vec::new();
    for i in 0..16 {
        let client = client();
        tasks.push(tokio::spawn(async move {
            let body = if i % 2 == 0 {
                json!({ "action": "troubleshootAPI", "payload": { "errorType": "a" } })
            } else {
                json!({ "action": "optimizePerformance", "payload": { "bottlenecks": ["b"] } })
            };
            let res = client
                .post(format!("http://{addr}/gptImplement"))
                .header("x-api-key", TEST_API_KEY)
                .json(&body)
                .send()
                .await
                .unwrap();
            (i, res.json::<Value>().await.unwrap())
        }));
    }

    for task in tasks {
        let (i, body) = task.await.unwrap();
        if i % 2 == 0 {
            assert!(body.get("troubleshooting").is_some());
            assert!(body.get("optimization").is_none());
        } else {
            assert!(body.get("optimization").is_some());
            assert!(body.get("troubleshooting").is_none());
        }
    }

    shutdown.trigger();
}
