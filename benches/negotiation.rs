//! Capability negotiation benchmark suite.
//!
//! Benchmarks full New Session processing as the number of `firstMatch`
//! alternatives grows, with the matching candidate placed last.
//!
//! Run with: cargo bench --bench negotiation
//! Results saved to: target/criterion/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use webdriver_capabilities::{ImplementationCapabilities, Negotiator};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const CANDIDATE_COUNTS: &[usize] = &[1, 8, 64];

// ============================================================================
// Helpers
// ============================================================================

fn negotiator() -> Negotiator {
    Negotiator::new(
        ImplementationCapabilities::builder()
            .browser_name("ladybird")
            .browser_version("1.0")
            .platform_name("linux")
            .build()
            .expect("valid implementation"),
    )
}

fn parameters(candidates: usize) -> Value {
    let mut first_match: Vec<Value> = (1..candidates)
        .map(|i| json!({"browserName": format!("browser-{i}")}))
        .collect();
    first_match.push(json!({"browserName": "ladybird"}));

    json!({
        "capabilities": {
            "alwaysMatch": {
                "acceptInsecureCerts": true,
                "pageLoadStrategy": "eager",
                "timeouts": {"implicit": 100}
            },
            "firstMatch": first_match
        }
    })
}

// ============================================================================
// Benchmark: Process Capabilities
// ============================================================================

fn bench_process(c: &mut Criterion) {
    let negotiator = negotiator();
    let mut group = c.benchmark_group("process_capabilities");

    for &count in CANDIDATE_COUNTS {
        let parameters = parameters(count);
        group.bench_with_input(BenchmarkId::new("first_match", count), &parameters, |b, p| {
            b.iter(|| negotiator.process(p).expect("negotiated"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
