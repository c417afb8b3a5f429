//! Binary that runs a fixed set of comparisons on the reference map and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `route_fixture`
//!
//! Output: key=value lines on stdout; logs (if `RUST_LOG` asks for them) go
//! to stderr so stdout stays byte-stable.

use pathlab_harness::{compare, ComparisonConfig};
use pathlab_kernel::dataset::romania;
use tracing_subscriber::EnvFilter;

const REQUESTS: [(&str, &str); 4] = [
    ("Arad", "Bucharest"),
    ("Neamt", "Timisoara"),
    ("Oradea", "Eforie"),
    ("Arad", "Arad"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let graph = romania();
    let fingerprint = graph.fingerprint().expect("graph fingerprint failed");
    println!("graph_fingerprint={fingerprint}");

    let config = ComparisonConfig::all_parallel();
    for (start, goal) in REQUESTS {
        let report = compare(&graph, start, goal, &config).expect("comparison failed");
        let key = format!("{start}->{goal}");
        println!("{key}.report_digest={}", report.digest);
        for result in &report.results {
            let tag = result.algorithm.tag();
            let digest = result
                .deterministic_digest()
                .expect("result digest failed");
            println!("{key}.{tag}.path={}", result.path.join("|"));
            println!("{key}.{tag}.distance={}", result.distance);
            println!("{key}.{tag}.nodes_expanded={}", result.nodes_expanded);
            println!("{key}.{tag}.digest={digest}");
        }
    }
}
