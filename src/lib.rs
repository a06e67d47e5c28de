#![doc = r##"
VECTRIG — a single-shot trigger client for a remote vectorization service.

This crate powers the `vectrig` CLI and can be embedded in other programs.
One invocation performs one trigger operation: normalize the client list,
assemble the JSON body, POST it to `{serviceUrl}/vectorize` with a 30-second
timeout, and classify the received status (exactly 200 is success). There is
no retry, no pooling, no streaming, and no interpretation of the response
body beyond logging it.

Quick start
-----------
```rust,no_run
use vectrig::{normalize_clients, trigger, ConsoleLog, TriggerRequest};

fn main() -> vectrig::Result<()> {
    let clients = normalize_clients(r#"["client1", "client2"]"#)?;
    let request = TriggerRequest {
        service_url: "http://localhost:5001".to_string(),
        dataset_url: "http://data/metadata.json".to_string(),
        job_id: "job-42".to_string(),
        clients,
        study_id: "study-7".to_string(),
    };

    let log = ConsoleLog::new("my-embedding-service");
    let response = trigger(&request, &log)?;
    println!("succeeded: {}", response.is_success());
    Ok(())
}
```

Client-list normalization
-------------------------
Shells frequently strip the quotes out of a JSON array before the process
sees it, so [`normalize_clients`] accepts three input shapes in strict
order: a strict JSON array of strings, a bracketed comma-separated
pseudo-list, and a single bare value. See [`clients`] for the exact rules
and the documented comma-splitting limitation of the pseudo-list path.

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to distinguish
normalization failures from transport failures. A received non-200 response
is not an `Error` — it is a [`TriggerResponse`] that classifies as failure.

Useful modules
--------------
- [`api`] — the end-to-end trigger entrypoint.
- [`clients`] — client-list normalization.
- [`request`] — the `TriggerRequest` entity and wire body.
- [`transport`] — the single blocking POST and its timeout.
- [`logging`] — the `ActionLog` collaborator and its two implementations.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod clients;
pub mod error;
pub mod logging;
pub mod request;
pub mod transport;

// Curated public API surface
pub use api::trigger;
pub use clients::{NormalizeError, SUPPORTED_FORMATS, normalize_clients};
pub use error::{Error, Result};
pub use logging::{ActionLog, ConsoleLog, ServiceLog};
pub use request::{TriggerBody, TriggerRequest, VECTORIZE_PATH};
pub use transport::{REQUEST_TIMEOUT, TriggerResponse};
