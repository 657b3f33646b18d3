use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use log::info;
use tokio::task::{AbortHandle, JoinHandle};

use crate::cli::query::{QueryClient, QueryRequest};

/// Display surface for query results. The CLI binds this to stdout; tests
/// bind it to a mock.
#[cfg_attr(test, mockall::automock)]
pub trait QueryOutput: Send + Sync {
    fn render(&self, data: &str);
}

pub struct StdoutOutput;

impl QueryOutput for StdoutOutput {
    fn render(&self, data: &str) {
        println!("{}", data);
    }
}

// Generation counter and abort handle share one lock so bumping the
// generation and rendering against it are mutually exclusive.
struct Inflight {
    generation: u64,
    handle: Option<AbortHandle>,
}

/// Runs query submissions as explicit tasks. Each new submission aborts the
/// previous in-flight one, and a response renders only while its generation
/// is still the newest, so a stale response can never overwrite a newer one.
pub struct Submitter {
    client: Arc<QueryClient>,
    output: Arc<dyn QueryOutput>,
    inflight: Arc<Mutex<Inflight>>,
}

impl Submitter {
    pub fn new(client: QueryClient, output: Arc<dyn QueryOutput>) -> Self {
        Submitter {
            client: Arc::new(client),
            output,
            inflight: Arc::new(Mutex::new(Inflight {
                generation: 0,
                handle: None,
            })),
        }
    }

    /// Starts a submission, superseding any in-flight one.
    pub fn submit(&self, request: QueryRequest) -> JoinHandle<Result<(), anyhow::Error>> {
        let client = self.client.clone();
        let output = self.output.clone();
        let inflight = self.inflight.clone();

        let mut state = self.inflight.lock().unwrap();
        state.generation += 1;
        let submitted = state.generation;
        if let Some(previous) = state.handle.take() {
            info!("Superseding in-flight query submission");
            previous.abort();
        }

        let handle = tokio::spawn(async move {
            let response = client.submit(&request).await?;
            let rendered = response.render()?;

            // No await while the lock is held; render happens inside it so
            // a newer submission cannot slip in between check and render.
            let state = inflight.lock().unwrap();
            if state.generation != submitted {
                bail!("Query submission superseded by a newer one");
            }
            output.render(&rendered);

            Ok(())
        });
        state.handle = Some(handle.abort_handle());

        handle
    }

    /// Submits and waits for the result. Used by the one-shot CLI path.
    pub async fn submit_and_wait(&self, request: QueryRequest) -> Result<(), anyhow::Error> {
        match self.submit(request).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(anyhow!("Query submission superseded")),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(tag: &str) -> QueryRequest {
        QueryRequest::new(tag, tag, Some("iso".to_string()))
    }

    async fn mount_response(server: &MockServer, req: &QueryRequest, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/query"))
            .and(body_json(req))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn renders_data_on_success() {
        let server = MockServer::start().await;
        let req = request("r1");
        mount_response(
            &server,
            &req,
            ResponseTemplate::new(200).set_body_json(json!({"data": "X"})),
        )
        .await;

        let mut output = MockQueryOutput::new();
        output
            .expect_render()
            .withf(|data| data == "X")
            .times(1)
            .return_const(());

        let submitter = Submitter::new(QueryClient::new(server.uri()), Arc::new(output));
        submitter.submit_and_wait(req).await.unwrap();
    }

    #[tokio::test]
    async fn missing_data_leaves_output_untouched() {
        let server = MockServer::start().await;
        let req = request("r1");
        mount_response(
            &server,
            &req,
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})),
        )
        .await;

        let mut output = MockQueryOutput::new();
        output.expect_render().never();

        let submitter = Submitter::new(QueryClient::new(server.uri()), Arc::new(output));
        let err = submitter.submit_and_wait(req).await.unwrap_err();
        assert!(err.to_string().contains("no `data` field"));
    }

    #[tokio::test]
    async fn newer_submission_supersedes_slower_older_one() {
        let server = MockServer::start().await;
        let slow = request("slow");
        let fast = request("fast");

        mount_response(
            &server,
            &slow,
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": "stale"}))
                .set_delay(Duration::from_millis(400)),
        )
        .await;
        mount_response(
            &server,
            &fast,
            ResponseTemplate::new(200).set_body_json(json!({"data": "current"})),
        )
        .await;

        let mut output = MockQueryOutput::new();
        output
            .expect_render()
            .withf(|data| data == "current")
            .times(1)
            .return_const(());

        let submitter = Submitter::new(QueryClient::new(server.uri()), Arc::new(output));

        let first = submitter.submit(slow);
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = submitter.submit(fast);

        second.await.unwrap().unwrap();

        // The first task was aborted; its response never renders even
        // though the server would have answered it later.
        let first_result = first.await;
        assert!(first_result.is_err() && first_result.unwrap_err().is_cancelled());

        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    #[tokio::test]
    async fn back_to_back_submissions_render_only_the_newest() {
        let server = MockServer::start().await;
        let old = request("old");
        let new = request("new");

        mount_response(
            &server,
            &old,
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": "stale"}))
                .set_delay(Duration::from_millis(100)),
        )
        .await;
        mount_response(
            &server,
            &new,
            ResponseTemplate::new(200).set_body_json(json!({"data": "current"})),
        )
        .await;

        let mut output = MockQueryOutput::new();
        // Any render of "stale" would match no expectation and fail the test
        output
            .expect_render()
            .withf(|data| data == "current")
            .times(1)
            .return_const(());

        let submitter = Submitter::new(QueryClient::new(server.uri()), Arc::new(output));

        // No pause between submissions; whichever way the abort races, the
        // generation guard must keep the older response from rendering.
        let first = submitter.submit(old);
        let second = submitter.submit(new);

        second.await.unwrap().unwrap();
        let _ = first.await;

        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}
