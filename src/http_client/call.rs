use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::http_client::{
    error::Error, http_client::HttpClient, request::Request, response::Response,
};

/// Anything that represents an in-flight call which can be asked to stop.
#[cfg_attr(test, mockall::automock)]
pub trait Cancellable: Send + Sync {
    fn cancel(&self);
}

/// Handle to a call started with [`spawn_call`].
#[derive(Clone, Debug)]
pub struct CallHandle {
    cancelled: Arc<watch::Sender<bool>>,
}

impl CallHandle {
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

impl Cancellable for CallHandle {
    fn cancel(&self) {
        self.cancelled.send_replace(true);
    }
}

impl Cancellable for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

/// Executes `request` on a background task. Cancelling the returned handle
/// makes the task resolve to [`Error::Cancelled`] unless the response has
/// already arrived.
pub fn spawn_call(
    client: Arc<dyn HttpClient>,
    request: Request,
) -> (CallHandle, JoinHandle<Result<Response, Error>>) {
    let (sender, mut receiver) = watch::channel(false);
    let handle = CallHandle {
        cancelled: Arc::new(sender),
    };

    let task = tokio::spawn(async move {
        if *receiver.borrow() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            result = client.execute(request) => result,
            Ok(()) = async { receiver.wait_for(|cancelled| *cancelled).await.map(|_| ()) } => {
                Err(Error::Cancelled)
            }
        }
    });

    (handle, task)
}

/// Requests cancellation of every call in a snapshot of `calls`, skipping
/// empty slots. Cancellation is best-effort; awaiting the returned handle only
/// tells the caller that every request has been issued.
///
/// # Panics
///
/// Must be called from within a tokio runtime, the cancellations run on a
/// spawned task.
pub fn cancel_calls(calls: &[Option<Arc<dyn Cancellable>>]) -> JoinHandle<()> {
    let snapshot = calls.to_vec();

    tokio::spawn(async move {
        let mut issued = 0;
        for call in snapshot.into_iter().flatten() {
            call.cancel();
            issued += 1;
        }
        debug!("Requested cancellation of {} calls", issued);
    })
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use bytes::Bytes;

    use crate::http_client::{
        call::{Cancellable, MockCancellable, cancel_calls, spawn_call},
        error::Error,
        http_client::{HttpClient, MockHttpClient},
        request::{Request, RequestHeaders},
        response::Response,
    };

    #[tokio::test]
    async fn cancels_every_present_call() {
        let mut first = MockCancellable::new();
        first.expect_cancel().times(1).return_const(());
        let mut second = MockCancellable::new();
        second.expect_cancel().times(1).return_const(());

        let calls: Vec<Option<Arc<dyn Cancellable>>> =
            vec![Some(Arc::new(first)), None, Some(Arc::new(second))];

        cancel_calls(&calls).await.unwrap();
    }

    #[tokio::test]
    async fn cancelling_an_empty_list_completes() {
        cancel_calls(&[]).await.unwrap();
    }

    #[tokio::test]
    async fn works_on_a_snapshot_of_the_calls() {
        let mut mock = MockCancellable::new();
        mock.expect_cancel().times(1).return_const(());

        let mut calls: Vec<Option<Arc<dyn Cancellable>>> = vec![Some(Arc::new(mock))];
        let completion = cancel_calls(&calls);
        calls.clear();

        completion.await.unwrap();
    }

    #[tokio::test]
    async fn spawned_call_resolves_to_the_response() {
        let mut client = MockHttpClient::new();
        client.expect_execute().returning(|_| {
            Ok(Response {
                status: 200,
                headers: RequestHeaders::default(),
                body: Bytes::from_static(b"OK"),
            })
        });

        let client: Arc<dyn HttpClient> = Arc::new(client);
        let (handle, task) = spawn_call(client, Request::get("http://localhost/me"));

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status, 200);
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn call_cancelled_before_it_runs_never_reaches_the_client() {
        let mut client = MockHttpClient::new();
        client.expect_execute().never();

        let client: Arc<dyn HttpClient> = Arc::new(client);
        let (handle, task) = spawn_call(client, Request::get("http://localhost/me"));
        handle.cancel();

        assert!(handle.is_cancelled());
        assert!(matches!(task.await.unwrap(), Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn abort_handles_are_cancellable() {
        let task = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let calls: Vec<Option<Arc<dyn Cancellable>>> = vec![Some(Arc::new(task.abort_handle()))];
        cancel_calls(&calls).await.unwrap();

        assert!(task.await.unwrap_err().is_cancelled());
    }

    #[test]
    #[should_panic]
    fn cancelling_outside_a_runtime_panics() {
        let calls: Vec<Option<Arc<dyn Cancellable>>> = vec![None];

        drop(cancel_calls(&calls));
    }
}
