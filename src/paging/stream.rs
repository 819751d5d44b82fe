//! Async flattening stream and push subscription

use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt, TryStreamExt};
use log::debug;
use tokio::sync::mpsc;

use crate::error::{ArmError, Result};

use super::cursor::{EnumerationCursor, Step};
use super::page::Page;
use super::source::{PageSource, SingleScope};

/// Drives one cursor against async sources, one fetch at a time
struct Driver<G, I>
where
    I: PageSource,
{
    scopes: Arc<G>,
    items: Arc<I>,
    cursor: EnumerationCursor<I::Scope, I::Item>,
    cancelled: Arc<AtomicBool>,
}

async fn list_scopes<G: PageSource<Scope = ()>>(
    scopes: &G,
    token: Option<String>,
) -> Result<Page<G::Item>> {
    match token {
        None => {
            debug!("Fetching first page of scopes");
            scopes.fetch_first(&()).await
        }
        Some(token) => {
            debug!("Fetching next page of scopes");
            scopes.fetch_next(&(), &token).await
        }
    }
}

async fn list_items<I: PageSource>(
    items: &I,
    scope: &I::Scope,
    token: Option<String>,
) -> Result<Page<I::Item>> {
    match token {
        None => {
            debug!("Fetching first page of items for scope {:?}", scope);
            items.fetch_first(scope).await
        }
        Some(token) => {
            debug!("Fetching next page of items for scope {:?}", scope);
            items.fetch_next(scope, &token).await
        }
    }
}

impl<G, I> Driver<G, I>
where
    G: PageSource<Scope = (), Item = I::Scope>,
    I: PageSource,
{
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Next item, or `None` once the cursor is done or the stream was cancelled.
    ///
    /// Cancellation is checked before every step, so a fetch already awaited
    /// here runs to completion but its page is dropped and nothing follows it.
    async fn next_item(&mut self) -> Result<Option<I::Item>> {
        loop {
            if self.is_cancelled() {
                debug!("Stream cancelled, no further fetches");
                return Ok(None);
            }
            match self.cursor.advance() {
                Step::Yield(item) => return Ok(Some(item)),
                Step::Done => return Ok(None),
                Step::ListScopes(token) => match list_scopes(self.scopes.as_ref(), token).await {
                    Ok(page) => self.cursor.fill_scopes(page),
                    Err(_) if self.is_cancelled() => return Ok(None),
                    Err(e) => {
                        debug!("Scope listing failed, ending stream: {}", e);
                        self.cursor.fail();
                        return Err(e);
                    }
                },
                Step::ListItems(scope, token) => {
                    match list_items(self.items.as_ref(), &scope, token).await {
                        Ok(page) => {
                            debug!("Scope {:?} returned {} items", scope, page.len());
                            self.cursor.fill_items(page)
                        }
                        Err(_) if self.is_cancelled() => return Ok(None),
                        Err(e) => {
                            debug!("Item listing failed for scope {:?}: {}", scope, e);
                            self.cursor.fail();
                            return Err(e);
                        }
                    }
                }
            }
        }
    }
}

/// Cancels the stream it was taken from.
///
/// A fetch already in flight is allowed to complete and its items are
/// discarded. Nothing is fetched afterwards; the stream just ends.
#[derive(Clone, Debug, Default)]
pub struct Canceller(Arc<AtomicBool>);

impl Canceller {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Lazy async stream of items spanning every page of every scope.
///
/// Scopes are drained one at a time and a page is requested only when the
/// consumer polls past the previous one, so a stream never has more than one
/// fetch in flight and emits items in the same order as [`super::FlatIter`].
/// The first error is emitted once and ends the stream.
pub struct FlatStream<T> {
    inner: BoxStream<'static, Result<T>>,
    canceller: Canceller,
}

impl<T: Send + 'static> FlatStream<T> {
    fn from_driver<G, I>(driver: Driver<G, I>, canceller: Canceller) -> Self
    where
        G: PageSource<Scope = (), Item = I::Scope> + 'static,
        I: PageSource<Item = T> + 'static,
        I::Scope: 'static,
    {
        let unfolded = stream::try_unfold(driver, |mut driver| async move {
            let next = driver.next_item().await?;
            Ok::<_, ArmError>(next.map(|item| (item, driver)))
        });
        Self {
            inner: unfolded.boxed(),
            canceller,
        }
    }

    /// Enumerate all scopes listed by `scopes`, then the items of each
    pub fn federated<G, I>(scopes: Arc<G>, items: Arc<I>) -> Self
    where
        G: PageSource<Scope = (), Item = I::Scope> + 'static,
        I: PageSource<Item = T> + 'static,
        I::Scope: 'static,
    {
        let canceller = Canceller::default();
        Self::from_driver(
            Driver {
                scopes,
                items,
                cursor: EnumerationCursor::federated(),
                cancelled: Arc::clone(&canceller.0),
            },
            canceller,
        )
    }

    /// Enumerate the items of one known scope
    pub fn for_scope<I>(items: Arc<I>, scope: I::Scope) -> Self
    where
        I: PageSource<Item = T> + 'static,
        I::Scope: 'static,
    {
        let canceller = Canceller::default();
        Self::from_driver(
            Driver {
                scopes: Arc::new(SingleScope::default()),
                items,
                cursor: EnumerationCursor::for_scope(scope),
                cancelled: Arc::clone(&canceller.0),
            },
            canceller,
        )
    }

    /// A stream that yields `error` once without touching any source
    pub(crate) fn failed(error: ArmError) -> Self {
        Self {
            inner: stream::once(async move { Err(error) }).boxed(),
            canceller: Canceller::default(),
        }
    }

    /// Handle that cancels this stream from elsewhere
    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }

    /// Cancel this stream
    pub fn cancel(&self) {
        self.canceller.cancel();
    }

    /// Transform every item, keeping order, errors and cancellation
    pub fn map<U, F>(self, f: F) -> FlatStream<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        FlatStream {
            inner: self.inner.map_ok(f).boxed(),
            canceller: self.canceller,
        }
    }

    /// Drain into a `Vec`, stopping at the first error
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }

    /// Run the stream on a spawned task and push its items into a channel.
    ///
    /// Must be called inside a tokio runtime. The producer stops issuing
    /// fetches once the subscription is cancelled or dropped; a fetch in
    /// flight at that moment completes, but nothing more is delivered.
    pub fn subscribe(self, buffer: usize) -> Subscription<T> {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        let canceller = self.canceller();
        let mut stream = self;

        tokio::spawn(async move {
            while let Some(item) = stream.next().await {
                if tx.send(item).await.is_err() {
                    debug!("Subscriber went away, stopping producer");
                    break;
                }
            }
        });

        Subscription {
            rx,
            canceller,
            cancelled: false,
        }
    }
}

impl<T> Stream for FlatStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Push-side handle of a subscribed [`FlatStream`]
pub struct Subscription<T> {
    rx: mpsc::Receiver<Result<T>>,
    canceller: Canceller,
    cancelled: bool,
}

impl<T> Subscription<T> {
    /// Next pushed item; `None` once the stream completed, failed or was cancelled
    pub async fn recv(&mut self) -> Option<Result<T>> {
        if self.cancelled {
            return None;
        }
        self.rx.recv().await
    }

    /// Stop delivery. Items still queued are discarded.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.canceller.cancel();
        self.rx.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.canceller.cancel();
    }
}
