//! Stateful wrappers around a supplied function.
//!
//! [`once`] and [`memoize`] return `FnMut` closures that own their state
//! outright; two closures produced by separate calls never share anything.
//! [`delay`] hands a call to a [`Scheduler`] and returns immediately.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::thread;
use std::time::Duration;

use crate::error::Result;

/// Wraps `func` so it runs at most once.
///
/// The first call runs `func` and caches its result; every later call
/// returns a clone of that result without running anything.
///
/// # Example
///
/// ```
/// use sundry::once;
///
/// let mut runs = 0;
/// let mut init = once(|| {
///     runs += 1;
///     "ready"
/// });
/// assert_eq!(init(), "ready");
/// assert_eq!(init(), "ready");
/// drop(init);
/// assert_eq!(runs, 1);
/// ```
pub fn once<F, R>(func: F) -> impl FnMut() -> R
where
    F: FnOnce() -> R,
    R: Clone,
{
    let mut guard = OnceGuard {
        func: Some(func),
        result: None,
    };
    move || guard.call()
}

struct OnceGuard<F, R> {
    func: Option<F>,
    result: Option<R>,
}

impl<F, R> OnceGuard<F, R>
where
    F: FnOnce() -> R,
    R: Clone,
{
    fn call(&mut self) -> R {
        if let Some(result) = &self.result {
            return result.clone();
        }
        // Only reachable without a function if the first call panicked.
        let func = self
            .func
            .take()
            .expect("once: wrapped function panicked on its first call");
        let result = func();
        self.result = Some(result.clone());
        result
    }
}

/// Wraps a single-argument `func` with a result cache.
///
/// The cache is keyed by the argument's [`Display`] string: an argument
/// whose string form was seen before returns the stored result without
/// calling `func`. Arguments that print identically share one entry.
///
/// # Example
///
/// ```
/// use sundry::memoize;
///
/// let mut calls = 0;
/// let mut square = memoize(|n: u64| {
///     calls += 1;
///     n * n
/// });
/// assert_eq!(square(12), 144);
/// assert_eq!(square(12), 144);
/// drop(square);
/// assert_eq!(calls, 1);
/// ```
pub fn memoize<A, R, F>(func: F) -> impl FnMut(A) -> R
where
    A: Display,
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut cache = MemoCache {
        func,
        results: HashMap::new(),
    };
    move |arg| cache.get(arg)
}

struct MemoCache<F, R> {
    func: F,
    results: HashMap<String, R>,
}

impl<F, R> MemoCache<F, R>
where
    R: Clone,
{
    fn get<A>(&mut self, arg: A) -> R
    where
        A: Display,
        F: FnMut(A) -> R,
    {
        match self.results.entry(arg.to_string()) {
            Entry::Occupied(hit) => hit.get().clone(),
            Entry::Vacant(miss) => {
                log::trace!("memoize: cache miss for {:?}", miss.key());
                miss.insert((self.func)(arg)).clone()
            }
        }
    }
}

/// A deferred task, ready to run once its wait has elapsed.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task later without blocking the caller.
///
/// Implementations guarantee only that a task does not start before its
/// `wait` has elapsed. Scheduled tasks cannot be withdrawn.
pub trait Scheduler {
    /// Arranges for `task` to run once after `wait`.
    fn schedule(&self, wait: Duration, task: Task) -> Result<()>;
}

/// Runs each task on its own named background thread.
///
/// This is the scheduler [`delay`] uses.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    name: String,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self {
            name: "sundry-delay".to_string(),
        }
    }

    /// Names the threads spawned for deferred tasks.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
        log::debug!("scheduling deferred call on '{}' after {:?}", self.name, wait);
        thread::Builder::new().name(self.name.clone()).spawn(move || {
            thread::sleep(wait);
            log::trace!("running deferred call");
            task();
        })?;
        Ok(())
    }
}

/// Calls `func(args)` once, after `wait`, on a background thread.
///
/// Returns as soon as the call is scheduled. The call is never made on
/// the caller's thread and there is no way to cancel it.
///
/// # Example
///
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use sundry::delay;
///
/// let (tx, rx) = mpsc::channel();
/// delay(move |(a, b)| tx.send(format!("{a}{b}")).unwrap(), Duration::from_millis(10), ("a", "b")).unwrap();
/// assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "ab");
/// ```
pub fn delay<F, A>(func: F, wait: Duration, args: A) -> Result<()>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    delay_on(&ThreadScheduler::default(), func, wait, args)
}

/// Like [`delay`], on a caller-supplied [`Scheduler`].
pub fn delay_on<S, F, A>(scheduler: &S, func: F, wait: Duration, args: A) -> Result<()>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule(wait, Box::new(move || func(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Instant;

    #[test]
    fn once_runs_exactly_once() {
        let calls = Cell::new(0);
        let mut init = once(|| {
            calls.set(calls.get() + 1);
            Rc::new(42)
        });

        let first = init();
        let second = init();
        let third = init();

        assert_eq!(calls.get(), 1);
        assert_eq!(*first, 42);
        assert!(Rc::ptr_eq(&first, &second));
        assert!(Rc::ptr_eq(&second, &third));
    }

    #[test]
    fn once_guards_are_independent() {
        let calls = Cell::new(0);
        let bump = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        let mut a = once(bump);
        let mut b = once(bump);
        assert_eq!(a(), 1);
        assert_eq!(b(), 2);
        assert_eq!(a(), 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn memoize_caches_by_argument() {
        let calls = Cell::new(0);
        let mut fib_ish = memoize(|n: u32| {
            calls.set(calls.get() + 1);
            n * 10
        });

        assert_eq!(fib_ish(1), 10);
        assert_eq!(fib_ish(1), 10);
        assert_eq!(calls.get(), 1);

        assert_eq!(fib_ish(2), 20);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn memoize_keys_by_string_form() {
        let calls = Cell::new(0);
        let mut describe = memoize(|s: String| {
            calls.set(calls.get() + 1);
            s.len()
        });
        assert_eq!(describe("abc".to_string()), 3);
        assert_eq!(describe(String::from("abc")), 3);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn memoize_caches_are_independent() {
        let calls = Cell::new(0);
        let double = |n: i32| {
            calls.set(calls.get() + 1);
            n * 2
        };
        let mut a = memoize(double);
        let mut b = memoize(double);
        a(5);
        b(5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn delay_runs_later_with_args() {
        let (tx, rx) = mpsc::channel();
        let wait = Duration::from_millis(50);
        let start = Instant::now();

        delay(
            move |(a, b): (i32, i32)| tx.send((a + b, Instant::now())).unwrap(),
            wait,
            (2, 3),
        )
        .unwrap();

        let (sum, ran_at) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(sum, 5);
        assert!(ran_at.duration_since(start) >= wait);
    }

    #[test]
    fn delay_does_not_block_caller() {
        let (tx, rx) = mpsc::channel::<()>();
        delay(move |()| drop(tx), Duration::from_millis(300), ()).unwrap();
        // The sender is still alive, so nothing has run yet.
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Empty)));
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }

    #[derive(Default)]
    struct RecordingScheduler {
        pending: Mutex<Vec<(Duration, Task)>>,
    }

    impl RecordingScheduler {
        fn run_all(&self) -> Vec<Duration> {
            let pending = std::mem::take(&mut *self.pending.lock().unwrap());
            pending
                .into_iter()
                .map(|(wait, task)| {
                    task();
                    wait
                })
                .collect()
        }
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
            self.pending.lock().unwrap().push((wait, task));
            Ok(())
        }
    }

    #[test]
    fn delay_on_hands_task_to_scheduler() {
        let scheduler = RecordingScheduler::default();
        let (tx, rx) = mpsc::channel();

        delay_on(&scheduler, move |msg| tx.send(msg).unwrap(), Duration::from_secs(1), "hi")
            .unwrap();
        assert!(rx.try_recv().is_err());

        assert_eq!(scheduler.run_all(), [Duration::from_secs(1)]);
        assert_eq!(rx.try_recv().unwrap(), "hi");
    }

    #[test]
    fn thread_scheduler_names_threads() {
        let (tx, rx) = mpsc::channel();
        let scheduler = ThreadScheduler::new().with_name("custom-delay");
        delay_on(
            &scheduler,
            move |()| tx.send(thread::current().name().map(str::to_string)).unwrap(),
            Duration::ZERO,
            (),
        )
        .unwrap();
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap().as_deref(),
            Some("custom-delay")
        );
    }
}
