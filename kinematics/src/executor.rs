//! Worker pool executing scoped tasks with a completion barrier.

use crossbeam::channel::{Receiver, Sender, unbounded};
use std::marker::PhantomData;
use std::thread;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// A fixed-size thread pool for per-frame batch work.
///
/// Tasks are submitted through a [`Scope`]; dropping the scope blocks until
/// every submitted task has finished, which is the barrier the two-phase
/// update relies on between reflection and integration.
pub struct Executor {
    sender: Sender<Message>,
    workers: Vec<Worker>,
}

enum Message {
    Task(Task),
    Shutdown,
}

struct Worker {
    handle: Option<thread::JoinHandle<()>>,
}

impl Executor {
    /// Creates a new executor with the specified number of worker threads.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "worker pool size must be greater than 0");

        let (sender, receiver) = unbounded();
        let mut workers = Vec::with_capacity(size);

        for _ in 0..size {
            workers.push(Worker::new(receiver.clone()));
        }

        Executor { sender, workers }
    }

    /// Creates a single-threaded executor.
    pub fn single_threaded() -> Self {
        Self::new(1)
    }

    /// Returns the number of worker threads in the pool.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Creates a scope for spawning tasks that borrow non-'static data.
    /// All tasks spawned within the scope have completed by the time this
    /// returns.
    pub fn scope<'env, F, R>(&'env self, f: F) -> R
    where
        F: FnOnce(&Scope<'env>) -> R,
    {
        let scope = Scope {
            executor: self,
            _phantom: PhantomData,
        };

        f(&scope)
    }
}

/// A scope for spawning tasks that can borrow data from the environment.
/// Dropping the scope waits for every spawned task to finish.
pub struct Scope<'env> {
    executor: &'env Executor,
    _phantom: PhantomData<std::cell::Cell<&'env ()>>,
}

impl<'env> Scope<'env> {
    /// Spawns a scoped task.
    pub fn spawn<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'env,
    {
        // Safety: the task is erased to 'static for channel storage, but the
        // scope's Drop impl waits for every queued task before the 'env
        // borrows can end, so no task outlives the data it captures.
        let task: Box<dyn FnOnce() + Send + 'env> = Box::new(f);
        let static_task: Box<dyn FnOnce() + Send + 'static> = unsafe { std::mem::transmute(task) };

        self.executor
            .sender
            .send(Message::Task(static_task))
            .unwrap();
    }
}

impl<'env> Drop for Scope<'env> {
    fn drop(&mut self) {
        // Queue one marker per worker and wait for all of them. Workers pull
        // tasks FIFO, so every task queued before the markers has finished
        // once the last marker reports in.
        let (tx, rx) = crossbeam::channel::bounded::<()>(1);

        for _ in 0..self.executor.workers.len() {
            let tx = tx.clone();
            let task: Task = Box::new(move || {
                let _ = tx.send(());
            });
            self.executor.sender.send(Message::Task(task)).unwrap();
        }

        for _ in 0..self.executor.workers.len() {
            let _ = rx.recv();
        }
    }
}

impl Drop for Executor {
    fn drop(&mut self) {
        for _ in &self.workers {
            self.sender.send(Message::Shutdown).unwrap();
        }

        for worker in &mut self.workers {
            if let Some(handle) = worker.handle.take() {
                handle.join().unwrap();
            }
        }
    }
}

impl Worker {
    fn new(receiver: Receiver<Message>) -> Self {
        let handle = thread::spawn(move || {
            loop {
                match receiver.recv() {
                    Ok(Message::Task(task)) => {
                        task();
                    }
                    Ok(Message::Shutdown) => {
                        break;
                    }
                    Err(_) => {
                        // Channel disconnected, exit
                        break;
                    }
                }
            }
        });

        Worker {
            handle: Some(handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn scope_runs_tasks_with_borrowed_data() {
        let executor = Executor::new(4);
        let mut data = vec![1, 2, 3, 4, 5];

        executor.scope(|s| {
            for item in &mut data {
                s.spawn(move || {
                    *item *= 2;
                });
            }
        });

        assert_eq!(data, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn scope_waits_for_slow_tasks() {
        let executor = Executor::new(1);
        let completed = Arc::new(Mutex::new(vec![]));

        executor.scope(|s| {
            for i in 0..5 {
                let completed = Arc::clone(&completed);
                s.spawn(move || {
                    thread::sleep(Duration::from_millis(10));
                    completed.lock().unwrap().push(i);
                });
            }
        });

        assert_eq!(completed.lock().unwrap().len(), 5);
    }

    #[test]
    fn sequential_scopes_act_as_barriers() {
        let executor = Executor::new(4);
        let mut values = vec![1u64; 64];

        executor.scope(|s| {
            for v in &mut values {
                s.spawn(move || *v += 1);
            }
        });

        // The second scope must observe every write from the first.
        let mut doubled = vec![0u64; 64];
        executor.scope(|s| {
            for (out, v) in doubled.iter_mut().zip(&values) {
                s.spawn(move || *out = v * 2);
            }
        });

        assert!(doubled.iter().all(|&v| v == 4));
    }

    #[test]
    fn graceful_shutdown_finishes_queued_work() {
        let executor = Executor::new(2);
        let completed = Arc::new(Mutex::new(false));

        let completed_clone = Arc::clone(&completed);
        executor.scope(|s| {
            s.spawn(move || {
                thread::sleep(Duration::from_millis(50));
                *completed_clone.lock().unwrap() = true;
            });
        });

        drop(executor);

        assert!(*completed.lock().unwrap());
    }

    #[test]
    fn single_threaded_pool_has_one_worker() {
        assert_eq!(Executor::single_threaded().size(), 1);
    }
}
