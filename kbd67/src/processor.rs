//! Runtime traits for tasks.

/// A task that runs forever once started
pub trait Runnable {
    async fn run(&mut self);
}
