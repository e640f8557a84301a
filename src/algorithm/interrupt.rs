use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cooperative cancellation hook, polled by the batch driver before each origin.
pub trait Interrupt {
    /// Returns true once the batch should stop
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T> Interrupt for Arc<T>
where
    T: Interrupt + ?Sized,
{
    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}

impl<T> Interrupt for &T
where
    T: Interrupt + ?Sized,
{
    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}

/// Adapts a closure such as a host signal check into an [`Interrupt`]
#[derive(Debug, Clone, Copy)]
pub struct FnInterrupt<F>(pub F);

impl<F> Interrupt for FnInterrupt<F>
where
    F: Fn() -> bool,
{
    fn is_interrupted(&self) -> bool {
        (self.0)()
    }
}

/// Adapts a fallible check such as a host signal poll into an [`Interrupt`].
///
/// The first error the check returns is kept, so the caller can surface it
/// in place of [`Error::Interrupted`](crate::Error::Interrupted).
#[derive(Debug)]
pub struct TryInterrupt<F, E> {
    check: F,
    raised: Mutex<Option<E>>,
}

impl<F, E> TryInterrupt<F, E>
where
    F: Fn() -> Result<(), E>,
{
    pub fn new(check: F) -> Self {
        TryInterrupt {
            check,
            raised: Mutex::new(None),
        }
    }

    /// Error reported by the check, if any; later calls return `None`
    pub fn take_error(&self) -> Option<E> {
        self.raised.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl<F, E> Interrupt for TryInterrupt<F, E>
where
    F: Fn() -> Result<(), E>,
{
    fn is_interrupted(&self) -> bool {
        match (self.check)() {
            Ok(()) => false,
            Err(err) => {
                let mut raised = self.raised.lock().unwrap_or_else(|e| e.into_inner());
                if raised.is_none() {
                    *raised = Some(err);
                }
                true
            }
        }
    }
}
