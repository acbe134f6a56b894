//! Portable bounded channel for `no_std` environments.
//!
//! Built on `critical-section` and `heapless::Deque`, so a UART receive
//! interrupt can push bytes while the main loop drains them. See [`RxQueue`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// The channel was full; carries what could not be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Nothing was queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Queue of raw bytes received from the serial port
pub type RxQueue<const SIZE: usize> = Channel<u8, SIZE>;

/// Fixed-capacity FIFO shared between an interrupt and the main loop
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Empty channel, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the producing side (UART interrupt)
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Handle for the consuming side (main loop)
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Queue a value, handing it back if the channel is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Pop the oldest value
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy, const SIZE: usize> Channel<T, SIZE> {
    /// Send as many values as fit, in one critical section
    ///
    /// Returns `Err(TrySendError(accepted))` with the number of values that
    /// made it in when the channel filled up.
    pub fn try_send_slice(&self, values: &[T]) -> Result<(), TrySendError<usize>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            for (accepted, &value) in values.iter().enumerate() {
                if queue.push_back(value).is_err() {
                    return Err(TrySendError(accepted));
                }
            }
            Ok(())
        })
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producing end of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// See [`Channel::try_send`]
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

impl<T: Copy, const SIZE: usize> Sender<'_, T, SIZE> {
    /// See [`Channel::try_send_slice`]
    pub fn try_send_slice(&self, values: &[T]) -> Result<(), TrySendError<usize>> {
        self.channel.try_send_slice(values)
    }
}

/// Consuming end of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<'a, T, const SIZE: usize> Receiver<'a, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Iterate over queued values until the channel is empty
    ///
    /// Values sent while the iterator is alive are picked up too.
    pub const fn drain(&self) -> Drain<'a, T, SIZE> {
        Drain {
            channel: self.channel,
        }
    }
}

/// Draining iterator returned by [`Receiver::drain`]
pub struct Drain<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Iterator for Drain<'_, T, SIZE> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.channel.try_receive().ok()
    }
}
