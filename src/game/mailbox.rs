/// A single-slot mailbox: each `put()` replaces whatever was there, and
/// `take()` empties the slot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mailbox<T>(Option<T>);

impl<T> Mailbox<T> {
    pub(crate) fn new() -> Mailbox<T> {
        Mailbox(None)
    }

    pub(crate) fn put(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub(crate) fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub(crate) fn clear(&mut self) {
        self.0 = None;
    }
}
