//! User-facing declaration macros: borrowing observer sequences and event tag
//! definitions.



/// Builds an observer sequence which borrows the provided observers instead of
/// taking their ownership. Each slot stores a mutable reference to the caller's
/// variable, so the caller keeps ownership, sees every mutation performed
/// through the sequence, and the borrow checker keeps the referenced observers
/// alive for as long as the sequence (or any observable built from it) is used.
/// This mode is opt-in; the plain constructors own their observers.
///
/// ```
/// use vigil_observable::*;
///
/// # #[derive(Debug,Default)]
/// # struct Counter { count : usize }
/// # #[derive(Clone,Copy,Debug)]
/// # struct Ping;
/// # impl Notify<Ping> for Counter {
/// #     type Failure = std::convert::Infallible;
/// #     fn notify(&mut self, _event:&Ping) -> Result<(),Self::Failure> {
/// #         self.count += 1;
/// #         Ok(())
/// #     }
/// # }
/// let mut counter    = Counter::default();
/// let mut observable = Observable::new(observer_list!(counter));
/// observable.notify(&Ping).unwrap();
/// drop(observable);
/// assert_eq!(counter.count, 1);
/// ```
#[macro_export]
macro_rules! observer_list {
    ( $($observer:expr),* $(,)? ) => {
        ( $( &mut $observer, )* )
    };
}

/// Declares zero-state event tag types. A tag is a unit struct used only to
/// select which notification reaction applies; it carries no data and never
/// persists.
///
/// ```
/// use vigil_observable::*;
///
/// event_tags! {
///     /// Fired when the subject's value changes.
///     ValueChanged,
///     Shutdown,
/// }
///
/// assert_eq!(format!("{:?}", ValueChanged), "ValueChanged");
/// ```
#[macro_export]
macro_rules! event_tags {
    ( $( $(#[$meta:meta])* $vis:vis $name:ident ),* $(,)? ) => { $(
        $(#[$meta])*
        #[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
        $vis struct $name;
    )* };
}
