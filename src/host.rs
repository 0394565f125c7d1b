//! Host application signalling
//!
//! When the ledger is embedded in a host (a chat mini-app, a desktop shell),
//! the host wants to know when the budget is ready for input and when it has
//! been reset. Running without a host must behave exactly the same.

use tracing::info;

/// Receiver for readiness changes
pub trait HostSignal {
    /// A budget has been set up and expenses can be entered
    fn ready(&self);

    /// The budget was reset; input is no longer possible
    fn not_ready(&self);
}

/// No host attached
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHost;

impl HostSignal for NoHost {
    fn ready(&self) {}

    fn not_ready(&self) {}
}

/// Reports readiness changes as log events
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl HostSignal for LogHost {
    fn ready(&self) {
        info!(target: "daily_allowance::host", "host signal: ready");
    }

    fn not_ready(&self) {
        info!(target: "daily_allowance::host", "host signal: not ready");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HostSignal;
    use std::cell::RefCell;

    /// Records every signal it receives
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub signals: RefCell<Vec<&'static str>>,
    }

    impl HostSignal for RecordingHost {
        fn ready(&self) {
            self.signals.borrow_mut().push("ready");
        }

        fn not_ready(&self) {
            self.signals.borrow_mut().push("not_ready");
        }
    }
}
