//! User notifications.

use mockall::automock;

/// Surfaces the outcome of a write to the user.
#[automock]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Prints successes to stdout and errors to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}
