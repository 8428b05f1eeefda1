//! The presentation seam: blocking notifications and confirmations.
//!
//! The resource client never talks to the user; view controllers own a
//! [`Notifier`] and decide when to surface a normalized error message or
//! ask a yes/no question. [`RecordingNotifier`] is the test double for
//! asserting exactly what was shown.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// User-facing blocking notifications.
pub trait Notifier: Send + Sync {
    /// Shows a message and returns once the user has seen it.
    fn alert(&self, message: &str);

    /// Asks a yes/no question, suspending interaction until answered.
    fn confirm(&self, question: &str) -> bool;
}

/// Terminal notifier: alerts go to stdout, confirmations read one line
/// from stdin (`s`/`sim`/`y`/`yes` affirm).
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, question: &str) -> bool {
        print!("{question} [s/n] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(
            answer.trim().to_lowercase().as_str(),
            "s" | "sim" | "y" | "yes"
        )
    }
}

/// Notifier double for tests: records every alert and confirmation
/// question, and answers confirmations from a scripted value.
///
/// # Example
/// ```
/// use cadastro_pessoa::notify::{Notifier, RecordingNotifier};
///
/// let notifier = RecordingNotifier::answering(false);
/// assert!(!notifier.confirm("Deseja realmente deletar esta pessoa?"));
/// assert_eq!(notifier.confirmations().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    confirmations: Mutex<Vec<String>>,
    answer: AtomicBool,
}

impl RecordingNotifier {
    /// A recorder that answers "no" to every confirmation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder with a scripted confirmation answer.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            ..Self::default()
        }
    }

    /// Change the scripted confirmation answer.
    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    /// Every alert shown so far, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    /// Every confirmation question asked so far, in order.
    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, question: &str) -> bool {
        self.confirmations.lock().unwrap().push(question.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}
