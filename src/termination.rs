//! Graceful shutdown plumbing shared by the UI and state loops.
//! The broadcast pattern follows `<https://github.com/Yengas/rust-chat-server/>`.

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
    OsSigInt,
    UserInt,
}

/// Lets any loop ask every other loop to wind down
#[derive(Debug, Clone)]
pub struct Terminator {
    interrupt_tx: broadcast::Sender<Interrupted>,
}

impl Terminator {
    pub fn new(interrupt_tx: broadcast::Sender<Interrupted>) -> Self {
        Terminator { interrupt_tx }
    }

    pub fn terminate(&mut self, interrupted: Interrupted) -> color_eyre::eyre::Result<()> {
        self.interrupt_tx.send(interrupted)?;
        Ok(())
    }
}

#[cfg(unix)]
async fn terminate_by_unix_signal(mut terminator: Terminator) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt_signal =
        signal(SignalKind::interrupt()).expect("failed to create interrupt signal stream");

    interrupt_signal.recv().await;

    terminator
        .terminate(Interrupted::OsSigInt)
        .expect("failed to send interrupt signal");
}

/// Creates the termination broadcast and registers the OS signal listener
pub fn create_termination() -> (Terminator, broadcast::Receiver<Interrupted>) {
    let (tx, rx) = broadcast::channel(1);
    let terminator = Terminator::new(tx);

    #[cfg(unix)]
    tokio::spawn(terminate_by_unix_signal(terminator.clone()));

    (terminator, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn terminate_reaches_subscribers() {
        let (mut terminator, mut rx) = create_termination();
        terminator.terminate(Interrupted::UserInt).unwrap();
        assert_eq!(rx.recv().await.unwrap(), Interrupted::UserInt);
    }
}
