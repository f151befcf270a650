//! Line-oriented front end: one cooperative loop over stdin and the
//! outstanding round trip.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use relaychat_client::view::LOADING_INDICATOR;
use relaychat_client::{Conversation, RelayTransport, TransportError, View};

/// Prints only what changed since the last call.
#[derive(Default)]
struct Printer {
    printed_rows: usize,
    loading_shown: bool,
}

impl Printer {
    fn show(&mut self, view: &View) {
        for row in view.rows.iter().skip(self.printed_rows) {
            println!("{row}");
        }
        self.printed_rows = view.rows.len();

        if view.loading && !self.loading_shown {
            println!("{LOADING_INDICATOR}");
        }
        self.loading_shown = view.loading;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

enum Command<'a> {
    Quit,
    Clear,
    Send,
    Text(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/clear" => Command::Clear,
        "/send" => Command::Send,
        _ => Command::Text(line),
    }
}

pub async fn run(transport: Arc<dyn RelayTransport>) -> std::io::Result<()> {
    let mut conversation = Conversation::new();
    let mut printer = Printer::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (tx, mut rx) = mpsc::channel::<Result<String, TransportError>>(1);

    println!("Type a message and press Enter. /send resends a kept draft, /clear, /quit.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                let text = match parse_command(&line) {
                    Command::Quit => break,
                    Command::Clear => {
                        if conversation.clear() {
                            printer.reset();
                            println!("(conversation cleared)");
                        } else {
                            println!("(still waiting for a reply; not cleared)");
                        }
                        continue;
                    }
                    Command::Send => conversation.input().to_string(),
                    Command::Text(text) => {
                        conversation.set_input(text);
                        text.to_string()
                    }
                };

                match conversation.begin_submit(&text) {
                    Some(turn) => {
                        let transport = Arc::clone(&transport);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let outcome = transport.send(turn.messages()).await;
                            if tx.send(outcome).await.is_err() {
                                tracing::debug!("Front end gone before reply arrived");
                            }
                        });
                        printer.show(&View::project(&conversation));
                    }
                    None if conversation.is_pending() => {
                        println!("(still waiting for a reply; draft kept, /send it afterwards)");
                    }
                    None => {}
                }
            }

            Some(outcome) = rx.recv() => {
                conversation.complete(outcome);
                printer.show(&View::project(&conversation));
            }
        }
    }

    // Let an outstanding turn settle so the transcript ends complete.
    if conversation.is_pending() {
        if let Some(outcome) = rx.recv().await {
            conversation.complete(outcome);
            printer.show(&View::project(&conversation));
        }
    }

    Ok(())
}
