//! Interactive command loop over the sync client.

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use animus_client::StateSyncClient;

const HELP: &str = "\
Commands:
  talk <message>      Talk with the companion
  teach <content>     Teach it a fact
  emotion             Fetch the current emotional state
  avatar              Show the last polled avatar state
  status              Show service diagnostics
  memories [n]        Show the n most recent memories (default 10)
  help                This help
  quit / exit         Leave";

/// Run the prompt loop until the user quits or the token is cancelled.
pub async fn run(client: &StateSyncClient, cancel_token: CancellationToken) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Connected prompt - type 'help' for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let line = tokio::select! {
            _ = cancel_token.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // stdin closed
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "talk" => {
                if rest.is_empty() {
                    println!("Usage: talk <message>");
                    continue;
                }
                match client.send_message(rest).await {
                    Ok(reply) => {
                        println!("{}", reply);
                        if let Some(emotion) = client.current_emotion().await {
                            println!("  [{}]", emotion.summary());
                        }
                    }
                    Err(e) => eprintln!("talk failed: {}", e),
                }
            }
            "teach" => {
                if rest.is_empty() {
                    println!("Usage: teach <content>");
                    continue;
                }
                match client
                    .teach(rest, StateSyncClient::DEFAULT_TEACH_IMPORTANCE)
                    .await
                {
                    Ok(ack) => println!("{}", ack),
                    Err(e) => eprintln!("teach failed: {}", e),
                }
            }
            "emotion" => match client.get_emotion().await {
                Ok(emotion) => println!("{}", emotion.summary()),
                Err(e) => eprintln!("emotion fetch failed: {}", e),
            },
            "avatar" => match client.current_avatar_state().await {
                Some(avatar) => println!("{}", avatar.summary()),
                None => println!("No avatar snapshot yet (is polling enabled?)"),
            },
            "status" => match client.status().await {
                Ok(status) => println!(
                    "{}",
                    serde_json::to_string_pretty(&status.status)
                        .unwrap_or_else(|_| status.status.to_string())
                ),
                Err(e) => eprintln!("status fetch failed: {}", e),
            },
            "memories" => {
                let limit = rest.parse().unwrap_or(10);
                match client.memories(limit).await {
                    Ok(response) => {
                        if response.memories.is_empty() {
                            println!("No memories stored yet.");
                        }
                        for memory in &response.memories {
                            println!(
                                "- {}",
                                serde_json::to_string(memory)
                                    .unwrap_or_else(|_| memory.to_string())
                            );
                        }
                    }
                    Err(e) => eprintln!("memories fetch failed: {}", e),
                }
            }
            _ => println!("Unknown command '{}' - type 'help'", command),
        }
    }

    Ok(())
}
