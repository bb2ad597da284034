//! Interactive chat loop.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use vermeer_core::{ChatMessage, ChatMessageBuilder, ChatTurn, Role};
use vermeer_error::{BuilderError, IoError, IoErrorKind, VermeerResult};
use vermeer_interface::GenerativeModel;
use vermeer_studio::ChatRelay;

/// Module tag on every transcript entry.
const CHAT_MODULE: &str = "chat";

/// Input that ends the session.
const EXIT_COMMAND: &str = "/exit";

fn transcript_entry(role: Role, text: &str) -> VermeerResult<ChatMessage> {
    Ok(ChatMessageBuilder::default()
        .role(role)
        .text(text)
        .module(Some(CHAT_MODULE.to_string()))
        .build()
        .map_err(|e| BuilderError::new(e.to_string()))?)
}

/// Read prompts from stdin until `/exit` or EOF, printing each reply.
///
/// The transcript lives in memory for the length of the session.
pub async fn run_chat<M>(relay: &ChatRelay<M>) -> VermeerResult<()>
where
    M: GenerativeModel + ?Sized,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut transcript: Vec<ChatMessage> = Vec::new();

    info!("Chat session started");
    write_out(&mut stdout, "Vermeer chat. Type /exit to quit.\n> ").await?;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| IoError::new(IoErrorKind::ReadInput(e.to_string())))?
    {
        let message = line.trim();
        if message == EXIT_COMMAND {
            break;
        }
        if message.is_empty() {
            write_out(&mut stdout, "> ").await?;
            continue;
        }

        let history: Vec<ChatTurn> = transcript.iter().filter_map(ChatMessage::to_turn).collect();
        let reply = relay.send(&history, message).await;

        transcript.push(transcript_entry(Role::User, message)?);
        transcript.push(transcript_entry(Role::Model, &reply)?);
        debug!(messages = transcript.len(), "Transcript updated");

        write_out(&mut stdout, &format!("\n{}\n\n> ", reply)).await?;
    }

    info!(messages = transcript.len(), "Chat session ended");
    Ok(())
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> VermeerResult<()> {
    stdout
        .write_all(text.as_bytes())
        .await
        .map_err(|e| IoError::new(IoErrorKind::WriteOutput(e.to_string())))?;
    stdout
        .flush()
        .await
        .map_err(|e| IoError::new(IoErrorKind::WriteOutput(e.to_string())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_entry_is_tagged() {
        let entry = transcript_entry(Role::User, "hello").unwrap();

        assert_eq!(entry.module.as_deref(), Some("chat"));
        assert_eq!(entry.to_turn(), Some(ChatTurn::new(Role::User, "hello")));
    }
}
