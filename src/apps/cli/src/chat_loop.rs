//! Wizard → advice → streaming chat loop → drift-bottle save.

use crate::wizard;
use anyhow::{Context, Result};
use log::warn;
use moodmate_core::{
    request_initial_advice, ChatApiConfig, ChatClient, ChatSessionManager, ChatTransport,
    MoodLogStore, Turn, TurnRole, FALLBACK_ASSISTANT_REPLY,
};
use moodmate_core_types::{InitialContext, Mood};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Shown when the one-shot advice call fails; the session still opens.
const ADVICE_FALLBACK: &str = "很抱歉，暂时无法生成建议，但我在这里陪着你。";

const QUICK_REPLIES: [(&str, &str); 3] = [
    ("😩", "太难了，我做不到"),
    ("🤔", "具体该怎么做？"),
    ("🫂", "我还想求抱抱"),
];

pub async fn run(store: &MoodLogStore) -> Result<()> {
    let config =
        ChatApiConfig::from_env().context("chat API is not configured; set MOODMATE_API_KEY")?;
    let transport: Arc<dyn ChatTransport> = Arc::new(ChatClient::new(config));

    let (context, mood) = wizard::run()?;

    println!("\n✨ 拼图正在拼合...");
    let advice = match request_initial_advice(transport.as_ref(), &context).await {
        Ok(advice) => advice,
        Err(e) => {
            warn!("initial advice failed: {}", e);
            ADVICE_FALLBACK.to_string()
        }
    };
    println!("\n💝 理性闺蜜在说：\n{}\n", advice);

    let session = ChatSessionManager::new(transport, Some(context.clone()))
        .with_delta_listener(|delta| {
            print!("{}", delta);
            let _ = io::stdout().flush();
        });
    session.set_messages(vec![Turn::assistant(advice)]);

    print_help();

    let stdin = io::stdin();
    loop {
        print!("\n你：");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        let message = match input {
            "" => continue,
            "/quit" | "/q" => break,
            "/save" => {
                save_drift_bottle(store, &context, mood)?;
                continue;
            }
            "1" => quick_reply(0),
            "2" => quick_reply(1),
            "3" => quick_reply(2),
            other => other.to_string(),
        };

        print!("\n理性闺蜜：");
        io::stdout().flush()?;
        session.append(TurnRole::User, message).await;

        // A failed exchange streams nothing; surface the apology turn.
        if let Some(last) = session.messages().last() {
            if last.content == FALLBACK_ASSISTANT_REPLY {
                print!("{}", FALLBACK_ASSISTANT_REPLY);
            }
        }
        println!();
    }

    println!("\n慢慢来，我一直都在。🌿");
    Ok(())
}

fn quick_reply(index: usize) -> String {
    let (emoji, text) = QUICK_REPLIES[index];
    println!("{} {}", emoji, text);
    text.to_string()
}

fn print_help() {
    println!("快捷回复：");
    for (i, (emoji, text)) in QUICK_REPLIES.iter().enumerate() {
        println!("  {}. {} {}", i + 1, emoji, text);
    }
    println!("输入 /save 把今天的心情装进漂流瓶，/quit 离开。");
}

/// Persist today's record and let the bottle go.
fn save_drift_bottle(store: &MoodLogStore, context: &InitialContext, mood: Mood) -> Result<()> {
    store.save_daily(
        mood.emoji(),
        context.intensity,
        context.event.as_str(),
        Some(context.event.clone()),
        Some(context.category),
    )?;
    println!("\n🌊 漂流瓶已经带着今天的心情漂向远方。");
    Ok(())
}
