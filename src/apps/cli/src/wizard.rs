//! Terminal wizard: collects event, mood, intensity, and category.

use anyhow::Result;
use moodmate_core_types::{Category, InitialContext, Mood};
use std::io::{self, BufRead, Write};

const MOOD_CHOICES: [Mood; 5] = [
    Mood::Happy,
    Mood::Anxious,
    Mood::Angry,
    Mood::Calm,
    Mood::Sad,
];

const CATEGORY_CHOICES: [(Category, &str); 4] = [
    (Category::Problem, "我有办法解决，只是觉得难"),
    (Category::SelfAttack, "我觉得我很差劲，都是我的错"),
    (Category::Reality, "天气不好、堵车、运气不好"),
    (Category::Ventilation, "我就是想哭一会儿"),
];

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn ask_event() -> Result<String> {
    loop {
        let event = prompt_line("今天发生了什么？\n> ")?;
        if !event.is_empty() {
            return Ok(event);
        }
        println!("（写一句就好。）");
    }
}

fn ask_mood() -> Result<Mood> {
    println!("\n现在的心情是？");
    for (i, mood) in MOOD_CHOICES.iter().enumerate() {
        println!("  {}. {} {}", i + 1, mood.emoji(), mood.label());
    }
    loop {
        let choice = prompt_line("> ")?;
        if let Ok(index) = choice.parse::<usize>() {
            if (1..=MOOD_CHOICES.len()).contains(&index) {
                return Ok(MOOD_CHOICES[index - 1]);
            }
        }
        if let Some(mood) = Mood::parse(&choice) {
            return Ok(mood);
        }
        println!("（输入 1-{} 选择一个心情。）", MOOD_CHOICES.len());
    }
}

fn ask_intensity() -> Result<u8> {
    loop {
        let value = prompt_line("\n心情强度（1-10）：")?;
        if let Ok(intensity) = value.parse::<u8>() {
            if (1..=10).contains(&intensity) {
                return Ok(intensity);
            }
        }
        println!("（1 到 10 之间的数字。）");
    }
}

fn ask_category() -> Result<Category> {
    println!("\n这个情绪属于哪一类？");
    for (i, (category, desc)) in CATEGORY_CHOICES.iter().enumerate() {
        println!("  {}. {} — {}", i + 1, category.title(), desc);
    }
    let choice = prompt_line("> ")?;
    if let Ok(index) = choice.parse::<usize>() {
        if (1..=CATEGORY_CHOICES.len()).contains(&index) {
            return Ok(CATEGORY_CHOICES[index - 1].0);
        }
    }
    // Unrecognized input falls back to the ventilation flow.
    Ok(Category::parse(&choice).unwrap_or_default())
}

/// Run the four wizard steps and capture the session's initial context.
pub fn run() -> Result<(InitialContext, Mood)> {
    let event = ask_event()?;
    let mood = ask_mood()?;
    let intensity = ask_intensity()?;
    let category = ask_category()?;

    let context = InitialContext {
        event,
        mood: mood.as_str().to_string(),
        intensity,
        category,
    };
    Ok((context, mood))
}
