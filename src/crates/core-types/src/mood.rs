//! Mood domain types: moods, emotion categories, wizard context, daily log.

use serde::{Deserialize, Serialize};

/// The five selectable moods from the wizard's feeling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Anxious,
    Angry,
    Calm,
    Sad,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Anxious => "😰",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Sad => "😢",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "开心",
            Mood::Anxious => "焦虑",
            Mood::Angry => "生气",
            Mood::Calm => "平静",
            Mood::Sad => "难过",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "happy" => Some(Mood::Happy),
            "anxious" => Some(Mood::Anxious),
            "angry" => Some(Mood::Angry),
            "calm" => Some(Mood::Calm),
            "sad" => Some(Mood::Sad),
            _ => None,
        }
    }
}

/// How the user classified the emotion behind the event.
///
/// Unknown input is resolved to [`Category::Ventilation`] at the parse
/// boundary; everything past that point works with the typed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Problem,
    SelfAttack,
    Reality,
    #[default]
    Ventilation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Problem => "problem",
            Category::SelfAttack => "self_attack",
            Category::Reality => "reality",
            Category::Ventilation => "ventilation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Problem => "具体难题",
            Category::SelfAttack => "自我攻击",
            Category::Reality => "客观现实",
            Category::Ventilation => "单纯宣泄",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "problem" => Some(Category::Problem),
            "self_attack" => Some(Category::SelfAttack),
            "reality" => Some(Category::Reality),
            "ventilation" => Some(Category::Ventilation),
            _ => None,
        }
    }
}

/// Immutable snapshot of what the wizard collected.
///
/// Supplied to every chat request in the session; never inserted into the
/// turn list itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialContext {
    pub event: String,
    pub mood: String,
    /// 1–10, enforced at the wizard boundary.
    pub intensity: u8,
    pub category: Category,
}

/// One persisted mood record. One record per calendar date, last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Mood emoji.
    pub mood: String,
    pub intensity: u8,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
