use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Mood label as stored by the mood log. Labels outside the known set decode
/// to `Unrecognized` instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    Happy,
    Relaxed,
    Stressed,
    Sad,
    #[serde(other)]
    Unrecognized,
}

impl MoodCategory {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Happy" => MoodCategory::Happy,
            "Relaxed" => MoodCategory::Relaxed,
            "Stressed" => MoodCategory::Stressed,
            "Sad" => MoodCategory::Sad,
            _ => MoodCategory::Unrecognized,
        }
    }
}

/// Chart series a mood record is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedMood {
    Happy,
    Calm,
    Neutral,
    Anxious,
    Sad,
}

impl DerivedMood {
    /// Display order used by every chart.
    pub const ALL: [DerivedMood; 5] = [
        DerivedMood::Happy,
        DerivedMood::Calm,
        DerivedMood::Neutral,
        DerivedMood::Anxious,
        DerivedMood::Sad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DerivedMood::Happy => "happy",
            DerivedMood::Calm => "calm",
            DerivedMood::Neutral => "neutral",
            DerivedMood::Anxious => "anxious",
            DerivedMood::Sad => "sad",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DerivedMood::Happy => "Happy",
            DerivedMood::Calm => "Calm",
            DerivedMood::Neutral => "Neutral",
            DerivedMood::Anxious => "Anxious",
            DerivedMood::Sad => "Sad",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            DerivedMood::Happy => "#FFD700",
            DerivedMood::Calm => "#87CEEB",
            DerivedMood::Neutral => "#D3D3D3",
            DerivedMood::Anxious => "#FF6B6B",
            DerivedMood::Sad => "#4169E1",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodRecord {
    pub id: String,
    #[serde(alias = "moodType")]
    pub category: MoodCategory,
    /// Original label when `category` is `Unrecognized`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Raw timestamp text; parsed only when the record is aggregated. Missing
    /// reads as empty and is reported as malformed.
    #[serde(default, alias = "date")]
    pub occurred_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewMood {
    #[serde(alias = "moodType")]
    pub category: String,
    #[serde(default, alias = "date")]
    pub occurred_at: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodCounts {
    pub happy: u64,
    pub calm: u64,
    pub neutral: u64,
    pub anxious: u64,
    pub sad: u64,
}

impl MoodCounts {
    pub fn get(&self, mood: DerivedMood) -> u64 {
        match mood {
            DerivedMood::Happy => self.happy,
            DerivedMood::Calm => self.calm,
            DerivedMood::Neutral => self.neutral,
            DerivedMood::Anxious => self.anxious,
            DerivedMood::Sad => self.sad,
        }
    }

    pub fn increment(&mut self, mood: DerivedMood) {
        let slot = match mood {
            DerivedMood::Happy => &mut self.happy,
            DerivedMood::Calm => &mut self.calm,
            DerivedMood::Neutral => &mut self.neutral,
            DerivedMood::Anxious => &mut self.anxious,
            DerivedMood::Sad => &mut self.sad,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        DerivedMood::ALL.iter().map(|mood| self.get(*mood)).sum()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklyBucket {
    pub day: Weekday,
    #[serde(flatten)]
    pub counts: MoodCounts,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklySeries {
    pub buckets: Vec<WeeklyBucket>,
    /// Records skipped because their timestamp could not be read.
    pub malformed: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: DerivedMood,
    pub name: &'static str,
    pub total: u64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_context: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    #[serde(default, alias = "moodContext")]
    pub mood_context: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(alias = "moodContext")]
    pub mood_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub mood_logs: usize,
    pub journal_entries: usize,
    pub weekly: Vec<WeeklyBucket>,
    pub distribution: Vec<CategoryTotal>,
    pub malformed: usize,
    pub highlights: Vec<JournalEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct AffirmationResponse {
    pub date: String,
    pub text: &'static str,
}
