//! View model for rendering a snapshot.
//!
//! Presentation code renders a [`WidgetView`] and nothing else, so it
//! never needs to reason about engine rules.

use crate::config::WidgetConfig;
use crate::engine::Snapshot;
use crate::tag::TagId;

/// Notice shown when the dataset is missing or empty.
pub const NO_TAGS_NOTICE: &str = "No tags available";

/// Correctness styling for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagStyle {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// A tag as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub id: TagId,
    pub label: String,
    pub style: TagStyle,
    /// Tag cannot be interacted with (answer area while locked).
    pub disabled: bool,
}

/// Everything needed to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub image: String,
    pub question: String,
    pub pool: Vec<TagView>,
    pub answer_area: Vec<TagView>,
    /// One line per checked tag, in placement order.
    pub feedback: Vec<String>,
    pub check_enabled: bool,
    pub all_correct: bool,
    /// Set when there is nothing to sort.
    pub notice: Option<&'static str>,
}

impl WidgetView {
    /// Build the view for a snapshot.
    pub fn from_snapshot(config: &WidgetConfig, snapshot: &Snapshot) -> Self {
        let locked = snapshot.is_locked();

        let pool = snapshot
            .pool
            .iter()
            .map(|tag| TagView {
                id: tag.id.clone(),
                label: tag.label.clone(),
                style: TagStyle::Neutral,
                disabled: false,
            })
            .collect();

        let answer_area = snapshot
            .placed
            .iter()
            .map(|tag| {
                let style = match snapshot.last_result.get(&tag.id) {
                    Some(entry) if entry.is_correct => TagStyle::Correct,
                    Some(_) => TagStyle::Incorrect,
                    None => TagStyle::Neutral,
                };
                TagView {
                    id: tag.id.clone(),
                    label: tag.label.clone(),
                    style,
                    disabled: locked,
                }
            })
            .collect();

        let feedback = snapshot
            .last_result
            .entries()
            .iter()
            .map(|entry| entry.feedback.clone())
            .collect();

        Self {
            image: config.image.clone(),
            question: config.question.clone(),
            pool,
            answer_area,
            feedback,
            check_enabled: !locked,
            all_correct: snapshot.all_correct(),
            notice: snapshot.is_empty().then_some(NO_TAGS_NOTICE),
        }
    }
}
