//! Persist a finished selection as a tag

use thiserror::Error;

use super::machine::{WordRef, WordSpan};
use crate::models::{CreateTag, CreateTopic, Tag, TopicId, Verse, VerseId, Version};
use crate::reference::format_position;
use crate::source::{ScriptureSource, SourceError};

/// Which topic a new tag is filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicChoice {
    /// Untopiced tag
    None,
    Existing(TopicId),
    /// Create the topic first, then tag under it
    New {
        name: String,
        description: Option<String>,
    },
}

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("Topic name is required")]
    MissingTopicName,

    #[error("No version selected")]
    MissingVersion,

    #[error("Nothing selected")]
    NothingSelected,

    #[error("Unknown verse: {0}")]
    UnknownVerse(VerseId),

    #[error("Could not save: {0}")]
    Persistence(#[from] SourceError),
}

/// Resolve the topic name up front so an empty one is rejected before any
/// request is made
fn validated_new_topic(choice: &TopicChoice) -> Result<Option<CreateTopic>, CommitError> {
    match choice {
        TopicChoice::New { name, description } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CommitError::MissingTopicName);
            }
            let description = description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);
            Ok(Some(CreateTopic {
                name: name.to_string(),
                description,
            }))
        }
        TopicChoice::None | TopicChoice::Existing(_) => Ok(None),
    }
}

/// Find the verse behind `word`, preferring the loaded chapter
async fn resolve_verse(
    source: &dyn ScriptureSource,
    loaded: &[Verse],
    word: WordRef,
) -> Result<Verse, CommitError> {
    if let Some(verse) = loaded.iter().find(|v| v.id == word.verse_id) {
        return Ok(verse.clone());
    }
    match source.get_verse(word.verse_id).await {
        Ok(verse) => Ok(verse),
        Err(SourceError::NotFound(_)) => Err(CommitError::UnknownVerse(word.verse_id)),
        Err(e) => Err(e.into()),
    }
}

fn position_of(verse: &Verse, word_index: u32) -> String {
    format_position(&verse.book, verse.chapter, verse.verse, word_index)
}

/// Create the tag for `span`, creating its topic first when asked to.
///
/// Nothing is written when validation fails.
pub async fn commit(
    source: &dyn ScriptureSource,
    loaded: &[Verse],
    version: Option<&Version>,
    span: WordSpan,
    choice: &TopicChoice,
) -> Result<Tag, CommitError> {
    let new_topic = validated_new_topic(choice)?;
    let version = version.ok_or(CommitError::MissingVersion)?;

    let start_verse = resolve_verse(source, loaded, span.start).await?;
    let end_verse = resolve_verse(source, loaded, span.end).await?;

    let topic_id = match (choice, new_topic) {
        (_, Some(request)) => {
            let topic = source.create_topic(&request).await?;
            tracing::info!("Created topic {} ({})", topic.name, topic.id);
            Some(topic.id)
        }
        (TopicChoice::Existing(id), None) => Some(*id),
        _ => None,
    };

    let request = CreateTag {
        topic_id,
        version: Some(version.abbreviation.clone()),
        start_position: Some(position_of(&start_verse, span.start.word_index)),
        end_position: Some(position_of(&end_verse, span.end.word_index)),
    };

    let tag = source.create_tag(&request).await?;
    tracing::info!(
        "Created tag {} for {} - {}",
        tag.id,
        tag.start_position,
        tag.end_position
    );
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_topic_name_rejected() {
        let choice = TopicChoice::New {
            name: "   ".to_string(),
            description: None,
        };
        assert!(matches!(
            validated_new_topic(&choice),
            Err(CommitError::MissingTopicName)
        ));
    }

    #[test]
    fn test_new_topic_is_trimmed() {
        let choice = TopicChoice::New {
            name: " Creation ".to_string(),
            description: Some("  ".to_string()),
        };
        let request = validated_new_topic(&choice).unwrap().unwrap();
        assert_eq!(request.name, "Creation");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_existing_topic_needs_no_request() {
        assert!(validated_new_topic(&TopicChoice::Existing(2)).unwrap().is_none());
        assert!(validated_new_topic(&TopicChoice::None).unwrap().is_none());
    }

    #[test]
    fn test_position_of_uses_display_word() {
        let verse = Verse {
            id: 7,
            version_id: 1,
            book: "1 Samuel".to_string(),
            chapter: 3,
            verse: 10,
            text: "Speak, for your servant hears".to_string(),
            format_type: Default::default(),
        };
        assert_eq!(position_of(&verse, 0), "1 Sam 3:10.1");
    }
}
