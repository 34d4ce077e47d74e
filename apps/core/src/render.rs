use serde::Serialize;

use crate::error::{Error, Result};
use crate::project::ProjectRecord;

pub const UNTITLED_PROJECT: &str = "Untitled Project";
pub const NO_DESCRIPTION: &str = "No description provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Like `parse`, but anything outside `h1`..`h6` falls back to `h2`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            tracing::warn!("invalid heading level {value:?}, using h2");
            Self::default()
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    pub const fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// Display description of one project, ready for any rendering backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBlock {
    pub heading_level: HeadingLevel,
    pub title: String,
    /// Empty when the record has no image; backends show a broken image.
    pub image: String,
    pub description: String,
    pub year: String,
}

impl ProjectBlock {
    pub fn from_record(record: &ProjectRecord, heading_level: HeadingLevel) -> Self {
        Self {
            heading_level,
            title: record
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED_PROJECT.to_string()),
            image: record.image.clone().unwrap_or_default(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            year: record.year.clone().unwrap_or_default(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// A display surface whose whole content is replaced on every render.
pub trait ProjectSurface {
    fn replace_blocks(&mut self, blocks: Vec<ProjectBlock>);
}

/// In-memory surface; frontends paint from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectList {
    blocks: Vec<ProjectBlock>,
}

impl ProjectList {
    pub fn blocks(&self) -> &[ProjectBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl ProjectSurface for ProjectList {
    fn replace_blocks(&mut self, blocks: Vec<ProjectBlock>) {
        self.blocks = blocks;
    }
}

pub fn build_blocks<'a, I>(records: I, heading_level: HeadingLevel) -> Vec<ProjectBlock>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    records
        .into_iter()
        .map(|record| ProjectBlock::from_record(record, heading_level))
        .collect()
}

/// Replaces the content of `target` with one block per record.
///
/// Without a target nothing happens beyond an error log; the returned error
/// is informational and callers usually drop it.
pub fn render_projects<'a, I>(
    records: I,
    target: Option<&mut dyn ProjectSurface>,
    heading_level: &str,
) -> Result<usize>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let Some(target) = target else {
        tracing::error!("no container to render projects into");
        return Err(Error::MissingTarget("projects container".to_string()));
    };

    let blocks = build_blocks(records, HeadingLevel::parse_or_default(heading_level));
    let count = blocks.len();
    target.replace_blocks(blocks);
    Ok(count)
}

pub fn projects_title(count: usize) -> String {
    format!("{count} Projects")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectRecord> {
        let mut full = ProjectRecord::new("Atlas", "2024");
        full.description = Some("Maps".to_string());
        full.image = Some("images/atlas.png".to_string());
        vec![full, ProjectRecord::default()]
    }

    #[test]
    fn test_one_block_per_record_in_order() -> Result<()> {
        let records = sample();
        let mut list = ProjectList::default();
        let count = render_projects(&records, Some(&mut list), "h3")?;
        assert_eq!(count, 2);
        assert_eq!(list.blocks()[0].title, "Atlas");
        assert_eq!(list.blocks()[0].heading_level, HeadingLevel::H3);
        Ok(())
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let block = ProjectBlock::from_record(&ProjectRecord::default(), HeadingLevel::H2);
        assert_eq!(block.title, UNTITLED_PROJECT);
        assert_eq!(block.description, NO_DESCRIPTION);
        assert_eq!(block.image, "");
        assert!(!block.has_image());
        assert_eq!(block.year, "");
    }

    #[test]
    fn test_invalid_heading_falls_back_to_h2() {
        assert_eq!(HeadingLevel::parse_or_default("h7"), HeadingLevel::H2);
        assert_eq!(HeadingLevel::parse_or_default("H1"), HeadingLevel::H2);
        assert_eq!(HeadingLevel::parse_or_default("h6"), HeadingLevel::H6);
    }

    #[test]
    fn test_missing_target_is_reported_not_fatal() {
        let records = sample();
        let result = render_projects(&records, None, "h2");
        assert!(matches!(result, Err(Error::MissingTarget(_))));
    }

    #[test]
    fn test_render_is_idempotent_and_replaces_content() -> Result<()> {
        let records = sample();
        let mut list = ProjectList::default();
        render_projects(&records, Some(&mut list), "h2")?;
        let first = list.clone();
        render_projects(&records, Some(&mut list), "h2")?;
        assert_eq!(first, list);

        render_projects(&records[..1], Some(&mut list), "h2")?;
        assert_eq!(list.len(), 1);
        Ok(())
    }

    #[test]
    fn test_projects_title() {
        assert_eq!(projects_title(12), "12 Projects");
    }
}
