//! Ordered section registry.
//!
//! The registry is the single authoritative table for the page: it defines
//! which sections exist, the order they appear in the document, and the
//! order of the navigation menu. Menu entries and scroll targets cannot
//! drift apart because both read the same list.

use serde::{Deserialize, Serialize};

use crate::content::ContentError;

/// Stable ids for the standard page sections.
///
/// Both the content table and the section components reference these, so a
/// renamed section breaks at one place instead of silently unlinking the nav.
pub mod section_id {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const EDUCATION: &str = "education";
    pub const PUBLICATIONS: &str = "publications";
    pub const CONTACT: &str = "contact";
}

/// One scrollable content block, present in both the page layout and the
/// navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable element id, unique within the registry.
    pub id: String,
    /// Label shown in the navigation menu.
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered, validated list of sections.
///
/// Construction rejects empty lists, empty ids or labels, and duplicate ids,
/// so every downstream consumer can rely on the table being well formed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, ContentError> {
        if sections.is_empty() {
            return Err(ContentError::EmptyRegistry);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(sections.len());
        for section in &sections {
            if section.id.is_empty() {
                return Err(ContentError::EmptyField {
                    record: "section",
                    field: "id",
                });
            }
            if section.label.is_empty() {
                return Err(ContentError::EmptyField {
                    record: "section",
                    field: "label",
                });
            }
            if seen.contains(&section.id.as_str()) {
                return Err(ContentError::DuplicateSectionId(section.id.clone()));
            }
            seen.push(&section.id);
        }
        Ok(Self { sections })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }

    /// The first section in document order. The constructor guarantees the
    /// registry is never empty.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry(ids: &[&str]) -> Result<SectionRegistry, ContentError> {
        SectionRegistry::new(
            ids.iter()
                .map(|id| Section::new(*id, format!("Label {id}")))
                .collect(),
        )
    }

    #[test]
    fn preserves_declaration_order() {
        let registry = registry(&["home", "about", "contact"]).unwrap();
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "contact"]);
        assert_eq!(registry.first().id, "home");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn rejects_empty_registry() {
        assert_eq!(registry(&[]), Err(ContentError::EmptyRegistry));
    }

    #[test]
    fn rejects_duplicate_ids() {
        assert_eq!(
            registry(&["home", "about", "home"]),
            Err(ContentError::DuplicateSectionId("home".into()))
        );
    }

    #[test]
    fn rejects_empty_id() {
        let result = SectionRegistry::new(vec![Section::new("", "Home")]);
        assert_eq!(
            result,
            Err(ContentError::EmptyField {
                record: "section",
                field: "id",
            })
        );
    }

    #[test]
    fn rejects_empty_label() {
        let result = SectionRegistry::new(vec![Section::new("home", "")]);
        assert_eq!(
            result,
            Err(ContentError::EmptyField {
                record: "section",
                field: "label",
            })
        );
    }

    #[test]
    fn contains_checks_ids_not_labels() {
        let registry = registry(&["home", "about"]).unwrap();
        assert!(registry.contains("about"));
        assert!(!registry.contains("Label about"));
        assert!(!registry.contains("projects"));
    }
}
