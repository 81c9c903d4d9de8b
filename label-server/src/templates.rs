//! In-memory template store
//!
//! Stands in for the persistence collaborator: each owner keeps at most
//! one custom template, which the template-mode preview resolves by the
//! literal name "custom".

use dashmap::DashMap;

use marka_zpl::LabelTemplate;

/// Per-owner custom template store
#[derive(Debug, Default)]
pub struct TemplateStore {
    custom: DashMap<String, LabelTemplate>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self {
            custom: DashMap::new(),
        }
    }

    /// Replace the owner's stored custom template.
    pub fn put(&self, template: LabelTemplate) {
        self.custom.insert(template.owner_id.clone(), template);
    }

    /// The owner's one stored custom template, if any.
    pub fn custom_for(&self, owner_id: &str) -> Option<LabelTemplate> {
        self.custom.get(owner_id).map(|t| t.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_custom_template_per_owner() {
        let store = TemplateStore::new();
        assert!(store.custom_for("tenant-1").is_none());

        store.put(LabelTemplate::new("tenant-1", "first"));
        store.put(LabelTemplate::new("tenant-1", "second"));
        store.put(LabelTemplate::new("tenant-2", "other"));

        assert_eq!(store.custom_for("tenant-1").unwrap().name, "second");
        assert_eq!(store.custom_for("tenant-2").unwrap().name, "other");
    }
}
