use std::collections::BTreeMap;
use std::sync::RwLock;

pub const TOTAL_REPOS: &str = "total-repos";
pub const TOTAL_FOLLOWERS: &str = "total-followers";
pub const TOTAL_STARS: &str = "total-stars";
pub const TOTAL_CONTRIBUTIONS: &str = "total-contributions";
pub const LANGUAGE_BARS: &str = "language-bars";
pub const REPOS_GRID: &str = "repos-grid";

pub const ALL_SLOTS: [&str; 6] = [
    TOTAL_REPOS,
    TOTAL_FOLLOWERS,
    TOTAL_STARS,
    TOTAL_CONTRIBUTIONS,
    LANGUAGE_BARS,
    REPOS_GRID,
];

pub trait Presentation: Send + Sync {
    fn has_slot(&self, id: &str) -> bool;
    fn set_text(&self, id: &str, text: &str) -> bool;
    fn set_html(&self, id: &str, html: &str) -> bool;
}

#[derive(Default)]
pub struct MemoryPage {
    slots: RwLock<BTreeMap<String, String>>,
}

impl MemoryPage {
    pub fn with_slots<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let slots = ids
            .into_iter()
            .map(|id| (id.to_string(), String::new()))
            .collect();
        Self {
            slots: RwLock::new(slots),
        }
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }

    pub fn to_html(&self) -> String {
        self.slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(id, content)| format!("<div id=\"{}\">{}</div>\n", id, content))
            .collect()
    }

    fn set(&self, id: &str, content: String) -> bool {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        match slots.get_mut(id) {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }
}

impl Presentation for MemoryPage {
    fn has_slot(&self, id: &str) -> bool {
        self.slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(id)
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        self.set(id, crate::live::format::escape_html(text))
    }

    fn set_html(&self, id: &str, html: &str) -> bool {
        self.set(id, html.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_is_skipped() {
        let page = MemoryPage::with_slots([TOTAL_STARS]);
        assert!(page.set_text(TOTAL_STARS, "12"));
        assert!(!page.set_text(REPOS_GRID, "nope"));
        assert_eq!(page.get(TOTAL_STARS).as_deref(), Some("12"));
        assert!(page.get(REPOS_GRID).is_none());
    }

    #[test]
    fn test_text_is_escaped() {
        let page = MemoryPage::with_slots([TOTAL_REPOS]);
        page.set_text(TOTAL_REPOS, "<b>");
        assert_eq!(page.to_html(), "<div id=\"total-repos\">&lt;b&gt;</div>\n");
    }
}
