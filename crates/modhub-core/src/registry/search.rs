//! Case-insensitive substring search over the merged registry.

use super::EntityRegistry;
use crate::catalog::FILE_FORMATS;
use crate::config::Language;
use crate::models::{GuideDescriptor, ToolDescriptor};

impl EntityRegistry<'_> {
    /// Tools matching `query` by name, description in `lang` or format.
    ///
    /// Tools that handle a format whose glossary entry matches the query are
    /// appended after the direct hits, so searching for "physics" finds the
    /// tools working with `.phx`. A blank query returns every tool.
    pub fn search_tools(&self, query: &str, lang: Language) -> Vec<ToolDescriptor> {
        let query = query.trim().to_lowercase();
        let tools = self.all_tools();
        if query.is_empty() {
            return tools;
        }

        let (mut hits, mut rest): (Vec<_>, Vec<_>) = tools
            .into_iter()
            .partition(|tool| tool_matches(tool, &query, lang));

        // Glossary matches go format by format, in glossary order.
        for format in FILE_FORMATS.iter().filter(|f| f.matches(&query, lang)) {
            let (handling, remaining): (Vec<_>, Vec<_>) = rest
                .into_iter()
                .partition(|tool| tool.handles_format(format.extension));
            hits.extend(handling);
            rest = remaining;
        }
        hits
    }

    /// Guides whose title in `lang` or one of whose tags contains `query`.
    /// A blank query returns every guide.
    pub fn search_guides(&self, query: &str, lang: Language) -> Vec<GuideDescriptor> {
        let query = query.trim().to_lowercase();
        let guides = self.all_guides();
        if query.is_empty() {
            return guides;
        }
        guides
            .into_iter()
            .filter(|guide| guide_matches(guide, &query, lang))
            .collect()
    }
}

fn tool_matches(tool: &ToolDescriptor, query: &str, lang: Language) -> bool {
    tool.name.to_lowercase().contains(query)
        || tool.description(lang).to_lowercase().contains(query)
        || tool.formats.iter().any(|f| f.to_lowercase().contains(query))
}

fn guide_matches(guide: &GuideDescriptor, query: &str, lang: Language) -> bool {
    guide.title(lang).to_lowercase().contains(query)
        || guide.tags.iter().any(|t| t.to_lowercase().contains(query))
}
