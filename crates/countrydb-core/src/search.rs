// crates/countrydb-core/src/search.rs

//! # Fuzzy search
//!
//! [`SearchIndex`] answers search-box queries over the list currently shown
//! by the picker. Every record is indexed under three keys: display name,
//! country code and each calling code. Keys and query are folded with
//! [`fold_key`] before matching, then scored with `frizbee`.
//!
//! The index holds one collection at a time. [`SearchIndex::search`]
//! replaces it with the list it is given before every query, so results
//! never come from a previous list. It takes `&mut self`: sharing one index
//! across threads querying different lists needs external synchronisation.

use crate::model::ListedCountry;
use crate::options::SearchOptions;
use crate::text::fold_key;
use frizbee::{match_list, Config};

#[derive(Debug, Clone)]
struct SearchKey {
    owner: usize,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    options: SearchOptions,
    entries: Vec<ListedCountry>,
    keys: Vec<SearchKey>,
}

impl SearchIndex {
    pub fn new(options: SearchOptions) -> Self {
        SearchIndex {
            options,
            entries: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Replaces the indexed collection wholesale.
    pub fn rebuild(&mut self, list: &[ListedCountry]) {
        self.entries = list.to_vec();
        self.keys.clear();
        for (owner, country) in self.entries.iter().enumerate() {
            let texts = std::iter::once(country.name.as_str())
                .chain(std::iter::once(country.code.as_str()))
                .chain(country.calling_codes.iter().map(String::as_str));
            for text in texts {
                let text = fold_key(text);
                if !text.is_empty() {
                    self.keys.push(SearchKey { owner, text });
                }
            }
        }
    }

    /// Rebuilds over `list`, then queries it.
    ///
    /// - An empty `list` gives an empty result.
    /// - An empty (or whitespace-only) `query` gives `list` unchanged.
    /// - Otherwise matches are returned best first.
    pub fn search(&mut self, query: &str, list: &[ListedCountry]) -> Vec<ListedCountry> {
        if list.is_empty() {
            return Vec::new();
        }
        self.rebuild(list);
        if query.trim().is_empty() {
            return list.to_vec();
        }
        self.query(query)
    }

    /// Queries the current collection.
    pub fn query(&self, query: &str) -> Vec<ListedCountry> {
        let needle = fold_key(query.trim());
        if needle.is_empty() {
            return self.entries.clone();
        }

        let config = config_for_query(&needle, self.options.threshold);
        let haystacks: Vec<&str> = self.keys.iter().map(|k| k.text.as_str()).collect();

        // Best score per record across its keys.
        let mut best: Vec<u16> = vec![0; self.entries.len()];
        for entry in match_list(needle.as_str(), &haystacks, &config) {
            if entry.score == 0 {
                continue;
            }
            let owner = self.keys[entry.index as usize].owner;
            best[owner] = best[owner].max(entry.score);
        }

        let mut ranked: Vec<(usize, u16)> = best
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        ranked
            .into_iter()
            .map(|(i, _)| self.entries[i].clone())
            .collect()
    }

    /// The collection currently indexed.
    pub fn entries(&self) -> &[ListedCountry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps the similarity threshold onto a typo budget: up to
/// `floor(threshold * len)` query characters may be missing from a key,
/// never all of them.
pub(crate) fn config_for_query(query: &str, threshold: f32) -> Config {
    let length = query.chars().count();
    let budget = (threshold.clamp(0.0, 1.0) * length as f32).floor() as usize;
    let allowed_typos = budget.min(length.saturating_sub(1));

    Config {
        prefilter: true,
        max_typos: Some(u16::try_from(allowed_typos).unwrap_or(u16::MAX)),
        sort: false,
        ..Config::default()
    }
}
