/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Grouping of keys by base name and selection of each group's representative.

use std::collections::HashMap;

use crate::types::ArbitraryChoice;

/// Returns the key with its final extension removed.
///
/// Only keys of the form `<prefix>.<extension>` have a base name, where the prefix is
/// non-empty and the extension is one or more ASCII alphanumerics.
///
/// The extension must run to the end of the key. A pattern like `(.+)\.[a-zA-Z0-9]+` that
/// is only anchored at the start would also accept a match ending mid-key, giving `dir` for
/// `dir.v2/index` and `page` for `page.tar-gz`. Neither key has a base name here.
pub(crate) fn base_name(key: &str) -> Option<&str> {
    let (base, ext) = key.rsplit_once('.')?;
    if base.is_empty() || ext.is_empty() || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some(base)
}

/// The outcome of [`preferred_path`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Preference {
    /// Index of the chosen candidate
    pub(crate) index: usize,
    /// No candidate had the preferred suffix, the first one was taken
    pub(crate) arbitrary: bool,
}

/// Pick the first candidate ending in `suffix`, falling back to the first candidate.
///
/// A lone candidate is never an arbitrary choice.
///
/// Returns `None` only for an empty candidate list.
pub(crate) fn preferred_path<S: AsRef<str>>(candidates: &[S], suffix: &str) -> Option<Preference> {
    if candidates.is_empty() {
        return None;
    }
    let preference = match candidates
        .iter()
        .position(|c| c.as_ref().ends_with(suffix))
    {
        Some(index) => Preference {
            index,
            arbitrary: false,
        },
        None => Preference {
            index: 0,
            arbitrary: candidates.len() > 1,
        },
    };
    Some(preference)
}

/// Keys sharing a base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group {
    base: String,
    candidates: Vec<String>,
    chosen: String,
    arbitrary: bool,
}

impl Group {
    fn new(base: &str, key: &str) -> Self {
        Self {
            base: base.to_owned(),
            candidates: vec![key.to_owned()],
            chosen: key.to_owned(),
            arbitrary: false,
        }
    }

    /// Fold a new candidate into the group, keeping the preferred of it and the current choice.
    fn push(&mut self, key: &str, suffix: &str) {
        let pair = [self.chosen.as_str(), key];
        let preference = preferred_path(&pair, suffix).expect("non-empty candidates");
        if preference.index == 1 {
            self.chosen = key.to_owned();
        }
        self.arbitrary = preference.arbitrary;
        self.candidates.push(key.to_owned());
    }

    /// The shadow key for this group
    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    /// The key whose content the shadow will carry
    pub(crate) fn chosen(&self) -> &str {
        &self.chosen
    }

    /// Every key in the group, in listing order
    #[cfg(test)]
    pub(crate) fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Details of the choice if it came down to listing order
    pub(crate) fn arbitrary_choice(&self) -> Option<ArbitraryChoice> {
        self.arbitrary.then(|| ArbitraryChoice {
            base: self.base.clone(),
            candidates: self.candidates.clone(),
            chosen: self.chosen.clone(),
        })
    }
}

/// Group `keys` by base name, choosing one representative per group.
///
/// Groups are returned in the order their first key was seen. Keys without a base name are
/// dropped. When no key in a group ends in `preferred_suffix` the first listed key wins, so
/// the result depends on listing order.
pub(crate) fn group_keys<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    preferred_suffix: &str,
) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for key in keys {
        let Some(base) = base_name(key) else {
            continue;
        };
        match index.get(base).copied() {
            Some(i) => groups[i].push(key, preferred_suffix),
            None => {
                index.insert(base, groups.len());
                groups.push(Group::new(base, key));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::{base_name, group_keys, preferred_path, Group, Preference};

    const HTML: &str = ".html";

    fn chosen(groups: &[Group], base: &str) -> Option<String> {
        groups
            .iter()
            .find(|g| g.base() == base)
            .map(|g| g.chosen().to_owned())
    }

    #[test]
    fn test_base_name() {
        assert_eq!(Some("index"), base_name("index.html"));
        assert_eq!(Some("archive.tar"), base_name("archive.tar.gz"));
        assert_eq!(Some("dir/page"), base_name("dir/page.md"));
        assert_eq!(Some("a."), base_name("a..html"));
        assert_eq!(None, base_name("index"));
        assert_eq!(None, base_name(".html"));
        assert_eq!(None, base_name("trailing."));
        assert_eq!(None, base_name("dir.v2/index"));
        assert_eq!(None, base_name("page.tar-gz"));
    }

    #[test]
    fn test_mid_key_dot_does_not_join_group() {
        let groups = group_keys(["dir.v2/index", "dir.html", "page.tar-gz"], HTML);
        assert_eq!(1, groups.len());
        assert_eq!("dir", groups[0].base());
        assert_eq!(&["dir.html".to_owned()], groups[0].candidates());
    }

    #[test]
    fn test_preferred_path() {
        assert_eq!(None, preferred_path::<&str>(&[], HTML));
        assert_eq!(
            Some(Preference {
                index: 1,
                arbitrary: false
            }),
            preferred_path(&["page.txt", "page.html", "page.html5"], HTML)
        );
        assert_eq!(
            Some(Preference {
                index: 0,
                arbitrary: true
            }),
            preferred_path(&["report.csv", "report.json"], HTML)
        );
        assert_eq!(
            Some(Preference {
                index: 0,
                arbitrary: false
            }),
            preferred_path(&["only.txt"], HTML)
        );
    }

    #[test]
    fn test_unique_bases_choose_themselves() {
        let keys = ["a.html", "b.txt", "c/d.json", "README"];
        let groups = group_keys(keys, HTML);
        assert_eq!(3, groups.len());
        for group in &groups {
            assert_eq!(1, group.candidates().len());
            assert_eq!(group.candidates()[0], group.chosen());
            assert!(group.arbitrary_choice().is_none());
        }
    }

    #[test]
    fn test_html_wins_regardless_of_order() {
        let orders = [
            ["page.html", "page.txt", "page.md"],
            ["page.txt", "page.html", "page.md"],
            ["page.txt", "page.md", "page.html"],
        ];
        for keys in orders {
            let groups = group_keys(keys, HTML);
            assert_eq!(Some("page.html".to_owned()), chosen(&groups, "page"));
            assert!(groups[0].arbitrary_choice().is_none());
        }
    }

    #[test]
    fn test_first_listed_wins_without_html() {
        let groups = group_keys(["report.csv", "report.json"], HTML);
        assert_eq!(Some("report.csv".to_owned()), chosen(&groups, "report"));
        let choice = groups[0].arbitrary_choice().unwrap();
        assert_eq!("report", choice.base);
        assert_eq!(vec!["report.csv", "report.json"], choice.candidates);
        assert_eq!("report.csv", choice.chosen);

        // listing order decides, a different order may pick a different key
        let groups = group_keys(["report.json", "report.csv"], HTML);
        assert_eq!(Some("report.json".to_owned()), chosen(&groups, "report"));
    }

    #[test]
    fn test_incremental_matches_whole_group() {
        let keys = ["x.b", "x.a", "x.html", "x.c", "x.htm"];
        for n in 1..=keys.len() {
            let prefix = &keys[..n];
            let groups = group_keys(prefix.iter().copied(), HTML);
            let whole = preferred_path(prefix, HTML).unwrap();
            assert_eq!(prefix[whole.index], groups[0].chosen());
            assert_eq!(whole.arbitrary, groups[0].arbitrary_choice().is_some());
        }
    }

    #[test]
    fn test_multiple_dots_use_last_extension() {
        let groups = group_keys(["site.tar.gz", "site.tar.html", "site.tar"], HTML);
        assert_eq!(Some("site.tar.html".to_owned()), chosen(&groups, "site.tar"));
        assert_eq!(Some("site.tar".to_owned()), chosen(&groups, "site"));
    }

    #[test]
    fn test_groups_keep_discovery_order() {
        let groups = group_keys(["b.txt", "a.txt", "b.html"], HTML);
        let bases: Vec<&str> = groups.iter().map(Group::base).collect();
        assert_eq!(vec!["b", "a"], bases);
    }
}
