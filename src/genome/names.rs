//! Contig-name normalisation between naming conventions (`chr1` vs `1`,
//! `chrM` vs `MT`).

use std::collections::HashMap;

use crate::genome::dict::ContigDictionary;

const MITOCHONDRIAL: [&str; 4] = ["chrM", "chrMT", "M", "MT"];

/// Maps any accepted spelling of a contig name to its dictionary ordinal.
///
/// Built once per dictionary. Exact names always win over derived aliases,
/// and among aliases the earlier contig wins.
#[derive(Clone, Debug)]
pub struct ContigNameResolver {
    aliases: HashMap<String, usize>,
}

impl ContigNameResolver {
    #[must_use]
    pub fn new(dict: &ContigDictionary) -> Self {
        let mut aliases: HashMap<String, usize> = dict
            .contigs()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        for (i, c) in dict.contigs().iter().enumerate() {
            for alt in alternatives(&c.name) {
                aliases.entry(alt).or_insert(i);
            }
        }
        Self { aliases }
    }

    /// Ordinal of the contig `raw` refers to, `None` when unmapped.
    #[inline]
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<usize> {
        self.aliases.get(raw).copied()
    }
}

fn alternatives(name: &str) -> Vec<String> {
    if MITOCHONDRIAL.contains(&name) {
        return MITOCHONDRIAL
            .iter()
            .filter(|m| **m != name)
            .map(|m| (*m).to_owned())
            .collect();
    }
    match name.get(..3) {
        Some(p) if p.eq_ignore_ascii_case("chr") && name.len() > 3 => vec![name[3..].to_owned()],
        _ => vec![format!("chr{name}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::dict::Contig;

    fn ucsc() -> ContigDictionary {
        ContigDictionary::new(vec![
            Contig::new("chr1", 100),
            Contig::new("chr2", 100),
            Contig::new("chrM", 16),
        ])
    }

    fn canonical<'d>(d: &'d ContigDictionary, raw: &str) -> Option<&'d str> {
        ContigNameResolver::new(d)
            .resolve(raw)
            .and_then(|i| d.contig(i))
            .map(|c| c.name.as_str())
    }

    #[test]
    fn exact_and_prefix_toggled_names() {
        let d = ucsc();
        let r = ContigNameResolver::new(&d);
        assert_eq!(r.resolve("chr2"), Some(1));
        assert_eq!(r.resolve("2"), Some(1));
        assert_eq!(canonical(&d, "1"), Some("chr1"));
    }

    #[test]
    fn mitochondrial_aliases() {
        let d = ucsc();
        let r = ContigNameResolver::new(&d);
        assert_eq!(r.resolve("MT"), Some(2));
        assert_eq!(r.resolve("M"), Some(2));
    }

    #[test]
    fn ensembl_dictionary_accepts_ucsc_names() {
        let d = ContigDictionary::new(vec![Contig::new("1", 10), Contig::new("MT", 5)]);
        assert_eq!(canonical(&d, "chr1"), Some("1"));
        assert_eq!(canonical(&d, "M"), Some("MT"));
        assert_eq!(canonical(&d, "chrM"), Some("MT"));
    }

    #[test]
    fn unknown_names_are_unmapped() {
        let d = ucsc();
        let r = ContigNameResolver::new(&d);
        assert_eq!(r.resolve("chrUn_gl000220"), None);
        assert_eq!(r.resolve(""), None);
    }

    #[test]
    fn exact_names_beat_aliases() {
        let d = ContigDictionary::new(vec![Contig::new("chr1", 10), Contig::new("1", 20)]);
        let r = ContigNameResolver::new(&d);
        assert_eq!(r.resolve("1"), Some(1));
        assert_eq!(r.resolve("chr1"), Some(0));
    }
}
