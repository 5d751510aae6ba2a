//! Sequence dictionaries: ordered contigs with lengths, loaded from `.dict`,
//! `.fai`, VCF headers or an indexed FASTA, and the linear coordinate they
//! induce over the whole genome.

use std::{
    collections::HashMap,
    error::Error,
    fmt,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use log::debug;

use crate::core::source::open_file;

/// One named reference sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contig {
    pub name: String,
    pub length: u64,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

#[derive(Debug)]
pub enum DictionaryError {
    /// No reference resource was configured.
    Missing,
    Unsupported(PathBuf),
    /// A FASTA file without a `.fai` or `.dict` next to it.
    NoIndex(PathBuf),
    Io(PathBuf, io::Error),
    Malformed {
        path: PathBuf,
        line: usize,
        reason: &'static str,
    },
    Empty(PathBuf),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Missing => f.write_str("undefined reference file"),
            DictionaryError::Unsupported(p) => write!(
                f,
                "cannot extract a sequence dictionary from {} (expected .dict, .fai, .vcf or an indexed FASTA)",
                p.display()
            ),
            DictionaryError::NoIndex(p) => {
                write!(f, "no .fai or .dict found next to {}", p.display())
            }
            DictionaryError::Io(p, e) => write!(f, "{}: {e}", p.display()),
            DictionaryError::Malformed { path, line, reason } => {
                write!(f, "{} line {line}: {reason}", path.display())
            }
            DictionaryError::Empty(p) => {
                write!(f, "empty dictionary extracted from {}", p.display())
            }
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DictionaryError::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Contigs in dictionary order, with the cumulative length preceding each.
#[derive(Clone, Debug)]
pub struct ContigDictionary {
    contigs: Vec<Contig>,
    offsets: Vec<u64>,
    by_name: HashMap<String, usize>,
}

impl ContigDictionary {
    /// Build from contigs in order. A repeated name keeps its first entry.
    #[must_use]
    pub fn new(contigs: Vec<Contig>) -> Self {
        let mut kept = Vec::with_capacity(contigs.len());
        let mut by_name = HashMap::with_capacity(contigs.len());
        for c in contigs {
            if by_name.contains_key(&c.name) {
                debug!("duplicate contig {} ignored", c.name);
                continue;
            }
            by_name.insert(c.name.clone(), kept.len());
            kept.push(c);
        }

        let mut offsets = Vec::with_capacity(kept.len());
        let mut acc = 0u64;
        for c in &kept {
            offsets.push(acc);
            acc += c.length;
        }
        Self {
            contigs: kept,
            offsets,
            by_name,
        }
    }

    /// Load the dictionary described by `path`, dropping contigs shorter than
    /// `min_contig_size` (negative keeps everything).
    pub fn load(path: &Path, min_contig_size: i64) -> Result<Self, DictionaryError> {
        let contigs = read_contigs(path)?;
        let contigs: Vec<Contig> = match u64::try_from(min_contig_size) {
            Ok(min) => contigs.into_iter().filter(|c| c.length >= min).collect(),
            Err(_) => contigs,
        };
        if contigs.is_empty() {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }
        Ok(Self::new(contigs))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }

    #[inline]
    #[must_use]
    pub fn contig(&self, index: usize) -> Option<&Contig> {
        self.contigs.get(index)
    }

    /// Ordinal of the contig named exactly `name`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Sum of the lengths of every contig before `index`.
    #[inline]
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied()
    }

    /// Length of the concatenated genome.
    #[must_use]
    pub fn reference_length(&self) -> u64 {
        self.contigs.iter().map(|c| c.length).sum()
    }

    /// Position `pos` of contig `index` on the genome-wide axis.
    #[inline]
    #[must_use]
    pub fn linear(&self, index: usize, pos: u64) -> Option<u64> {
        self.offset(index).map(|o| o + pos)
    }
}

// --- Loading ---

fn read_contigs(path: &Path) -> Result<Vec<Contig>, DictionaryError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);

    let parse: fn(&mut dyn BufRead) -> Result<Vec<Contig>, (usize, &'static str)> =
        if stem.ends_with(".dict") || stem.ends_with(".sam") {
            parse_sam_header
        } else if stem.ends_with(".fai") {
            parse_fai
        } else if stem.ends_with(".vcf") {
            parse_vcf_header
        } else if [".fa", ".fasta", ".fna"].iter().any(|e| stem.ends_with(e)) {
            let sibling = fasta_sibling(path)?;
            debug!("reading dictionary of {} from {}", path.display(), sibling.display());
            return read_contigs(&sibling);
        } else {
            return Err(DictionaryError::Unsupported(path.to_path_buf()));
        };

    let mut rdr = open_file(path).map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;
    parse(&mut rdr).map_err(|(line, reason)| {
        if line == 0 {
            DictionaryError::Io(path.to_path_buf(), io::Error::other(reason))
        } else {
            DictionaryError::Malformed {
                path: path.to_path_buf(),
                line,
                reason,
            }
        }
    })
}

/// `ref.fa` → `ref.fa.fai`, `ref.dict`, `ref.fa.dict`, first that exists.
fn fasta_sibling(fasta: &Path) -> Result<PathBuf, DictionaryError> {
    let mut plain = fasta.to_path_buf();
    if plain
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
    {
        plain.set_extension("");
    }
    let candidates = [
        append_ext(fasta, "fai"),
        plain.with_extension("dict"),
        append_ext(fasta, "dict"),
    ];
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| DictionaryError::NoIndex(fasta.to_path_buf()))
}

fn append_ext(p: &Path, ext: &str) -> PathBuf {
    let mut s = p.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Errors are `(line, reason)`; line 0 means the read itself failed.
type ParseResult = Result<Vec<Contig>, (usize, &'static str)>;

fn for_each_line(
    rdr: &mut dyn BufRead,
    mut f: impl FnMut(usize, &str) -> Result<bool, (usize, &'static str)>,
) -> Result<(), (usize, &'static str)> {
    let mut buf = String::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if rdr.read_line(&mut buf).map_err(|_| (0, "read failed"))? == 0 {
            return Ok(());
        }
        line_no += 1;
        if !f(line_no, buf.trim_end_matches(['\n', '\r']))? {
            return Ok(());
        }
    }
}

/// Picard `.dict` or any SAM header text: `@SQ SN:name LN:length`.
fn parse_sam_header(rdr: &mut dyn BufRead) -> ParseResult {
    let mut out = Vec::new();
    for_each_line(rdr, |n, line| {
        if !line.starts_with("@SQ") {
            // alignment records start after the header
            return Ok(line.starts_with('@') || line.is_empty());
        }
        let (mut name, mut len) = (None, None);
        for field in line.split('\t').skip(1) {
            if let Some(v) = field.strip_prefix("SN:") {
                name = Some(v);
            } else if let Some(v) = field.strip_prefix("LN:") {
                len = Some(lexical_core::parse::<u64>(v.as_bytes()).map_err(|_| (n, "bad LN"))?);
            }
        }
        match (name, len) {
            (Some(name), Some(len)) => out.push(Contig::new(name, len)),
            (None, _) => return Err((n, "@SQ without SN")),
            (_, None) => return Err((n, "@SQ without LN")),
        }
        Ok(true)
    })?;
    Ok(out)
}

/// FASTA index: `name<TAB>length<TAB>offset<TAB>…`.
fn parse_fai(rdr: &mut dyn BufRead) -> ParseResult {
    let mut out = Vec::new();
    for_each_line(rdr, |n, line| {
        if line.trim().is_empty() {
            return Ok(true);
        }
        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        let len = fields
            .next()
            .and_then(|l| lexical_core::parse::<u64>(l.trim().as_bytes()).ok())
            .ok_or((n, "expected name<TAB>length"))?;
        out.push(Contig::new(name, len));
        Ok(true)
    })?;
    Ok(out)
}

/// VCF meta lines `##contig=<ID=chr1,length=248956422,…>`; stops at the body.
fn parse_vcf_header(rdr: &mut dyn BufRead) -> ParseResult {
    let mut out = Vec::new();
    for_each_line(rdr, |n, line| {
        if !line.starts_with('#') {
            return Ok(false);
        }
        let Some(body) = line
            .strip_prefix("##contig=<")
            .and_then(|s| s.strip_suffix('>'))
        else {
            return Ok(true);
        };
        let (mut id, mut len) = (None, None);
        for kv in body.split(',') {
            match kv.split_once('=') {
                Some(("ID", v)) => id = Some(v),
                Some(("length", v)) => {
                    len = Some(
                        lexical_core::parse::<u64>(v.as_bytes()).map_err(|_| (n, "bad length"))?,
                    );
                }
                _ => {}
            }
        }
        match (id, len) {
            (Some(id), Some(len)) => out.push(Contig::new(id, len)),
            (Some(id), None) => debug!("contig {id} has no length, ignored"),
            (None, _) => return Err((n, "##contig without ID")),
        }
        Ok(true)
    })?;
    Ok(out)
}
