//! Movie catalog and corpus loading
//!
//! The catalog is the ordered, immutable list of entries every other
//! structure refers to by row index. Rows are assigned in load order and
//! never change for the lifetime of the process.

use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const COLUMN_ID: &str = "movie_id";
pub const COLUMN_TITLE: &str = "title";
pub const COLUMN_GENRES: &str = "genres";
pub const COLUMN_DESCRIPTION: &str = "description";

/// A single movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    id: i64,
    title: String,
    category_tags: String,
    description: String,
    #[serde(skip)]
    combined_text: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        category_tags: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let category_tags = category_tags.into();
        let description = description.into();
        let combined_text = format!("{} {} {}", title, category_tags, description);
        Self {
            id,
            title,
            category_tags,
            description,
            combined_text,
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn category_tags(&self) -> &str {
        &self.category_tags
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Title, tags and description joined by single spaces
    #[inline]
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }
}

/// Ordered, read-only sequence of catalog entries
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Where the corpus comes from
#[derive(Debug, Clone)]
pub enum CorpusSource {
    /// CSV file with a header row
    Csv(PathBuf),
    /// JSON array of records
    Json(PathBuf),
    /// Entries already in memory
    Records(Vec<CatalogEntry>),
}

impl CorpusSource {
    /// Pick the format from the file extension: `.json` is JSON, anything else CSV.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            CorpusSource::Json(path)
        } else {
            CorpusSource::Csv(path)
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    movie_id: i64,
    title: String,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        warn_duplicate_ids(&entries);
        Self { entries }
    }

    pub fn load(source: CorpusSource) -> Result<Self> {
        let catalog = match source {
            CorpusSource::Csv(path) => Self::from_csv_path(&path)?,
            CorpusSource::Json(path) => Self::from_json_path(&path)?,
            CorpusSource::Records(entries) => Self::new(entries),
        };
        info!("Catalog loaded with {} entries", catalog.len());
        Ok(catalog)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        debug!("Reading CSV corpus from {:?}", path);
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        debug!("Reading JSON corpus from {:?}", path);
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Parse CSV with a header row. Columns are located by name, extra
    /// columns are ignored and `genres`/`description` may be absent.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);

        let id_col = position(COLUMN_ID).ok_or_else(|| Error::MissingColumn(COLUMN_ID.to_string()))?;
        let title_col =
            position(COLUMN_TITLE).ok_or_else(|| Error::MissingColumn(COLUMN_TITLE.to_string()))?;
        let genres_col = position(COLUMN_GENRES);
        let description_col = position(COLUMN_DESCRIPTION);

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

            let raw_id = field(Some(id_col)).trim();
            let id = raw_id.parse::<i64>().map_err(|_| Error::InvalidRecord {
                line,
                reason: format!("{} {:?} is not an integer", COLUMN_ID, raw_id),
            })?;

            entries.push(CatalogEntry::new(
                id,
                field(Some(title_col)),
                field(genres_col),
                field(description_col),
            ));
        }

        Ok(Self::new(entries))
    }

    /// Parse a JSON array of `{movie_id, title, genres?, description?}` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<JsonRecord> = serde_json::from_reader(reader)?;
        let entries = records
            .into_iter()
            .map(|r| {
                CatalogEntry::new(
                    r.movie_id,
                    r.title,
                    r.genres.unwrap_or_default(),
                    r.description.unwrap_or_default(),
                )
            })
            .collect();
        Ok(Self::new(entries))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<&CatalogEntry> {
        self.entries.get(row)
    }

    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Titles in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title()).collect()
    }
}

fn warn_duplicate_ids(entries: &[CatalogEntry]) {
    let mut seen = AHashSet::with_capacity(entries.len());
    for (row, entry) in entries.iter().enumerate() {
        if !seen.insert(entry.id) {
            warn!("Duplicate {} {} at row {}", COLUMN_ID, entry.id, row);
        }
    }
}
