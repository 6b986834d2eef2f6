//! Cached property table.
//!
//! The table holds every catalog movie's Item Property Set in memory and is
//! persisted as a tab-separated file (`movie_id \t predicate \t object`) so
//! that the knowledge graph only has to be queried when the caller asks for
//! a rebuild.

use crate::corpus::ObjectCorpus;
use crate::error::{PropertyError, Result};
use crate::sparql::PropertySource;
use crate::store::PropertyStore;
use crate::types::{NAME_PREDICATE, Property, PropertyLookup, PropertySet};
use data_loader::{MovieId, MovieLink};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// In-memory property store backed by a cache file
#[derive(Debug, Default)]
pub struct PropertyTable {
    properties: HashMap<MovieId, PropertySet>,
    /// Linked-data URI per movie, used as name fallback
    uris: HashMap<MovieId, String>,
    corpus: ObjectCorpus,
}

impl PropertyTable {
    /// Build a table from `(movie, property)` rows
    pub fn from_rows(
        catalog: &[MovieLink],
        rows: impl IntoIterator<Item = (MovieId, Property)>,
    ) -> Self {
        let mut properties: HashMap<MovieId, PropertySet> = HashMap::new();
        for (movie_id, property) in rows {
            properties.entry(movie_id).or_default().insert(property);
        }

        let uris = catalog
            .iter()
            .map(|link| (link.id, link.uri.clone()))
            .collect();
        let corpus = ObjectCorpus::from_sets(properties.values());

        Self {
            properties,
            uris,
            corpus,
        }
    }

    /// Query `source` for every catalog movie.
    ///
    /// The first failing query aborts the fetch, so a table is either
    /// complete or not produced at all.
    #[instrument(skip_all, fields(movies = catalog.len()))]
    pub fn fetch_all(catalog: &[MovieLink], source: &dyn PropertySource) -> Result<Self> {
        let start = Instant::now();
        let mut rows = Vec::new();

        for (i, link) in catalog.iter().enumerate() {
            let properties = source.fetch(&link.uri)?;
            debug!(
                "[{}/{}] movie {} -> {} properties",
                i + 1,
                catalog.len(),
                link.id,
                properties.len()
            );
            rows.extend(properties.into_iter().map(|p| (link.id, p)));
        }

        let table = Self::from_rows(catalog, rows);
        info!(
            "Fetched properties for {} movies in {:.2?}",
            table.movie_count(),
            start.elapsed()
        );
        Ok(table)
    }

    /// Read a cached table written by [`PropertyTable::save`]
    pub fn load(path: &Path, catalog: &[MovieLink]) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut rows = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.splitn(3, '\t');
            let (Some(movie_id), Some(predicate), Some(object)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(PropertyError::Parse {
                    line: line_no,
                    reason: "expected movie_id, predicate and object".to_string(),
                });
            };

            let movie_id: MovieId = movie_id.trim().parse().map_err(|e| PropertyError::Parse {
                line: line_no,
                reason: format!("Invalid movieId: {}", e),
            })?;
            rows.push((movie_id, Property::new(predicate, object.trim_end_matches('\r'))));
        }

        let table = Self::from_rows(catalog, rows);
        info!(
            "Loaded cached properties for {} movies from {:?}",
            table.movie_count(),
            path
        );
        Ok(table)
    }

    /// Write the table, one row per property, ordered by movie id.
    ///
    /// Tabs and line breaks inside predicates and literals are replaced by
    /// spaces, so such literals do not survive a save/load cycle verbatim.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(path)?);
        let mut movie_ids: Vec<&MovieId> = self.properties.keys().collect();
        movie_ids.sort_unstable();

        for movie_id in movie_ids {
            for property in &self.properties[movie_id] {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    movie_id,
                    sanitize(&property.predicate),
                    sanitize(&property.object)
                )?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Load the cache, or fetch everything from `source` and refresh the
    /// cache when `rebuild` is set. Staleness is never inferred.
    pub fn load_or_fetch(
        rebuild: bool,
        path: &Path,
        catalog: &[MovieLink],
        source: &dyn PropertySource,
    ) -> Result<Self> {
        if rebuild {
            let table = Self::fetch_all(catalog, source)?;
            table.save(path)?;
            info!("Property cache written to {:?}", path);
            Ok(table)
        } else {
            Self::load(path, catalog)
        }
    }

    /// Number of movies with at least one property
    pub fn movie_count(&self) -> usize {
        self.properties.len()
    }
}

impl PropertyStore for PropertyTable {
    fn lookup(&self, movie_id: MovieId) -> PropertyLookup<'_> {
        match self.properties.get(&movie_id) {
            Some(set) => PropertyLookup::Found(set),
            None => PropertyLookup::NotFound,
        }
    }

    fn get_name(&self, movie_id: MovieId) -> String {
        let name = self.properties.get(&movie_id).and_then(|set| {
            set.iter()
                .find(|p| p.predicate == NAME_PREDICATE)
                .map(|p| p.object.clone())
        });

        if let Some(name) = name {
            return name;
        }

        match self.uris.get(&movie_id) {
            Some(uri) => fragment_title(uri),
            None => {
                warn!("Movie {} has neither a name nor a uri", movie_id);
                format!("movie {}", movie_id)
            }
        }
    }

    fn object_count(&self, object: &str) -> usize {
        self.corpus.count(object)
    }
}

fn sanitize(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// Readable title from a resource URI: `.../Heat_(1995_film)` -> `Heat`
fn fragment_title(uri: &str) -> String {
    let fragment = uri.rsplit('/').next().unwrap_or(uri);
    let fragment = match fragment.find('(') {
        Some(pos) => &fragment[..pos],
        None => fragment,
    };
    fragment.replace('_', " ").trim().to_string()
}
