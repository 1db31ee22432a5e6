use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found at or under a set of paths.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Recursively collect every file under `paths` whose extension is one of
/// `file_exts` (with or without a leading `.`).
///
/// If the user passes a single file path, that file is presumed to be GraphQL
/// even if its extension doesn't match.
pub(crate) fn find(paths: &[PathBuf], file_exts: &[String]) -> GraphQLFiles {
    let file_exts: HashSet<&str> = file_exts.iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = GraphQLFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }
                    let matches_ext = path.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| file_exts.contains(ext));
                    if matches_ext {
                        log::trace!("Found GraphQL file at {path:#?}.");
                        found.file_paths.push(path.to_path_buf());
                    } else {
                        log::trace!("Skipping non-graphql file: {path:#?}.");
                        found.num_skipped_files += 1;
                    }
                },

                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any of \
            the --graphql-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
        found.file_paths.push(only_path.to_path_buf());
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}
