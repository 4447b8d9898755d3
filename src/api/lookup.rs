use super::source::SeriesSource;

/// Finds the source carrying `label`.
///
/// Returns `None` when no source matches or when more than one does; an
/// ambiguous label cannot be trusted for navigation, so it is treated the
/// same as a missing one.
#[must_use]
pub fn find_series_by_label<'a, S: SeriesSource>(sources: &'a [S], label: &str) -> Option<&'a S> {
    let mut found = None;
    for source in sources {
        if source.label() == label {
            if found.is_some() {
                return None;
            }
            found = Some(source);
        }
    }
    found
}
