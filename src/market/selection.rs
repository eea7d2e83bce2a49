use std::path::{Path, PathBuf};

use super::time_filter::TimeFilter;

/// What the user is looking at. Every change yields a new value; the
/// derived view is recomputed from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub file: Option<PathBuf>,
    pub timestamp: Option<String>,
    pub index: usize,
    pub filter: TimeFilter,
}

impl Selection {
    pub fn with_file(&self, file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            ..self.clone()
        }
    }

    /// Move the scrubber: one slider drives both the orderbook timestamp
    /// and the highlighted price index
    pub fn with_scrub(&self, index: usize, timestamp: Option<String>) -> Self {
        Self {
            index,
            timestamp,
            ..self.clone()
        }
    }

    pub fn with_filter(&self, filter: TimeFilter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.file.as_deref() == Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_leave_original_untouched() {
        let base = Selection::default();
        let next = base
            .with_file("prices.csv")
            .with_filter(TimeFilter::LastWeek)
            .with_scrub(3, Some("t3".to_string()));

        assert_eq!(base, Selection::default());
        assert!(next.is_file(Path::new("prices.csv")));
        assert_eq!(next.filter, TimeFilter::LastWeek);
        assert_eq!(next.index, 3);
        assert_eq!(next.timestamp.as_deref(), Some("t3"));
    }

    #[test]
    fn test_file_change_keeps_scrub() {
        let selection = Selection::default()
            .with_scrub(2, Some("t2".to_string()))
            .with_file("other.csv");

        assert_eq!(selection.index, 2);
        assert_eq!(selection.timestamp.as_deref(), Some("t2"));
    }
}
