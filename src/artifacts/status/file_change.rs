use colored::Colorize;

/// How a working file diverges from the version the next commit would record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::Modified => "(modified)",
            WorkspaceChangeType::Deleted => "(deleted)",
        }
    }
}

impl std::fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}

/// Colour of a listed path, by section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    Current,
    Staged,
    Unstaged,
    Plain,
}

impl SectionStyle {
    pub fn paint(&self, text: &str) -> String {
        match self {
            SectionStyle::Current | SectionStyle::Staged => text.green().to_string(),
            SectionStyle::Unstaged => text.red().to_string(),
            SectionStyle::Plain => text.normal().to_string(),
        }
    }
}
