use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::{SectionStyle, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;

/// Snapshot of the repository state shown by `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: Option<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn staged_files(&self) -> &FileSet {
        &self.staged_files
    }

    pub fn removed_files(&self) -> &FileSet {
        &self.removed_files
    }

    pub fn workspace_changeset(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked_files(&self) -> &FileSet {
        &self.untracked_files
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Gather every section; expects the staging area to be loaded
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let index = self.repository.index();
        let (_, head_commit) = self.repository.head_commit()?;
        let head_tree = head_commit.tree();
        let inspector = Inspector::new(self.repository);

        let mut workspace_changeset = ChangeSet::new();

        // staged content is what the next commit records
        for (path, oid) in index.additions() {
            if let Some(change) = inspector.check_against_workspace(path, oid)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }
        for (path, oid) in head_tree {
            if index.staged_oid(path).is_some() || index.is_staged_for_removal(path) {
                continue;
            }
            if let Some(change) = inspector.check_against_workspace(path, oid)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        // a file staged for removal but present again is untracked
        let untracked_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| {
                index.staged_oid(path).is_none()
                    && (!head_tree.contains(path) || index.is_staged_for_removal(path))
            })
            .collect();

        Ok(StatusInfo {
            branches: refs.list_branches()?,
            current_branch: refs.current_branch()?,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().clone(),
            workspace_changeset,
            untracked_files,
        })
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    lines: impl Iterator<Item = (String, SectionStyle)>,
) -> fmt::Result {
    writeln!(f, "=== {title} ===")?;
    for (line, style) in lines {
        writeln!(f, "{}", style.paint(&line))?;
    }
    writeln!(f)
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(
            f,
            "Branches",
            self.branches.iter().map(|branch| {
                if self.current_branch.as_ref() == Some(branch) {
                    (format!("*{branch}"), SectionStyle::Current)
                } else {
                    (branch.to_string(), SectionStyle::Plain)
                }
            }),
        )?;
        write_section(
            f,
            "Staged Files",
            self.staged_files
                .iter()
                .map(|path| (path.display().to_string(), SectionStyle::Staged)),
        )?;
        write_section(
            f,
            "Removed Files",
            self.removed_files
                .iter()
                .map(|path| (path.display().to_string(), SectionStyle::Staged)),
        )?;
        write_section(
            f,
            "Modifications Not Staged For Commit",
            self.workspace_changeset.iter().map(|(path, change)| {
                (format!("{} {change}", path.display()), SectionStyle::Unstaged)
            }),
        )?;
        write!(f, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            write!(f, "\n{}", SectionStyle::Unstaged.paint(&path.display().to_string()))?;
        }

        Ok(())
    }
}
