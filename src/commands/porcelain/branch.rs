use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::fmt;

/// Every branch, sorted, with the one HEAD points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchList {
    pub branches: Vec<BranchName>,
    pub current: Option<BranchName>,
}

impl fmt::Display for BranchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .branches
            .iter()
            .map(|branch| {
                if self.current.as_ref() == Some(branch) {
                    format!("* {}", branch.to_string().green())
                } else {
                    format!("  {branch}")
                }
            })
            .collect::<Vec<_>>();

        write!(f, "{}", lines.join("\n"))
    }
}

impl Repository {
    /// Create a branch at `start` (a revision), or at HEAD
    pub fn create_branch(&self, name: &str, start: Option<&str>) -> anyhow::Result<ObjectId> {
        self.require_initialized()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        let source_oid = match start {
            Some(revision) => self.resolve_revision(revision)?,
            None => self.head_oid()?,
        };

        self.refs().create_branch(&branch_name, &source_oid)?;

        Ok(source_oid)
    }

    /// Delete a branch pointer; its commits stay in the store
    pub fn delete_branch(&self, name: &str) -> anyhow::Result<ObjectId> {
        self.require_initialized()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        self.refs().delete_branch(&branch_name)
    }

    pub fn list_branches(&self) -> anyhow::Result<BranchList> {
        self.require_initialized()?;

        Ok(BranchList {
            branches: self.refs().list_branches()?,
            current: self.refs().current_branch()?,
        })
    }
}
