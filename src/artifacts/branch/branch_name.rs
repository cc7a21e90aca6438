use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;

pub const REF_PREFIX: &str = "refs/heads/";

/// Path of a ref relative to the repository directory, e.g. `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

/// A branch name obeying git ref-name rules
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!(RepositoryError::InvalidBranchName(name));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!(RepositoryError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    pub fn try_parse_sym_ref_name(sym_ref_name: &SymRefName) -> anyhow::Result<Self> {
        let name = sym_ref_name
            .as_ref_path()
            .strip_prefix(REF_PREFIX)
            .with_context(|| {
                format!(
                    "symbolic ref name must start with '{REF_PREFIX}', got '{}'",
                    sym_ref_name.as_ref_path()
                )
            })?;

        Self::try_parse(name.to_string())
    }

    pub fn to_sym_ref_name(&self) -> SymRefName {
        SymRefName::new(format!("{REF_PREFIX}{}", self.0))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
