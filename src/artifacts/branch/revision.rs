use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;

const HEAD: &str = "HEAD";

/// A revision expression naming a commit
///
/// Supported forms:
/// - `HEAD`, or its alias `@`
/// - a branch name: `master`, `feature/login`
/// - a full or abbreviated commit id (any non-empty hex prefix)
/// - parent notation: `<revision>^`
/// - ancestor notation: `<revision>~<n>`
///
/// Id-like names are parsed as `Ref` too. Resolution tries HEAD, then
/// branches, then id prefixes, so a branch shadows a commit id that reads
/// the same.
#[derive(Debug, Clone)]
pub enum Revision {
    Ref(BranchName),
    /// The Nth first-parent ancestor (e.g. `HEAD~3`)
    Ancestor(Box<Revision>, usize),
    /// The first parent (e.g. `HEAD^`)
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_re = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_re = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_re.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_re.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            let branch_name = BranchName::try_parse(resolved_name.to_string())?;

            Ok(Revision::Ref(branch_name))
        }
    }

    /// Resolve to the id of an existing commit
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Ref(name) => Self::resolve_ref(name, repository),
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(&base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(&oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_ref(name: &BranchName, repository: &Repository) -> anyhow::Result<ObjectId> {
        if name.as_ref() == HEAD {
            return repository.head_oid();
        }

        if let Some(oid) = repository.refs().read_branch(name)? {
            return Ok(oid);
        }

        if ObjectId::is_valid_prefix(name.as_ref()) {
            return Self::resolve_prefix(name.as_ref(), repository);
        }

        Err(RepositoryError::CommitNotFound(name.to_string()).into())
    }

    /// The unique commit whose id starts with `prefix`
    pub fn resolve_prefix(prefix: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        let database = repository.database();
        let mut commits = Vec::new();

        for oid in database.find_objects_by_prefix(prefix)? {
            if database.object_type(&oid)? == ObjectType::Commit {
                commits.push(oid);
            }
        }

        match commits.len() {
            1 => Ok(commits.remove(0)),
            candidates => {
                tracing::debug!(prefix, candidates, "commit id prefix does not resolve");
                Err(RepositoryError::AmbiguousOrNotFound(prefix.to_string()).into())
            }
        }
    }

    fn resolve_commit_parent(oid: &ObjectId, repository: &Repository) -> anyhow::Result<ObjectId> {
        let commit = repository.database().parse_object_as_commit(oid)?;

        commit
            .parent()
            .cloned()
            .ok_or_else(|| RepositoryError::CommitNotFound(format!("{}^", oid.to_short_oid())).into())
    }
}
