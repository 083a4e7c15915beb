use crate::model::{Stakeholder, StakeholderKind};

/// Filter criteria for a stakeholder collection.
///
/// Both criteria compose with logical AND. The search term matches
/// case-insensitively as a substring of the name, organization, region,
/// and each interest tag; an empty or whitespace-only term is treated as
/// absent.
#[derive(Debug, Clone, Default)]
pub struct StakeholderQuery {
    pub kind: Option<StakeholderKind>,
    pub search: Option<String>,
}

impl StakeholderQuery {
    pub fn by_kind(kind: StakeholderKind) -> Self {
        Self {
            kind: Some(kind),
            search: None,
        }
    }

    pub fn by_search(term: impl Into<String>) -> Self {
        Self {
            kind: None,
            search: Some(term.into()),
        }
    }
}

/// Returns the matching subset, preserving the relative order of the
/// input. No ranking, no fuzzy matching, no pagination.
pub fn filter_stakeholders<'a>(
    stakeholders: &'a [Stakeholder],
    query: &StakeholderQuery,
) -> Vec<&'a Stakeholder> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut out: Vec<&'a Stakeholder> = Vec::new();
    for s in stakeholders {
        if let Some(kind) = query.kind
            && s.kind != kind
        {
            continue;
        }

        if let Some(needle) = needle.as_deref()
            && !search_matches(s, needle)
        {
            continue;
        }

        out.push(s);
    }
    out
}

/// Convenience for the single-criterion case.
pub fn stakeholders_by_kind(
    stakeholders: &[Stakeholder],
    kind: StakeholderKind,
) -> Vec<&Stakeholder> {
    filter_stakeholders(stakeholders, &StakeholderQuery::by_kind(kind))
}

/// Resolves a stakeholder's connection ids, in order, against `all`.
///
/// Ids with no matching record are silently omitted; duplicate ids yield
/// duplicate entries. Neither input is mutated.
pub fn resolve_connections<'a>(
    stakeholder: &Stakeholder,
    all: &'a [Stakeholder],
) -> Vec<&'a Stakeholder> {
    stakeholder
        .connections
        .iter()
        .filter_map(|id| find_by_id(all, id))
        .collect()
}

pub fn find_by_id<'a>(all: &'a [Stakeholder], id: &str) -> Option<&'a Stakeholder> {
    all.iter().find(|s| s.id == id)
}

fn search_matches(stakeholder: &Stakeholder, needle: &str) -> bool {
    let fields = [
        stakeholder.name.as_str(),
        stakeholder.organization.as_str(),
        stakeholder.region.as_str(),
    ];
    if fields.iter().any(|f| f.to_lowercase().contains(needle)) {
        return true;
    }
    stakeholder
        .interests
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
}
