use std::collections::{HashMap, HashSet};

use crate::relation::LinkEdge;

/// Link graph restricted to ids that belong to some requested language.
/// An id has an entry only if it appears in at least one retained edge.
pub type Adjacency = HashMap<u64, HashSet<u64>>;

/// Single pass over the link relation. An edge is kept only when both
/// endpoints are in the union id set from the membership pass; kept edges
/// are recorded in both directions, since the export may carry a pair in
/// either direction and the attacher looks up neighbors from the
/// non-driving side. Unknown ids are dropped without comment, the
/// membership filter has already excluded their languages.
pub fn filter_links<I>(edges: I, all_ids: &HashSet<u64>) -> Result<Adjacency, String>
where
    I: Iterator<Item = Result<LinkEdge, String>>,
{
    let mut adjacency = Adjacency::new();
    for edge in edges {
        let edge = edge?;
        if !all_ids.contains(&edge.a) || !all_ids.contains(&edge.b) {
            continue;
        }
        adjacency.entry(edge.a).or_default().insert(edge.b);
        adjacency.entry(edge.b).or_default().insert(edge.a);
    }
    Ok(adjacency)
}
