/// Walks the predecessor chain back from `target` and returns the vertices in
/// `source -> target` order.
///
/// The walk stops at `source` or at the first vertex without a predecessor.
/// It also stops after `predecessors.len()` steps, so a corrupted (cyclic)
/// chain cannot loop forever. The result is returned as found; use
/// [`shortest_path`] for the checked form.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(vertex) = current {
        path.push(vertex);
        if vertex == source || path.len() > predecessors.len() {
            break;
        }
        current = predecessors.get(vertex).copied().flatten();
    }

    path.reverse();
    path
}

/// Reconstructs the path to `target` and keeps it only if it is a real path:
/// at least two vertices, starting at `source`.
///
/// `source == target` yields `None`; a one-vertex path is not reported.
pub fn shortest_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Option<Vec<usize>> {
    let path = reconstruct_path(predecessors, source, target);
    if path.len() > 1 && path.first() == Some(&source) {
        Some(path)
    } else {
        None
    }
}
