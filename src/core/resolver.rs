use crate::models::{NavigationPath, Node, Tree};

/// Entries of the folder `path` points at, in source order.
///
/// Walks the path one segment at a time, taking the first folder whose name
/// equals the segment. A segment that matches nothing, or only matches a
/// file, yields an empty slice: stale paths show an empty view rather than an
/// error.
pub fn resolve<'a>(tree: &'a Tree, path: &NavigationPath) -> &'a [Node] {
    let mut items = tree.roots();

    for segment in path.segments() {
        let folder = items
            .iter()
            .find(|node| node.is_folder() && node.name() == segment);

        match folder.and_then(Node::children) {
            Some(children) => items = children,
            None => return &[],
        }
    }

    items
}
