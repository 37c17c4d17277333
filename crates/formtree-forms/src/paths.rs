//! Object path derivation.
//!
//! An object path is a `/`-delimited address locating a node's expected data
//! within a submitted document: the root form's path is `""` and every other
//! node's path is its parent's path plus `/` plus its own slug. Because the
//! builder rejects empty and colliding sibling slugs, every path in a built
//! tree is unique and matches [`OBJECT_PATH_PATTERN`], and a form's path is
//! a strict prefix of each descendant's path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::{Form, Node};

/// The pattern every object path must match, from the display-specification
/// format.
pub const OBJECT_PATH_PATTERN: &str = r"^(/\w+|/\*)*$";

static OBJECT_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(OBJECT_PATH_PATTERN).expect("valid regex"));

/// Returns `true` iff `path` is a well-formed object path.
pub fn is_object_path(path: &str) -> bool {
    OBJECT_PATH.is_match(path)
}

/// Joins a parent path with a child segment.
pub fn child_path(parent: &str, segment: &str) -> String {
    format!("{parent}/{segment}")
}

/// Resolves the object path of every node in the tree rooted at `root`,
/// in depth-first declaration order, starting with the root's own `""`.
///
/// Paths are a pure function of the immutable tree, so re-resolving always
/// yields the same result.
pub fn object_paths(root: &Form) -> Vec<String> {
    let mut paths = vec![String::new()];
    collect(root, "", &mut paths);
    paths
}

fn collect(form: &Form, prefix: &str, paths: &mut Vec<String>) {
    for child in form.children() {
        let path = child_path(prefix, &child.slug());
        paths.push(path.clone());
        if let Node::Form(sub) = child {
            collect(sub, &path, paths);
        }
    }
}
