//! Decides whether a percentage size can be honoured.
//!
//! A relative size only means something when some ancestor has a size on
//! that axis. Real layout rules belong to the layout containers; the tree
//! only asks this predicate.

use crate::component::{ComponentId, ComponentKind, ComponentTree};
use crate::models::Axis;

pub trait SizePolicy: Send + Sync {
    /// Can an ancestor of `component` define its size along `axis`?
    fn can_ancestor_define(&self, axis: Axis, tree: &ComponentTree, component: ComponentId)
        -> bool;
}

/// Accepts every percentage size.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveSizes;

impl SizePolicy for PermissiveSizes {
    fn can_ancestor_define(&self, _axis: Axis, _tree: &ComponentTree, _component: ComponentId) -> bool {
        true
    }
}

/// Walks up the hierarchy: windows and UIs always define both axes, an
/// ancestor with a fixed size defines it, a relatively sized ancestor defers
/// to its own parent and an undefined one breaks the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerSizes;

impl SizePolicy for ContainerSizes {
    fn can_ancestor_define(&self, axis: Axis, tree: &ComponentTree, component: ComponentId) -> bool {
        let mut current = tree.parent(component);
        while let Some(id) = current {
            let Some(kind) = tree.kind(id) else {
                return false;
            };
            if matches!(kind, ComponentKind::Ui | ComponentKind::Window) {
                return true;
            }
            let Some(props) = tree.props(id) else {
                return false;
            };
            let size = match axis {
                Axis::Width => props.width,
                Axis::Height => props.height,
            };
            if !size.is_defined() {
                return false;
            }
            if !size.is_relative() {
                return true;
            }
            current = tree.parent(id);
        }
        false
    }
}
