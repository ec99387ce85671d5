use orx_bintree_node::{BinaryTree, MemoryReclaimAlways, OwnedNode};
use orx_pinned_vec::PinnedVec;
use std::{cell::Cell, rc::Rc};
use test_case::test_case;

struct DropCounter {
    depth: usize,
    dropped: Rc<Cell<usize>>,
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

fn left_chain(
    tree: &mut BinaryTree<DropCounter>,
    depth: usize,
    dropped: &Rc<Cell<usize>>,
) -> OwnedNode<DropCounter> {
    let value = |depth| DropCounter {
        depth,
        dropped: dropped.clone(),
    };

    let mut root = tree.create_leaf(value(depth - 1));
    for d in (0..depth - 1).rev() {
        root = tree.fork(value(d), Some(root), None);
    }
    root
}

#[test_case(1)]
#[test_case(2)]
#[test_case(16)]
#[test_case(1_000)]
#[test_case(200_000)]
fn release_deep_chain(depth: usize) {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();

    let root = left_chain(&mut tree, depth, &dropped);
    assert_eq!(tree.len(), depth);
    assert_eq!(tree.value(&root.idx()).depth, 0);

    let root_value = tree.release(root);
    assert_eq!(root_value.depth, 0);
    assert_eq!(dropped.get(), depth - 1);

    drop(root_value);
    assert_eq!(dropped.get(), depth);
    assert!(tree.is_empty());
}

#[test_case(1)]
#[test_case(1_000)]
#[test_case(200_000)]
fn drop_tree_with_deep_chain(depth: usize) {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();

    let _root = left_chain(&mut tree, depth, &dropped);
    assert_eq!(dropped.get(), 0);

    drop(tree);
    assert_eq!(dropped.get(), depth);
}

#[test_case(1)]
#[test_case(1_000)]
fn clear_tree_with_deep_chain(depth: usize) {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();

    let root = left_chain(&mut tree, depth, &dropped);
    let root_idx = root.idx();

    tree.clear();
    assert_eq!(dropped.get(), depth);
    assert!(tree.is_empty());
    assert!(!tree.is_valid(&root_idx));
}

#[test]
fn parent_chain_of_deepest_node() {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();
    let depth = 64;

    let root = left_chain(&mut tree, depth, &dropped);

    let mut deepest = root.idx();
    while let Some(left) = tree.left(&deepest) {
        deepest = left;
    }
    assert_eq!(tree.value(&deepest).depth, depth - 1);

    let mut current = deepest;
    let mut num_ancestors = 0;
    while let Some(parent) = tree.parent(&current) {
        assert_eq!(tree.left(&parent), Some(current));
        current = parent;
        num_ancestors += 1;
    }
    assert_eq!(current, root.idx());
    assert_eq!(num_ancestors, depth - 1);
}

#[test]
fn release_complete_tree_reuses_all_positions() {
    let mut tree: BinaryTree<usize, MemoryReclaimAlways> = BinaryTree::new();

    fn complete(
        tree: &mut BinaryTree<usize, MemoryReclaimAlways>,
        depth: usize,
    ) -> OwnedNode<usize> {
        let mut level: Vec<_> = (0..(1 << depth)).map(|i| tree.create_leaf(i)).collect();
        while level.len() > 1 {
            let mut next = vec![];
            let mut iter = level.into_iter();
            while let (Some(l), Some(r)) = (iter.next(), iter.next()) {
                next.push(tree.fork(0, Some(l), Some(r)));
            }
            level = next;
        }
        level.pop().unwrap()
    }

    let root = complete(&mut tree, 10);
    let num_nodes = (1 << 11) - 1;
    assert_eq!(tree.len(), num_nodes);

    let _ = tree.release(root);
    assert!(tree.is_empty());
    assert_eq!(tree.utilization().num_closed_nodes, num_nodes);

    let root = complete(&mut tree, 10);
    assert_eq!(tree.len(), num_nodes);
    assert_eq!(tree.nodes().len(), num_nodes);
    assert_eq!(tree.utilization().num_closed_nodes, 0);

    let _ = tree.release(root);
}

#[test_case(1)]
#[test_case(1_000)]
#[test_case(200_000)]
fn grow_deep_chain_top_down(depth: usize) {
    let dropped = Rc::new(Cell::new(0));
    let value = |depth| DropCounter {
        depth,
        dropped: dropped.clone(),
    };
    let mut tree: BinaryTree<DropCounter> = BinaryTree::new();

    let root = tree.create_leaf(value(0));
    let mut deepest = root.idx();
    for d in 1..depth {
        assert!(tree.replace_left_with_leaf(&deepest, value(d)).is_none());
        deepest = tree.left(&deepest).unwrap();
    }

    assert_eq!(tree.len(), depth);
    assert_eq!(tree.value(&deepest).depth, depth - 1);

    drop(tree.release(root));
    assert_eq!(dropped.get(), depth);
    assert!(tree.is_empty());
}

#[test]
#[should_panic]
fn attach_subtree_below_its_own_deep_node() {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();

    let root = left_chain(&mut tree, 1_000, &dropped);
    let mut deepest = root.idx();
    while let Some(left) = tree.left(&deepest) {
        deepest = left;
    }

    let _ = tree.replace_right(&deepest, Some(root));
}

#[test]
fn dropped_replaced_children_are_released() {
    let dropped = Rc::new(Cell::new(0));
    let value = |depth| DropCounter {
        depth,
        dropped: dropped.clone(),
    };
    let mut tree: BinaryTree<DropCounter> = BinaryTree::new();

    let left = tree.create_leaf(value(1));
    let right = tree.create_leaf(value(1));
    let n = tree.fork(value(0), Some(left), Some(right));

    for _ in 0..3 {
        let _ = tree.replace_left_with_leaf(&n.idx(), value(1));
    }
    assert_eq!(dropped.get(), 2);
    assert_eq!(tree.release_dropped(), 1);
    assert_eq!(dropped.get(), 3);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.utilization().num_closed_nodes, 3);
}

#[test_case(1)]
#[test_case(1_000)]
#[test_case(200_000)]
fn dropped_deep_chain_is_released(depth: usize) {
    let dropped = Rc::new(Cell::new(0));
    let mut tree = BinaryTree::new();

    let root = left_chain(&mut tree, depth, &dropped);
    drop(root);
    assert_eq!(dropped.get(), 0);

    assert_eq!(tree.release_dropped(), 1);
    assert_eq!(dropped.get(), depth);
    assert!(tree.is_empty());
}
