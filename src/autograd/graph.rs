// src/autograd/graph.rs

use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Recursively builds a topological sort of the computation graph.
/// Used by `backward()` to process nodes in the correct order.
/// Uses a `HashSet` keyed on the node's `Arc` pointer address, so
/// sharing is detected by identity, never by value.
pub(crate) fn build_topo(
    node: &Value,
    visited: &mut HashSet<*const RwLock<ValueData>>,
    sorted_list: &mut Vec<Value>,
) {
    let node_ptr = node.as_ptr();
    if !visited.contains(&node_ptr) {
        visited.insert(node_ptr);

        // Parents are visited first (post-order DFS), so every parent
        // lands strictly before the node that depends on it. Insertion
        // order of the parent list keeps the traversal deterministic.
        let parents = node.parents();
        log::trace!(
            "[build_topo] node {:?} op={:?} parents={}",
            node_ptr,
            node.op(),
            parents.len()
        );
        for parent in &parents {
            build_topo(parent, visited, sorted_list);
        }
        sorted_list.push(node.clone());
    }
}

/// Produces every node reachable from `root` exactly once, parents
/// strictly before children. Nodes unreachable from `root` are excluded.
pub(crate) fn topo_sort(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Drives the reverse-mode pass from `root`.
///
/// Seeds `root.grad = 1.0`, then walks the topological order reversed
/// (children before parents), snapshotting each node's forward data and
/// accumulated gradient under a short read lock before invoking its
/// propagation rule. By the time a node's own rule runs, its `grad`
/// already holds the complete sum of every downstream contribution.
pub(crate) fn run_backward(root: &Value) {
    let order = topo_sort(root);
    log::debug!("backward pass over {} nodes", order.len());

    // Derivative of the output with respect to itself.
    root.write_data().grad = 1.0;

    for node in order.iter().rev() {
        let (output_data, upstream_grad, grad_fn) = {
            let guard = node.read_data();
            (guard.data, guard.grad, guard.grad_fn.clone())
        };
        // Snapshot released before the rule takes its own locks; a leaf
        // has no rule and is a no-op.
        if let Some(grad_fn) = grad_fn {
            grad_fn.backward(output_data, upstream_grad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn index_of(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|n| n.ptr_eq(node))
            .expect("node missing from topological order")
    }

    #[test]
    fn test_topo_order_parents_before_children() {
        let a = Value::new(2.0);
        let b = Value::new(-3.0);
        let c = &a * &b;
        let d = &c + &a;
        let e = d.relu();

        let order = topo_sort(&e);
        assert_eq!(order.len(), 5);
        for node in &order {
            let node_idx = index_of(&order, node);
            for parent in node.parents() {
                assert!(
                    index_of(&order, &parent) < node_idx,
                    "parent must come strictly before its dependent"
                );
            }
        }
        // The root is always last.
        assert!(order.last().unwrap().ptr_eq(&e));
    }

    #[test]
    fn test_topo_order_diamond_visits_shared_node_once() {
        let x = Value::new(1.0);
        let left = &x * 2.0;
        let right = &x * 3.0;
        let top = &left + &right;

        let order = topo_sort(&top);
        assert_eq!(order.len(), 6); // x, two literal factors, two products, sum
        let x_count = order.iter().filter(|n| n.ptr_eq(&x)).count();
        assert_eq!(x_count, 1);
    }

    #[test]
    fn test_topo_order_excludes_unreachable_nodes() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let _unrelated = &a + &b;
        let c = &a * 5.0;

        let order = topo_sort(&c);
        assert!(order.iter().all(|n| !n.ptr_eq(&b)));
    }

    #[test]
    fn test_backward_on_bare_literal() {
        let v = Value::new(3.0);
        v.backward();
        assert_eq!(v.grad(), 1.0);
        assert_eq!(v.data(), 3.0);
    }

    #[test]
    fn test_repeated_backward_accumulates() {
        let x = Value::new(2.0);
        let y = &x * &x;
        y.backward();
        assert_eq!(x.grad(), 4.0);
        // Second pass without zeroing: documented accumulation.
        y.backward();
        assert_eq!(x.grad(), 8.0);
    }

    #[test]
    fn test_backward_after_zero_grad_is_fresh() {
        let x = Value::new(2.0);
        let y = &x * &x;
        y.backward();
        x.zero_grad();
        y.zero_grad();
        y.backward();
        assert_eq!(x.grad(), 4.0);
    }
}
