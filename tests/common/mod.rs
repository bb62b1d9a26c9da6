//! Recursive reference traversals over slot indices

#![allow(dead_code)]

/// Pre-order of a nearly-complete tree with `size` nodes, by slot
pub fn pre_order(size: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(size);
    visit(0, size, &mut out, Order::Pre);
    out
}

/// In-order of a nearly-complete tree with `size` nodes, by slot
pub fn in_order(size: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(size);
    visit(0, size, &mut out, Order::In);
    out
}

/// Post-order of a nearly-complete tree with `size` nodes, by slot
pub fn post_order(size: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(size);
    visit(0, size, &mut out, Order::Post);
    out
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

fn visit(index: usize, size: usize, out: &mut Vec<usize>, order: Order) {
    if index >= size {
        return;
    }
    if let Order::Pre = order {
        out.push(index);
    }
    visit(2 * index + 1, size, out, order);
    if let Order::In = order {
        out.push(index);
    }
    visit(2 * index + 2, size, out, order);
    if let Order::Post = order {
        out.push(index);
    }
}
