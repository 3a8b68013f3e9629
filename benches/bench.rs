use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Builds a well-shaped tree holding `num_nodes` values by inserting range
/// midpoints first. Inserting `0..num_nodes` in order would build a chain and
/// make construction quadratic.
fn build_tree(num_nodes: i32) -> Tree<i32> {
    let mut tree = Tree::new();
    let mut ranges = vec![(0, num_nodes - 1)];
    while let Some((lo, hi)) = ranges.pop() {
        if lo > hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        tree.insert(mid);
        ranges.push((lo, mid - 1));
        ranges.push((mid + 1, hi));
    }
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various sizes of tree before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;
        let tree = build_tree(num_nodes);

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "in-order", |tree, _i| {
        let _values = black_box(tree.dfs_in_order());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
